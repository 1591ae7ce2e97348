//! # Event Contract
//!
//! One event kind flows through the bus today: a student being enrolled.
//! Events are addressed by a fixed `(source, detail_type)` pair and carry
//! their payload as JSON, mirroring the entry shape of a managed event bus.
//! Consumers decode the payload into its closed, versioned structure and
//! validate it before acting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Fixed source string for enrollment events.
pub const ENROLLMENT_SOURCE: &str = "awp.enrollment";

/// Detail-type string for the student-enrolled event.
pub const STUDENT_ENROLLED: &str = "StudentEnrolled";

/// Version 1 of the student-enrolled payload.
///
/// A closed, tagged structure: unknown event shapes fail decoding instead of
/// flowing through as loose JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentEnrolledV1 {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
}

impl StudentEnrolledV1 {
    /// Schema validation applied at the consumer boundary.
    pub fn validate(&self) -> Result<(), EventDecodeError> {
        if self.id.is_empty() {
            return Err(EventDecodeError::Invalid("student id is empty".into()));
        }
        if self.school_id.is_empty() {
            return Err(EventDecodeError::Invalid("school id is empty".into()));
        }
        Ok(())
    }
}

/// Errors from decoding an envelope into a typed payload.
///
/// Implemented by hand rather than via `#[derive(Error)]` because thiserror
/// treats the `WrongKind.source` field name as the error source, and `String`
/// does not implement `std::error::Error`.
#[derive(Debug)]
pub enum EventDecodeError {
    /// The envelope is addressed to a different `(source, detail_type)`.
    WrongKind { source: String, detail_type: String },

    /// The detail JSON does not match the payload schema.
    Malformed(serde_json::Error),

    /// The detail parsed but failed schema validation.
    Invalid(String),
}

impl std::fmt::Display for EventDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongKind {
                source,
                detail_type,
            } => write!(f, "unexpected event kind ({source}, {detail_type})"),
            Self::Malformed(err) => write!(f, "malformed event detail: {err}"),
            Self::Invalid(msg) => write!(f, "event detail failed validation: {msg}"),
        }
    }
}

impl std::error::Error for EventDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EventDecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err)
    }
}

/// An event as carried on the bus.
///
/// The shape mirrors a managed event-bus entry: a source, a detail-type, a
/// delivery timestamp, and an opaque JSON detail. The `id` identifies the
/// delivery, not the domain entity inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub id: Uuid,
    pub source: String,
    pub detail_type: String,
    pub time: DateTime<Utc>,
    pub detail: Value,
}

impl EventEnvelope {
    /// Wrap a JSON detail in a new envelope stamped with the current time.
    #[must_use]
    pub fn new(source: impl Into<String>, detail_type: impl Into<String>, detail: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            detail_type: detail_type.into(),
            time: Utc::now(),
            detail,
        }
    }

    /// Build the enrollment envelope for a student payload.
    pub fn student_enrolled(payload: &StudentEnrolledV1) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            ENROLLMENT_SOURCE,
            STUDENT_ENROLLED,
            serde_json::to_value(payload)?,
        ))
    }

    /// Decode and validate the v1 student-enrolled payload.
    ///
    /// Fails if the envelope is addressed elsewhere, the detail does not
    /// match the v1 schema, or the payload fails validation.
    pub fn decode_student_enrolled(&self) -> Result<StudentEnrolledV1, EventDecodeError> {
        if self.source != ENROLLMENT_SOURCE || self.detail_type != STUDENT_ENROLLED {
            return Err(EventDecodeError::WrongKind {
                source: self.source.clone(),
                detail_type: self.detail_type.clone(),
            });
        }

        let payload: StudentEnrolledV1 = serde_json::from_value(self.detail.clone())?;
        payload.validate()?;
        Ok(payload)
    }
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Sources to include. Empty means all sources.
    pub sources: Vec<String>,
    /// Detail-types to include. Empty means all detail-types.
    pub detail_types: Vec<String>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for one `(source, detail_type)` pair.
    #[must_use]
    pub fn for_event(source: impl Into<String>, detail_type: impl Into<String>) -> Self {
        Self {
            sources: vec![source.into()],
            detail_types: vec![detail_type.into()],
        }
    }

    /// Check if an envelope matches this filter.
    #[must_use]
    pub fn matches(&self, event: &EventEnvelope) -> bool {
        let source_match = self.sources.is_empty() || self.sources.contains(&event.source);
        let detail_match =
            self.detail_types.is_empty() || self.detail_types.contains(&event.detail_type);

        source_match && detail_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bart() -> StudentEnrolledV1 {
        StudentEnrolledV1 {
            id: "student-1".into(),
            first_name: "Bart".into(),
            last_name: "Simpson".into(),
            school_id: "school-1".into(),
        }
    }

    #[test]
    fn test_student_enrolled_round_trip() {
        let envelope = EventEnvelope::student_enrolled(&bart()).unwrap();
        assert_eq!(envelope.source, ENROLLMENT_SOURCE);
        assert_eq!(envelope.detail_type, STUDENT_ENROLLED);

        let decoded = envelope.decode_student_enrolled().unwrap();
        assert_eq!(decoded, bart());
    }

    #[test]
    fn test_decode_rejects_wrong_kind() {
        let envelope = EventEnvelope::new("awp.billing", "InvoiceIssued", Value::Null);
        let err = envelope.decode_student_enrolled().unwrap_err();
        assert!(matches!(err, EventDecodeError::WrongKind { .. }));
    }

    #[test]
    fn test_decode_rejects_malformed_detail() {
        let envelope = EventEnvelope::new(
            ENROLLMENT_SOURCE,
            STUDENT_ENROLLED,
            serde_json::json!({ "id": "student-1" }),
        );
        let err = envelope.decode_student_enrolled().unwrap_err();
        assert!(matches!(err, EventDecodeError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_empty_ids() {
        let mut payload = bart();
        payload.school_id = String::new();
        let envelope = EventEnvelope::student_enrolled(&payload).unwrap();
        let err = envelope.decode_student_enrolled().unwrap_err();
        assert!(matches!(err, EventDecodeError::Invalid(_)));
    }

    #[test]
    fn test_filter_all() {
        let envelope = EventEnvelope::student_enrolled(&bart()).unwrap();
        assert!(EventFilter::all().matches(&envelope));
    }

    #[test]
    fn test_filter_by_event_kind() {
        let filter = EventFilter::for_event(ENROLLMENT_SOURCE, STUDENT_ENROLLED);

        let enrolled = EventEnvelope::student_enrolled(&bart()).unwrap();
        assert!(filter.matches(&enrolled));

        let other = EventEnvelope::new("awp.billing", "InvoiceIssued", Value::Null);
        assert!(!filter.matches(&other));

        let same_source_other_type =
            EventEnvelope::new(ENROLLMENT_SOURCE, "StudentWithdrawn", Value::Null);
        assert!(!filter.matches(&same_source_other_type));
    }
}
