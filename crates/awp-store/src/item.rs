//! # Table Rows
//!
//! A row in the shared entity table: an id, the entity-type discriminator,
//! the optional index attributes the secondary indexes key on, and the
//! record body as JSON.

use crate::errors::StoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::EntityType;

/// One row of the shared entity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableItem {
    /// Primary key.
    pub id: String,

    /// Which logical record kind this row holds.
    pub entity_type: EntityType,

    /// School index attribute. Present on students, sessions, and
    /// session-students.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,

    /// Session index attribute. Present on session-students.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// The record body.
    pub body: Value,
}

impl TableItem {
    /// Create a row with no index attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, entity_type: EntityType, body: Value) -> Self {
        Self {
            id: id.into(),
            entity_type,
            school_id: None,
            session_id: None,
            body,
        }
    }

    /// Attach the school index attribute.
    #[must_use]
    pub fn with_school(mut self, school_id: impl Into<String>) -> Self {
        self.school_id = Some(school_id.into());
        self
    }

    /// Attach the session index attribute.
    #[must_use]
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Deserialize the row body into a typed record.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.body.clone()).map_err(|source| StoreError::Corrupt {
            id: self.id.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Student;

    #[test]
    fn test_decode_round_trip() {
        let student = Student {
            id: "student-1".into(),
            first_name: "Lisa".into(),
            last_name: "Simpson".into(),
            school_id: "school-1".into(),
        };
        let item = TableItem::new(
            "student-1",
            EntityType::Student,
            serde_json::to_value(&student).unwrap(),
        )
        .with_school("school-1");

        assert_eq!(item.school_id.as_deref(), Some("school-1"));
        assert_eq!(item.decode::<Student>().unwrap(), student);
    }

    #[test]
    fn test_decode_corrupt_body() {
        let item = TableItem::new(
            "student-1",
            EntityType::Student,
            serde_json::json!({ "id": 42 }),
        );

        let err = item.decode::<Student>().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref id, .. } if id == "student-1"));
    }
}
