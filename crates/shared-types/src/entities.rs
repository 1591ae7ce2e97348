//! # Domain Records
//!
//! The record kinds stored in the shared entity table, plus the search
//! projection that lives only in the search index.

use serde::{Deserialize, Serialize};

/// Discriminator distinguishing which logical record kind a row in the
/// shared entity table represents.
///
/// The table holds all four kinds side by side; queries by kind go through
/// the type secondary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    School,
    Student,
    Session,
    SessionStudent,
}

impl EntityType {
    /// Wire name of the discriminator, as stored in table rows.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::School => "SCHOOL",
            Self::Student => "STUDENT",
            Self::Session => "SESSION",
            Self::SessionStudent => "SESSION_STUDENT",
        }
    }
}

/// A school, created during onboarding. Immutable after creation; deleting
/// a school cascades to its students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
}

/// A student enrolled at one school. `school_id` is a non-owning reference;
/// nothing cascades from a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
}

/// A scheduled event tied to one school. `date` is an ISO-8601 date string,
/// passed through verbatim from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub school_id: String,
    pub date: String,
}

/// Association of a student with a session.
///
/// Identity fields are a denormalized copy taken at association time, not a
/// live reference; composite identity is `(session_id, student_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStudent {
    pub session_id: String,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
}

/// Search-result projection of a student.
///
/// Derived from the enrollment event, lives only in the search index, and is
/// never the source of truth for student identity. `enrolled_at` is the
/// event timestamp in RFC 3339 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStudent {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
    pub enrolled_at: String,
}
