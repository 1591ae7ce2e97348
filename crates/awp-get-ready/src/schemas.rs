//! # Procedure Inputs
//!
//! Input shapes for the get-ready procedures, with the same validate-first
//! convention the onboarding surface uses.

use crate::errors::GetReadyError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStudentsInput {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
}

impl SearchStudentsInput {
    pub fn validate(&self) -> Result<(), GetReadyError> {
        if self.query.is_empty() {
            return Err(GetReadyError::Validation("Search query is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionInput {
    pub name: String,
    pub school_id: String,
    pub date: String,
}

impl CreateSessionInput {
    pub fn validate(&self) -> Result<(), GetReadyError> {
        if self.name.is_empty() {
            return Err(GetReadyError::Validation("Session name is required".into()));
        }
        if self.school_id.is_empty() {
            return Err(GetReadyError::Validation("School id is required".into()));
        }
        if self.date.is_empty() {
            return Err(GetReadyError::Validation("Session date is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentToSessionInput {
    pub session_id: String,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
}

impl AddStudentToSessionInput {
    pub fn validate(&self) -> Result<(), GetReadyError> {
        if self.session_id.is_empty() {
            return Err(GetReadyError::Validation("Session id is required".into()));
        }
        if self.student_id.is_empty() {
            return Err(GetReadyError::Validation("Student id is required".into()));
        }
        if self.first_name.is_empty() {
            return Err(GetReadyError::Validation("First name is required".into()));
        }
        if self.last_name.is_empty() {
            return Err(GetReadyError::Validation("Last name is required".into()));
        }
        if self.school_id.is_empty() {
            return Err(GetReadyError::Validation("School id is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSessionStudentsInput {
    pub session_id: String,
}

impl GetSessionStudentsInput {
    pub fn validate(&self) -> Result<(), GetReadyError> {
        if self.session_id.is_empty() {
            return Err(GetReadyError::Validation("Session id is required".into()));
        }
        Ok(())
    }
}
