//! # Procedure Inputs
//!
//! Input shapes for the onboarding procedures. Each carries its own
//! `validate` so the router can reject bad input before touching the store
//! or the bus.

use crate::errors::OnboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchoolInput {
    pub name: String,
}

impl CreateSchoolInput {
    pub fn validate(&self) -> Result<(), OnboardError> {
        if self.name.is_empty() {
            return Err(OnboardError::Validation("School name is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSchoolInput {
    pub id: String,
}

impl DeleteSchoolInput {
    pub fn validate(&self) -> Result<(), OnboardError> {
        if self.id.is_empty() {
            return Err(OnboardError::Validation("School id is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStudentsInput {
    pub school_id: String,
}

impl GetStudentsInput {
    pub fn validate(&self) -> Result<(), OnboardError> {
        if self.school_id.is_empty() {
            return Err(OnboardError::Validation("School id is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentInput {
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
}

impl CreateStudentInput {
    pub fn validate(&self) -> Result<(), OnboardError> {
        if self.first_name.is_empty() {
            return Err(OnboardError::Validation("First name is required".into()));
        }
        if self.last_name.is_empty() {
            return Err(OnboardError::Validation("Last name is required".into()));
        }
        if self.school_id.is_empty() {
            return Err(OnboardError::Validation("School id is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStudentInput {
    pub id: String,
}

impl DeleteStudentInput {
    pub fn validate(&self) -> Result<(), OnboardError> {
        if self.id.is_empty() {
            return Err(OnboardError::Validation("Student id is required".into()));
        }
        Ok(())
    }
}
