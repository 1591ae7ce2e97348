//! # Get-Ready Router
//!
//! Typed procedures over the get-ready data access. Validation first, then
//! straight through to the capability.

use crate::data_access::GetReadyDataAccess;
use crate::errors::GetReadyError;
use crate::schemas::{
    AddStudentToSessionInput, CreateSessionInput, GetSessionStudentsInput, ListSessionsInput,
    SearchStudentsInput,
};
use shared_types::{SearchStudent, Session, SessionStudent};
use std::sync::Arc;
use tracing::info;

/// Get-ready procedures over injected data access.
pub struct GetReadyRouter {
    data_access: Arc<dyn GetReadyDataAccess>,
}

impl GetReadyRouter {
    #[must_use]
    pub fn new(data_access: Arc<dyn GetReadyDataAccess>) -> Self {
        Self { data_access }
    }

    pub async fn search_students(
        &self,
        input: SearchStudentsInput,
    ) -> Result<Vec<SearchStudent>, GetReadyError> {
        input.validate()?;
        self.data_access
            .search_students(&input.query, input.school_id.as_deref())
            .await
    }

    pub async fn create_session(
        &self,
        input: CreateSessionInput,
    ) -> Result<Session, GetReadyError> {
        input.validate()?;
        let session = self
            .data_access
            .create_session(&input.name, &input.school_id, &input.date)
            .await?;
        info!(session_id = %session.id, school_id = %session.school_id, "session created");
        Ok(session)
    }

    pub async fn get_sessions(
        &self,
        input: ListSessionsInput,
    ) -> Result<Vec<Session>, GetReadyError> {
        self.data_access
            .get_sessions(input.school_id.as_deref())
            .await
    }

    pub async fn add_student_to_session(
        &self,
        input: AddStudentToSessionInput,
    ) -> Result<SessionStudent, GetReadyError> {
        input.validate()?;
        let record = SessionStudent {
            session_id: input.session_id,
            student_id: input.student_id,
            first_name: input.first_name,
            last_name: input.last_name,
            school_id: input.school_id,
        };
        let record = self.data_access.add_student_to_session(record).await?;
        info!(
            session_id = %record.session_id,
            student_id = %record.student_id,
            "student added to session"
        );
        Ok(record)
    }

    pub async fn get_session_students(
        &self,
        input: GetSessionStudentsInput,
    ) -> Result<Vec<SessionStudent>, GetReadyError> {
        input.validate()?;
        self.data_access
            .get_session_students(&input.session_id)
            .await
    }
}
