//! # Onboarding Router
//!
//! The typed procedure surface the gateway dispatches into. Validation runs
//! first, then data access; `create_student` additionally publishes the
//! enrollment event after the row is persisted.

use crate::errors::OnboardError;
use crate::ports::OnboardDataAccess;
use crate::schemas::{
    CreateSchoolInput, CreateStudentInput, DeleteSchoolInput, DeleteStudentInput, GetStudentsInput,
};
use shared_bus::{EventEnvelope, EventPublisher, StudentEnrolledV1};
use shared_types::{School, Student};
use std::sync::Arc;
use tracing::info;

/// Onboarding procedures over injected data access and event publishing.
pub struct OnboardRouter {
    data_access: Arc<dyn OnboardDataAccess>,
    publisher: Arc<dyn EventPublisher>,
}

impl OnboardRouter {
    #[must_use]
    pub fn new(data_access: Arc<dyn OnboardDataAccess>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            data_access,
            publisher,
        }
    }

    pub async fn get_schools(&self) -> Result<Vec<School>, OnboardError> {
        self.data_access.get_schools().await
    }

    pub async fn create_school(&self, input: CreateSchoolInput) -> Result<School, OnboardError> {
        input.validate()?;
        let school = self.data_access.create_school(&input.name).await?;
        info!(school_id = %school.id, "school created");
        Ok(school)
    }

    pub async fn delete_school(&self, input: DeleteSchoolInput) -> Result<(), OnboardError> {
        input.validate()?;
        self.data_access.delete_school(&input.id).await?;
        info!(school_id = %input.id, "school deleted");
        Ok(())
    }

    pub async fn get_students(&self, input: GetStudentsInput) -> Result<Vec<Student>, OnboardError> {
        input.validate()?;
        self.data_access.get_students(&input.school_id).await
    }

    /// Persist a student, then announce the enrollment on the bus.
    ///
    /// The write and the publish are not atomic. If the publish fails the
    /// student stays persisted and the error surfaces to the caller; the
    /// search index simply lags until a later enrollment is replayed.
    pub async fn create_student(&self, input: CreateStudentInput) -> Result<Student, OnboardError> {
        input.validate()?;
        let student = self
            .data_access
            .create_student(&input.first_name, &input.last_name, &input.school_id)
            .await?;

        let payload = StudentEnrolledV1 {
            id: student.id.clone(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            school_id: student.school_id.clone(),
        };
        let event = EventEnvelope::student_enrolled(&payload)?;
        self.publisher.publish(event).await?;

        info!(student_id = %student.id, school_id = %student.school_id, "student enrolled");
        Ok(student)
    }

    pub async fn delete_student(&self, input: DeleteStudentInput) -> Result<(), OnboardError> {
        input.validate()?;
        self.data_access.delete_student(&input.id).await?;
        info!(student_id = %input.id, "student deleted");
        Ok(())
    }
}
