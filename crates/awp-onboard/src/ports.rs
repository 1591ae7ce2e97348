//! # Data-Access Port
//!
//! Capability interface the onboarding router depends on. The shipped
//! implementation runs over the shared entity table; swapping in a remote
//! backend means implementing this trait, not touching the router.

use crate::errors::OnboardError;
use async_trait::async_trait;
use shared_types::{School, Student};

/// Persistence capability for schools and students.
#[async_trait]
pub trait OnboardDataAccess: Send + Sync {
    /// All schools, in rough creation order.
    async fn get_schools(&self) -> Result<Vec<School>, OnboardError>;

    /// Persist a new school and return it with its generated id.
    async fn create_school(&self, name: &str) -> Result<School, OnboardError>;

    /// Delete a school, then every student enrolled at it.
    async fn delete_school(&self, id: &str) -> Result<(), OnboardError>;

    /// Students enrolled at one school.
    async fn get_students(&self, school_id: &str) -> Result<Vec<Student>, OnboardError>;

    /// Persist a new student and return it with its generated id.
    async fn create_student(
        &self,
        first_name: &str,
        last_name: &str,
        school_id: &str,
    ) -> Result<Student, OnboardError>;

    /// Delete a single student by id.
    async fn delete_student(&self, id: &str) -> Result<(), OnboardError>;
}
