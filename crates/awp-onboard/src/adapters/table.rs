//! # Entity-Table Data Access
//!
//! Onboarding persistence over the shared entity table. Schools carry no
//! index attributes; students carry the school attribute so the school
//! index can answer enrollment queries.

use crate::errors::OnboardError;
use crate::ports::OnboardDataAccess;
use async_trait::async_trait;
use awp_store::{EntityStore, TableItem};
use futures::future::join_all;
use shared_types::{generate_id, EntityType, School, Student};
use std::sync::Arc;
use tracing::debug;

/// [`OnboardDataAccess`] backed by an injected [`EntityStore`].
pub struct TableOnboardStore {
    store: Arc<dyn EntityStore>,
}

impl TableOnboardStore {
    #[must_use]
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OnboardDataAccess for TableOnboardStore {
    async fn get_schools(&self) -> Result<Vec<School>, OnboardError> {
        let items = self.store.query_by_type(EntityType::School).await?;
        items
            .iter()
            .map(|item| item.decode::<School>().map_err(OnboardError::from))
            .collect()
    }

    async fn create_school(&self, name: &str) -> Result<School, OnboardError> {
        let school = School {
            id: generate_id("school"),
            name: name.to_owned(),
        };
        let item = TableItem::new(
            school.id.clone(),
            EntityType::School,
            serde_json::to_value(&school)?,
        );
        self.store.put(item).await?;
        debug!(school_id = %school.id, "created school");
        Ok(school)
    }

    async fn delete_school(&self, id: &str) -> Result<(), OnboardError> {
        // Delete the school row first, then fan out over its students.
        // A failure partway leaves orphaned students behind; each delete
        // is idempotent, so the call can simply be retried.
        self.store.delete(id).await?;

        let students = self
            .store
            .query_by_school(id, EntityType::Student)
            .await?;
        debug!(school_id = %id, students = students.len(), "cascading school delete");

        let deletes = students
            .iter()
            .map(|student| self.store.delete(&student.id));
        for result in join_all(deletes).await {
            result?;
        }
        Ok(())
    }

    async fn get_students(&self, school_id: &str) -> Result<Vec<Student>, OnboardError> {
        let items = self
            .store
            .query_by_school(school_id, EntityType::Student)
            .await?;
        items
            .iter()
            .map(|item| item.decode::<Student>().map_err(OnboardError::from))
            .collect()
    }

    async fn create_student(
        &self,
        first_name: &str,
        last_name: &str,
        school_id: &str,
    ) -> Result<Student, OnboardError> {
        let student = Student {
            id: generate_id("student"),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            school_id: school_id.to_owned(),
        };
        let item = TableItem::new(
            student.id.clone(),
            EntityType::Student,
            serde_json::to_value(&student)?,
        )
        .with_school(school_id);
        self.store.put(item).await?;
        debug!(student_id = %student.id, school_id = %school_id, "created student");
        Ok(student)
    }

    async fn delete_student(&self, id: &str) -> Result<(), OnboardError> {
        self.store.delete(id).await?;
        Ok(())
    }
}
