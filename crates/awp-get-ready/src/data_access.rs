//! # Get-Ready Data Access
//!
//! Sessions live in the shared entity table; student search runs against
//! the search index. The session-student row id is derived from both
//! parents, which makes adding the same student to a session twice a plain
//! overwrite.

use crate::errors::{GetReadyError, SearchError};
use crate::ports::SearchIndex;
use crate::query::student_search_query;
use async_trait::async_trait;
use awp_store::{EntityStore, TableItem};
use shared_types::{generate_id, session_student_id, EntityType, SearchStudent, Session, SessionStudent};
use std::sync::Arc;
use tracing::{debug, error};

/// Persistence and search capability for the get-ready surface.
#[async_trait]
pub trait GetReadyDataAccess: Send + Sync {
    /// Name search over indexed students, optionally scoped to a school.
    async fn search_students(
        &self,
        query: &str,
        school_id: Option<&str>,
    ) -> Result<Vec<SearchStudent>, GetReadyError>;

    /// Persist a new session and return it with its generated id.
    async fn create_session(
        &self,
        name: &str,
        school_id: &str,
        date: &str,
    ) -> Result<Session, GetReadyError>;

    /// Sessions, optionally scoped to one school.
    async fn get_sessions(&self, school_id: Option<&str>) -> Result<Vec<Session>, GetReadyError>;

    /// Attach a student to a session. Repeating the call overwrites the
    /// same row.
    async fn add_student_to_session(
        &self,
        record: SessionStudent,
    ) -> Result<SessionStudent, GetReadyError>;

    /// Students attached to one session.
    async fn get_session_students(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionStudent>, GetReadyError>;
}

/// [`GetReadyDataAccess`] over an injected entity store and search index.
pub struct GetReadyStore {
    store: Arc<dyn EntityStore>,
    index: Arc<dyn SearchIndex>,
    index_name: String,
}

impl GetReadyStore {
    #[must_use]
    pub fn new(
        store: Arc<dyn EntityStore>,
        index: Arc<dyn SearchIndex>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            index,
            index_name: index_name.into(),
        }
    }
}

#[async_trait]
impl GetReadyDataAccess for GetReadyStore {
    async fn search_students(
        &self,
        query: &str,
        school_id: Option<&str>,
    ) -> Result<Vec<SearchStudent>, GetReadyError> {
        let body = student_search_query(query, school_id);
        match self.index.search(&self.index_name, &body).await {
            Ok(hits) => Ok(hits),
            // No index yet means nobody has enrolled; that is an empty
            // result, not a failure.
            Err(SearchError::IndexNotFound { index }) => {
                debug!(%index, "search index missing, returning no hits");
                Ok(Vec::new())
            }
            Err(SearchError::Backend { status, body }) => {
                error!(?status, %body, "search backend failed");
                Err(SearchError::Backend { status, body }.into())
            }
        }
    }

    async fn create_session(
        &self,
        name: &str,
        school_id: &str,
        date: &str,
    ) -> Result<Session, GetReadyError> {
        let session = Session {
            id: generate_id("session"),
            name: name.to_owned(),
            school_id: school_id.to_owned(),
            date: date.to_owned(),
        };
        let item = TableItem::new(
            session.id.clone(),
            EntityType::Session,
            serde_json::to_value(&session)?,
        )
        .with_school(school_id);
        self.store.put(item).await?;
        debug!(session_id = %session.id, school_id = %school_id, "created session");
        Ok(session)
    }

    async fn get_sessions(&self, school_id: Option<&str>) -> Result<Vec<Session>, GetReadyError> {
        let items = match school_id {
            Some(school_id) => {
                self.store
                    .query_by_school(school_id, EntityType::Session)
                    .await?
            }
            None => self.store.query_by_type(EntityType::Session).await?,
        };
        items
            .iter()
            .map(|item| item.decode::<Session>().map_err(GetReadyError::from))
            .collect()
    }

    async fn add_student_to_session(
        &self,
        record: SessionStudent,
    ) -> Result<SessionStudent, GetReadyError> {
        let id = session_student_id(&record.session_id, &record.student_id);
        let item = TableItem::new(
            id,
            EntityType::SessionStudent,
            serde_json::to_value(&record)?,
        )
        .with_session(&record.session_id)
        .with_school(&record.school_id);
        self.store.put(item).await?;
        Ok(record)
    }

    async fn get_session_students(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionStudent>, GetReadyError> {
        let items = self.store.query_by_session(session_id).await?;
        items
            .iter()
            .map(|item| item.decode::<SessionStudent>().map_err(GetReadyError::from))
            .collect()
    }
}
