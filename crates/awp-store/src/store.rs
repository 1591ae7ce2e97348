//! # Entity Store Port
//!
//! The capability interface over the shared table. Data-access layers hold
//! an `Arc<dyn EntityStore>` injected at construction time; nothing reaches
//! for an ambient client.

use crate::errors::StoreError;
use crate::item::TableItem;
use async_trait::async_trait;
use shared_types::EntityType;

/// Abstract interface over the shared entity table.
///
/// All operations are single-shot request/response calls with no
/// transactions spanning rows. `put` is an upsert by id.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Insert or overwrite a row.
    async fn put(&self, item: TableItem) -> Result<(), StoreError>;

    /// Fetch a row by primary key.
    async fn get(&self, id: &str) -> Result<Option<TableItem>, StoreError>;

    /// Delete a row by primary key. Deleting a missing row is a no-op.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Query the type index: all rows of one entity kind.
    async fn query_by_type(&self, entity_type: EntityType) -> Result<Vec<TableItem>, StoreError>;

    /// Query the school index, filtered to one entity kind.
    async fn query_by_school(
        &self,
        school_id: &str,
        entity_type: EntityType,
    ) -> Result<Vec<TableItem>, StoreError>;

    /// Query the session index: all rows associated with one session.
    async fn query_by_session(&self, session_id: &str) -> Result<Vec<TableItem>, StoreError>;
}
