//! # In-Memory Entity Store
//!
//! Process-local implementation of the entity table. Maintains the three
//! secondary indexes as real index maps so queries read like index lookups
//! rather than table scans.

use crate::errors::StoreError;
use crate::item::TableItem;
use crate::store::EntityStore;
use async_trait::async_trait;
use shared_types::EntityType;
use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;
use tracing::trace;

#[derive(Default)]
struct Tables {
    items: HashMap<String, TableItem>,
    by_type: HashMap<EntityType, BTreeSet<String>>,
    by_school: HashMap<String, BTreeSet<String>>,
    by_session: HashMap<String, BTreeSet<String>>,
}

impl Tables {
    fn unindex(&mut self, item: &TableItem) {
        if let Some(ids) = self.by_type.get_mut(&item.entity_type) {
            ids.remove(&item.id);
        }
        if let Some(school_id) = &item.school_id {
            if let Some(ids) = self.by_school.get_mut(school_id) {
                ids.remove(&item.id);
            }
        }
        if let Some(session_id) = &item.session_id {
            if let Some(ids) = self.by_session.get_mut(session_id) {
                ids.remove(&item.id);
            }
        }
    }

    fn index(&mut self, item: &TableItem) {
        self.by_type
            .entry(item.entity_type)
            .or_default()
            .insert(item.id.clone());
        if let Some(school_id) = &item.school_id {
            self.by_school
                .entry(school_id.clone())
                .or_default()
                .insert(item.id.clone());
        }
        if let Some(session_id) = &item.session_id {
            self.by_session
                .entry(session_id.clone())
                .or_default()
                .insert(item.id.clone());
        }
    }

    fn collect(&self, ids: Option<&BTreeSet<String>>) -> Vec<TableItem> {
        ids.map(|ids| {
            ids.iter()
                .filter_map(|id| self.items.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
    }
}

/// In-memory entity table with secondary index maps.
///
/// Index sets are ordered by id; because ids embed a millisecond timestamp,
/// query results come back in rough creation order.
#[derive(Default)]
pub struct MemoryEntityStore {
    inner: RwLock<Tables>,
}

impl MemoryEntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows currently in the table, across all entity kinds.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.items.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("entity table lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("entity table lock poisoned".into()))
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn put(&self, item: TableItem) -> Result<(), StoreError> {
        let mut tables = self.write()?;

        // Upsert: drop index entries for any row being overwritten
        if let Some(previous) = tables.items.remove(&item.id) {
            tables.unindex(&previous);
        }

        tables.index(&item);
        trace!(id = %item.id, entity_type = ?item.entity_type, "row upserted");
        tables.items.insert(item.id.clone(), item);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<TableItem>, StoreError> {
        Ok(self.read()?.items.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if let Some(previous) = tables.items.remove(id) {
            tables.unindex(&previous);
            trace!(id = %id, "row deleted");
        }
        Ok(())
    }

    async fn query_by_type(&self, entity_type: EntityType) -> Result<Vec<TableItem>, StoreError> {
        let tables = self.read()?;
        Ok(tables.collect(tables.by_type.get(&entity_type)))
    }

    async fn query_by_school(
        &self,
        school_id: &str,
        entity_type: EntityType,
    ) -> Result<Vec<TableItem>, StoreError> {
        let tables = self.read()?;
        let mut items = tables.collect(tables.by_school.get(school_id));
        items.retain(|item| item.entity_type == entity_type);
        Ok(items)
    }

    async fn query_by_session(&self, session_id: &str) -> Result<Vec<TableItem>, StoreError> {
        let tables = self.read()?;
        Ok(tables.collect(tables.by_session.get(session_id)))
    }
}
