//! # In-Memory Search Index
//!
//! Process-local search index. Indices are created lazily on first upsert,
//! so a search that races ahead of the first enrollment sees the same
//! index-not-found condition a fresh cluster would report.

use crate::errors::SearchError;
use crate::ports::SearchIndex;
use crate::query::SearchQuery;
use async_trait::async_trait;
use shared_types::SearchStudent;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

/// [`SearchIndex`] over in-process maps. Documents are keyed by student id,
/// ordered so results come back deterministically.
#[derive(Default)]
pub struct MemorySearchIndex {
    indices: RwLock<HashMap<String, BTreeMap<String, SearchStudent>>>,
}

impl MemorySearchIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in one index, if it exists.
    pub fn doc_count(&self, index: &str) -> Result<Option<usize>, SearchError> {
        let indices = self.read()?;
        Ok(indices.get(index).map(BTreeMap::len))
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, BTreeMap<String, SearchStudent>>>, SearchError>
    {
        self.indices.read().map_err(|_| SearchError::Backend {
            status: None,
            body: "search index lock poisoned".into(),
        })
    }
}

#[async_trait]
impl SearchIndex for MemorySearchIndex {
    async fn upsert(&self, index: &str, doc: SearchStudent) -> Result<(), SearchError> {
        let mut indices = self.indices.write().map_err(|_| SearchError::Backend {
            status: None,
            body: "search index lock poisoned".into(),
        })?;
        indices
            .entry(index.to_owned())
            .or_default()
            .insert(doc.id.clone(), doc);
        Ok(())
    }

    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<Vec<SearchStudent>, SearchError> {
        let indices = self.read()?;
        let docs = indices.get(index).ok_or_else(|| SearchError::IndexNotFound {
            index: index.to_owned(),
        })?;
        Ok(docs
            .values()
            .filter(|doc| query.matches(doc))
            .cloned()
            .collect())
    }
}
