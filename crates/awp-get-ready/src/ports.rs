//! # Search Index Port
//!
//! Capability interface over the student search index. The shipped
//! implementation is the in-process [`crate::adapters::MemorySearchIndex`];
//! a hosted cluster adapter would serialize [`SearchQuery`] bodies onto the
//! wire instead.

use crate::errors::SearchError;
use crate::query::SearchQuery;
use async_trait::async_trait;
use shared_types::SearchStudent;

/// Abstract interface over the search index.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Insert or overwrite a document, keyed by student id. Creates the
    /// index on first write.
    async fn upsert(&self, index: &str, doc: SearchStudent) -> Result<(), SearchError>;

    /// Run a query against one index. Fails with
    /// [`SearchError::IndexNotFound`] when the index has never been
    /// written to.
    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<Vec<SearchStudent>, SearchError>;
}
