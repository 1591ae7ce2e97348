//! Errors surfaced by the entity store.

use thiserror::Error;

/// Errors from entity table operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A stored row body no longer matches the record schema.
    #[error("row {id} has a malformed body: {source}")]
    Corrupt {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The storage backend failed.
    #[error("storage backend failure: {0}")]
    Backend(String),
}
