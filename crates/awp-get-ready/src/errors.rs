//! Get-ready error types.

use awp_store::StoreError;
use shared_bus::EventDecodeError;
use thiserror::Error;

/// Errors surfaced by the search index.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The named index does not exist yet. Callers searching before the
    /// first document lands treat this as an empty result.
    #[error("index not found: {index}")]
    IndexNotFound { index: String },

    /// The index backend failed an operation.
    #[error("search backend error (status {status:?}): {body}")]
    Backend { status: Option<u16>, body: String },
}

/// Errors surfaced by get-ready procedures and the enrollment indexer.
#[derive(Debug, Error)]
pub enum GetReadyError {
    /// Input failed validation before any side effect ran.
    #[error("{0}")]
    Validation(String),

    /// The entity table rejected or corrupted an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The search index failed an operation.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// An event on the bus failed contract validation.
    #[error("event error: {0}")]
    Event(#[from] EventDecodeError),

    /// A record could not be encoded for storage.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
