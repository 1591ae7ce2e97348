//! Onboarding error types.

use awp_store::StoreError;
use shared_bus::PublishError;
use thiserror::Error;

/// Errors surfaced by onboarding procedures.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Input failed validation before any side effect ran.
    #[error("{0}")]
    Validation(String),

    /// The entity table rejected or corrupted an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The event bus refused the enrollment event.
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    /// A record could not be encoded for storage.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
