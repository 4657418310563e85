use lw_core::Signature;
use lw_store::StoreError;
use thiserror::Error;

/// Errors that fail a detection run.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Another run advanced the signature slot to a different value between
    /// our read and our swap.
    #[error("Signature slot was updated concurrently to {}", .actual.as_ref().map_or("<empty>", Signature::short))]
    ConcurrentUpdate { actual: Option<Signature> },

    #[error("Failed to serialize missions: {0}")]
    Serialize(#[from] serde_json::Error),
}
