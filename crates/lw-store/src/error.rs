//! Store error types for lw-store.

use std::path::PathBuf;

use lw_core::Signature;
use thiserror::Error;

/// Errors from signature store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The compare-and-swap found a different current signature.
    #[error(
        "Signature slot changed concurrently: expected {}, found {}",
        display_slot(.expected),
        display_slot(.actual)
    )]
    Conflict {
        expected: Option<Signature>,
        actual: Option<Signature>,
    },

    /// The stored signature is not a well-formed digest.
    #[error("Stored signature is corrupt: {0:?}")]
    Corrupt(String),

    /// Another run held the slot lock for longer than the configured timeout.
    #[error("Timed out waiting for lock at {}", .path.display())]
    LockTimeout { path: PathBuf },

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A row could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Invalid state encountered (e.g., bad data in a run log line).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Filesystem error from the local backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this is a compare-and-swap conflict rather than an outage.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

#[allow(clippy::ref_option)]
fn display_slot(signature: &Option<Signature>) -> String {
    signature
        .as_ref()
        .map_or_else(|| "<empty>".to_string(), |s| s.short().to_string())
}
