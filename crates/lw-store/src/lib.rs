//! # lw-store
//!
//! Durable state for launchwatch: the single "current" mission-set signature
//! and the append-only run log.
//!
//! Two interchangeable backends implement [`SignatureStore`]:
//! - [`LibsqlSignatureStore`]: one keyed row in `signature_slot` plus the
//!   `run_log` table, on a local database file or a remote Turso database
//! - [`FileSignatureStore`]: a one-line signature file plus a JSONL run log
//!   in a local directory
//!
//! The caller picks one at construction time; pipeline code is generic over
//! the trait and never branches on the backend.

pub mod error;
pub mod file_store;
pub mod helpers;
pub mod libsql_store;
mod lock;
mod migrations;
pub mod retry;
mod run_log;

pub use error::StoreError;
pub use file_store::FileSignatureStore;
pub use libsql_store::LibsqlSignatureStore;

use lw_core::Signature;
use lw_core::entities::RunLogEntry;

/// Storage for the last known signature and the run log.
///
/// `replace_signature` is a compare-and-swap: it only installs `new` if the
/// slot still holds `expected` (`None` meaning "empty"), so two overlapping
/// runs cannot both advance the slot from the same previous value. Readers
/// observe either the old or the new signature, never none or both.
#[allow(async_fn_in_trait)]
pub trait SignatureStore {
    /// Short backend name for logs and CLI output.
    fn backend(&self) -> &'static str;

    /// The current signature, or `None` before the first recorded change.
    async fn latest_signature(&self) -> Result<Option<Signature>, StoreError>;

    /// Install `new` as the sole current signature if the slot holds `expected`.
    ///
    /// Returns [`StoreError::Conflict`] (slot untouched) when it does not.
    async fn replace_signature(
        &self,
        expected: Option<&Signature>,
        new: &Signature,
    ) -> Result<(), StoreError>;

    /// Append one entry to the run log. Existing entries are never modified.
    async fn append_run_log(&self, entry: &RunLogEntry) -> Result<(), StoreError>;

    /// Up to `limit` most recent run log entries, newest first.
    async fn run_log(&self, limit: u32) -> Result<Vec<RunLogEntry>, StoreError>;
}
