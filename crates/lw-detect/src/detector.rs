//! Signature comparison against the store and run-log bookkeeping.

use chrono::{DateTime, Utc};
use lw_core::Signature;
use lw_core::entities::{MissionRecord, RunLogEntry};
use lw_core::enums::RunOutcome;
use lw_core::responses::RunReport;
use lw_store::{SignatureStore, StoreError};

use crate::error::DetectError;
use crate::filter::filter_and_sort;
use crate::signature::compute_signature;

/// Decides whether the upcoming mission set changed since the last run.
///
/// The store is injected by the caller; the detector never knows which
/// backend it talks to.
pub struct ChangeDetector<'a, S> {
    store: &'a S,
}

impl<'a, S: SignatureStore> ChangeDetector<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Filter and sort `extracted` relative to `now`, sign the result and
    /// advance the stored signature if it differs.
    ///
    /// A source that produced no missions at all is reported as unchanged
    /// and never touches the stored signature. Run-log failures are logged
    /// and do not fail the run.
    ///
    /// # Errors
    ///
    /// Returns `DetectError::Store` if the current signature cannot be read
    /// or replaced, and `DetectError::ConcurrentUpdate` if another run
    /// installed a different signature first.
    pub async fn run(
        &self,
        extracted: Vec<MissionRecord>,
        now: DateTime<Utc>,
    ) -> Result<RunReport, DetectError> {
        let source_empty = extracted.is_empty();
        let missions = filter_and_sort(extracted, now);
        let signature = compute_signature(&missions)?;
        let previous = self.store.latest_signature().await?;

        let outcome = if source_empty {
            tracing::info!("source yielded no missions; keeping stored signature");
            RunOutcome::Unchanged
        } else if previous.as_ref() == Some(&signature) {
            RunOutcome::Unchanged
        } else {
            self.swap(previous.as_ref(), &signature).await?
        };

        tracing::info!(
            backend = self.store.backend(),
            %outcome,
            signature = %signature.short(),
            missions = missions.len(),
            "detection complete"
        );

        self.log_run(&RunLogEntry {
            logged_at: now,
            outcome,
            signature: signature.clone(),
            mission_count: missions.len(),
        })
        .await;

        Ok(RunReport {
            outcome,
            signature,
            previous_signature: previous,
            missions: if outcome.is_changed() {
                missions
            } else {
                Vec::new()
            },
        })
    }

    async fn swap(
        &self,
        previous: Option<&Signature>,
        signature: &Signature,
    ) -> Result<RunOutcome, DetectError> {
        match self.store.replace_signature(previous, signature).await {
            Ok(()) => Ok(RunOutcome::Changed),
            Err(StoreError::Conflict { actual, .. }) if actual.as_ref() == Some(signature) => {
                tracing::info!("a concurrent run already published this signature");
                Ok(RunOutcome::Unchanged)
            }
            Err(StoreError::Conflict { actual, .. }) => {
                Err(DetectError::ConcurrentUpdate { actual })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn log_run(&self, entry: &RunLogEntry) {
        if let Err(e) = self.store.append_run_log(entry).await {
            tracing::warn!(backend = self.store.backend(), error = %e, "failed to append run log entry");
        }
    }
}
