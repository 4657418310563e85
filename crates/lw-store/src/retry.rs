//! Turso transient error retry logic.
//!
//! Remote libSQL databases occasionally reject a statement while a Turso
//! node is being recycled (shared lock contention, deletion in progress).
//! These surface as HTTP 400 responses from the Hrana API and clear on their
//! own within seconds, so the remote store retries them with capped
//! exponential backoff. Local database files never produce them.

use std::future::Future;
use std::time::Duration;

/// Configuration for retry behavior on transient Turso errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// A single attempt, no retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `retry` (1-based).
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Detect transient Turso infrastructure errors.
///
/// The predicate is intentionally narrow to avoid retrying genuine
/// SQL or constraint errors.
pub fn is_transient_turso_error(e: &libsql::Error) -> bool {
    is_transient_message(&e.to_string())
}

fn is_transient_message(msg: &str) -> bool {
    msg.contains("unable to acquire shared lock") || msg.contains("deletion must be in progress")
}

/// Run `op` until it succeeds, fails with a non-transient error, or the
/// attempt budget is spent.
///
/// # Errors
///
/// Returns the last error produced by `op`.
pub async fn with_retry<T, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, libsql::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, libsql::Error>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Err(e) if attempt < config.max_attempts && is_transient_turso_error(&e) => {
                let delay = config.delay_for(attempt);
                tracing::warn!(attempt, ?delay, error = %e, "transient libSQL error, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}
