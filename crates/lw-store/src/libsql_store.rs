//! libSQL-backed signature store.
//!
//! The current signature is a single row keyed by `slot = 'current'`; the
//! compare-and-swap is one conditional statement whose affected-row count
//! tells whether it won. The run log is a plain table guarded against UPDATE
//! and DELETE by triggers.

use chrono::Utc;
use libsql::Builder;
use lw_config::LibsqlConfig;
use lw_core::Signature;
use lw_core::entities::RunLogEntry;

use crate::SignatureStore;
use crate::error::StoreError;
use crate::helpers::{parse_signature, run_log_from_row};
use crate::retry::{RetryConfig, with_retry};

/// Key of the one row in `signature_slot`.
const SLOT: &str = "current";

const SELECT_CURRENT: &str = "SELECT digest FROM signature_slot WHERE slot = ?1";

const INSERT_IF_EMPTY: &str = "INSERT INTO signature_slot (slot, digest, updated_at)
     VALUES (?1, ?2, ?3)
     ON CONFLICT(slot) DO NOTHING";

const UPDATE_IF_MATCHES: &str = "UPDATE signature_slot SET digest = ?2, updated_at = ?3
     WHERE slot = ?1 AND digest = ?4";

const INSERT_RUN_LOG: &str = "INSERT INTO run_log (logged_at, outcome, signature, mission_count)
     VALUES (?1, ?2, ?3, ?4)";

const SELECT_RUN_LOG: &str = "SELECT logged_at, outcome, signature, mission_count
     FROM run_log ORDER BY id DESC LIMIT ?1";

/// Signature store on a libSQL database (local file or remote Turso).
pub struct LibsqlSignatureStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    retry: RetryConfig,
    remote: bool,
}

impl LibsqlSignatureStore {
    /// Open a local database file (or `":memory:"`). Runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db, RetryConfig::none(), false).await
    }

    /// Connect to a remote libSQL database over Hrana. Runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection fails or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, StoreError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::init(db, RetryConfig::default(), true).await
    }

    /// Open the database described by `config`: remote when a URL is set,
    /// otherwise the local file at `config.path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn open(config: &LibsqlConfig) -> Result<Self, StoreError> {
        if config.is_remote() {
            if !config.is_configured() {
                return Err(StoreError::InvalidState(
                    "remote libSQL URL set without an auth token".into(),
                ));
            }
            return Self::open_remote(&config.url, &config.auth_token).await;
        }
        if let Some(parent) = std::path::Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::open_local(&config.path).await
    }

    async fn init(db: libsql::Database, retry: RetryConfig, remote: bool) -> Result<Self, StoreError> {
        let conn = db.connect()?;
        let store = Self {
            db,
            conn,
            retry,
            remote,
        };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this store talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}

impl SignatureStore for LibsqlSignatureStore {
    fn backend(&self) -> &'static str {
        "libsql"
    }

    async fn latest_signature(&self) -> Result<Option<Signature>, StoreError> {
        let mut rows = with_retry(&self.retry, || self.conn.query(SELECT_CURRENT, [SLOT])).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(parse_signature(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }

    async fn replace_signature(
        &self,
        expected: Option<&Signature>,
        new: &Signature,
    ) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        let affected = match expected {
            None => {
                with_retry(&self.retry, || {
                    self.conn.execute(
                        INSERT_IF_EMPTY,
                        libsql::params![SLOT, new.as_str(), now.as_str()],
                    )
                })
                .await?
            }
            Some(old) => {
                with_retry(&self.retry, || {
                    self.conn.execute(
                        UPDATE_IF_MATCHES,
                        libsql::params![SLOT, new.as_str(), now.as_str(), old.as_str()],
                    )
                })
                .await?
            }
        };

        if affected == 0 {
            let actual = self.latest_signature().await?;
            return Err(StoreError::Conflict {
                expected: expected.cloned(),
                actual,
            });
        }

        tracing::debug!(signature = %new.short(), "signature slot advanced");
        Ok(())
    }

    async fn append_run_log(&self, entry: &RunLogEntry) -> Result<(), StoreError> {
        let logged_at = entry.logged_at.to_rfc3339();
        let count = i64::try_from(entry.mission_count)
            .map_err(|_| StoreError::InvalidState("mission_count overflows i64".into()))?;
        with_retry(&self.retry, || {
            self.conn.execute(
                INSERT_RUN_LOG,
                libsql::params![
                    logged_at.as_str(),
                    entry.outcome.as_str(),
                    entry.signature.as_str(),
                    count
                ],
            )
        })
        .await?;
        Ok(())
    }

    async fn run_log(&self, limit: u32) -> Result<Vec<RunLogEntry>, StoreError> {
        let mut rows =
            with_retry(&self.retry, || self.conn.query(SELECT_RUN_LOG, [i64::from(limit)])).await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(run_log_from_row(&row)?);
        }
        Ok(entries)
    }
}
