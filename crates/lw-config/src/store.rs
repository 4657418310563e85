//! Signature store configuration: backend selection plus per-backend settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which `SignatureStore` implementation a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Signature file + JSONL run log in a local directory.
    #[default]
    Local,
    /// libSQL tables, either a local database file or a remote Turso database.
    Libsql,
}

impl StoreBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Libsql => "libsql",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_local_dir() -> PathBuf {
    PathBuf::from(".launchwatch")
}

fn default_signature_file() -> String {
    "last_signature.txt".into()
}

fn default_run_log_file() -> String {
    "run_log.jsonl".into()
}

const fn default_lock_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalStoreConfig {
    /// Directory holding the signature file, run log and lock file.
    #[serde(default = "default_local_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_signature_file")]
    pub signature_file: String,

    #[serde(default = "default_run_log_file")]
    pub run_log_file: String,

    /// How long to wait for another run's lock before giving up, in seconds.
    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            dir: default_local_dir(),
            signature_file: default_signature_file(),
            run_log_file: default_run_log_file(),
            lock_timeout_secs: default_lock_timeout_secs(),
        }
    }
}

fn default_libsql_path() -> String {
    ".launchwatch/launchwatch.db".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibsqlConfig {
    /// Remote database URL (e.g., `libsql://launchwatch-org.turso.io`).
    /// Empty means use the local database file at `path`.
    #[serde(default)]
    pub url: String,

    /// Database auth token for the remote URL.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file used when no remote URL is set.
    #[serde(default = "default_libsql_path")]
    pub path: String,
}

impl Default for LibsqlConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            path: default_libsql_path(),
        }
    }
}

impl LibsqlConfig {
    /// Whether a remote database URL is set.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }

    /// Check if the remote config has the fields needed to connect.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default)]
    pub local: LocalStoreConfig,
    #[serde(default)]
    pub libsql: LibsqlConfig,
}
