//! Local-file signature store.
//!
//! Layout inside the store directory:
//! - `last_signature.txt`: the current signature on one line (absent until
//!   the first change)
//! - `run_log.jsonl`: one [`RunLogEntry`] per line
//! - `signature.lock`: held for the duration of a compare-and-swap
//!
//! The signature file is replaced by writing a sibling temp file and renaming
//! it over the old one, so readers see either the old or the new digest.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lw_config::LocalStoreConfig;
use lw_core::Signature;
use lw_core::entities::RunLogEntry;
use tempfile::NamedTempFile;

use crate::SignatureStore;
use crate::error::StoreError;
use crate::helpers::parse_signature;
use crate::lock;
use crate::run_log::RunLogWriter;

const LOCK_FILE: &str = "signature.lock";

pub struct FileSignatureStore {
    dir: PathBuf,
    signature_path: PathBuf,
    run_log: RunLogWriter,
    lock_timeout: Duration,
}

impl FileSignatureStore {
    /// Open (creating if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(
        dir: impl Into<PathBuf>,
        signature_file: &str,
        run_log_file: &str,
        lock_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            signature_path: dir.join(signature_file),
            run_log: RunLogWriter::new(dir.join(run_log_file)),
            dir,
            lock_timeout,
        })
    }

    /// Open the store described by the `[store.local]` config section.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn from_config(config: &LocalStoreConfig) -> Result<Self, StoreError> {
        Self::open(
            &config.dir,
            &config.signature_file,
            &config.run_log_file,
            Duration::from_secs(config.lock_timeout_secs),
        )
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn signature_path(&self) -> &Path {
        &self.signature_path
    }

    #[must_use]
    pub fn run_log_path(&self) -> &Path {
        self.run_log.path()
    }

    fn read_signature(&self) -> Result<Option<Signature>, StoreError> {
        match std::fs::read_to_string(&self.signature_path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => parse_signature(&raw).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_signature(&self, signature: &Signature) -> Result<(), StoreError> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        writeln!(tmp, "{signature}")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.signature_path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SignatureStore for FileSignatureStore {
    fn backend(&self) -> &'static str {
        "local"
    }

    async fn latest_signature(&self) -> Result<Option<Signature>, StoreError> {
        self.read_signature()
    }

    async fn replace_signature(
        &self,
        expected: Option<&Signature>,
        new: &Signature,
    ) -> Result<(), StoreError> {
        let _guard = lock::acquire(&self.dir.join(LOCK_FILE), self.lock_timeout).await?;

        let actual = self.read_signature()?;
        if actual.as_ref() != expected {
            return Err(StoreError::Conflict {
                expected: expected.cloned(),
                actual,
            });
        }

        self.write_signature(new)?;
        tracing::debug!(signature = %new.short(), path = %self.signature_path.display(), "signature file replaced");
        Ok(())
    }

    async fn append_run_log(&self, entry: &RunLogEntry) -> Result<(), StoreError> {
        self.run_log.append(entry)
    }

    async fn run_log(&self, limit: u32) -> Result<Vec<RunLogEntry>, StoreError> {
        self.run_log.read_recent(limit)
    }
}
