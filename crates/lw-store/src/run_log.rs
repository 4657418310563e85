//! JSONL run log.
//!
//! One `RunLogEntry` per line, appended with `serde_jsonlines::append_json_lines`.
//! Lines are never rewritten.

use std::path::{Path, PathBuf};

use lw_core::entities::RunLogEntry;

use crate::error::StoreError;

pub(crate) struct RunLogWriter {
    path: PathBuf,
}

impl RunLogWriter {
    pub(crate) const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn append(&self, entry: &RunLogEntry) -> Result<(), StoreError> {
        serde_jsonlines::append_json_lines(&self.path, [entry])?;
        Ok(())
    }

    /// The last `limit` entries, newest first. A missing file is an empty log.
    pub(crate) fn read_recent(&self, limit: u32) -> Result<Vec<RunLogEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = serde_jsonlines::json_lines::<RunLogEntry, _>(&self.path)?
            .enumerate()
            .map(|(index, line)| {
                line.map_err(|e| {
                    StoreError::InvalidState(format!(
                        "{} line {}: {e}",
                        self.path.display(),
                        index + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        entries.reverse();
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(entries)
    }
}
