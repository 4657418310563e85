use anyhow::Context;
use lw_config::{StoreBackend, StoreConfig};
use lw_core::Signature;
use lw_core::entities::RunLogEntry;
use lw_store::{FileSignatureStore, LibsqlSignatureStore, SignatureStore, StoreError};

/// The signature store selected by configuration, opened once per run.
pub enum StoreHandle {
    Local(FileSignatureStore),
    Libsql(LibsqlSignatureStore),
}

impl StoreHandle {
    /// Open the backend named by `backend` using its section of `config`.
    pub async fn open(backend: StoreBackend, config: &StoreConfig) -> anyhow::Result<Self> {
        let handle = match backend {
            StoreBackend::Local => Self::Local(
                FileSignatureStore::from_config(&config.local).with_context(|| {
                    format!("failed to open local store at {}", config.local.dir.display())
                })?,
            ),
            StoreBackend::Libsql => Self::Libsql(
                LibsqlSignatureStore::open(&config.libsql)
                    .await
                    .context("failed to open libSQL store")?,
            ),
        };
        tracing::debug!(backend = handle.backend(), "signature store opened");
        Ok(handle)
    }
}

impl SignatureStore for StoreHandle {
    fn backend(&self) -> &'static str {
        match self {
            Self::Local(store) => store.backend(),
            Self::Libsql(store) => store.backend(),
        }
    }

    async fn latest_signature(&self) -> Result<Option<Signature>, StoreError> {
        match self {
            Self::Local(store) => store.latest_signature().await,
            Self::Libsql(store) => store.latest_signature().await,
        }
    }

    async fn replace_signature(
        &self,
        expected: Option<&Signature>,
        new: &Signature,
    ) -> Result<(), StoreError> {
        match self {
            Self::Local(store) => store.replace_signature(expected, new).await,
            Self::Libsql(store) => store.replace_signature(expected, new).await,
        }
    }

    async fn append_run_log(&self, entry: &RunLogEntry) -> Result<(), StoreError> {
        match self {
            Self::Local(store) => store.append_run_log(entry).await,
            Self::Libsql(store) => store.append_run_log(entry).await,
        }
    }

    async fn run_log(&self, limit: u32) -> Result<Vec<RunLogEntry>, StoreError> {
        match self {
            Self::Local(store) => store.run_log(limit).await,
            Self::Libsql(store) => store.run_log(limit).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lw_config::{LibsqlConfig, LocalStoreConfig};

    fn config_in(dir: &std::path::Path) -> StoreConfig {
        StoreConfig {
            backend: StoreBackend::Local,
            local: LocalStoreConfig {
                dir: dir.join("state"),
                ..Default::default()
            },
            libsql: LibsqlConfig {
                path: dir.join("state/launchwatch.db").to_string_lossy().into_owned(),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn opens_each_backend() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());

        let local = StoreHandle::open(StoreBackend::Local, &config).await.unwrap();
        assert_eq!(local.backend(), "local");

        let libsql = StoreHandle::open(StoreBackend::Libsql, &config).await.unwrap();
        assert_eq!(libsql.backend(), "libsql");
        assert!(libsql.latest_signature().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delegates_to_selected_backend() {
        let temp = tempfile::tempdir().unwrap();
        let config = config_in(temp.path());
        let handle = StoreHandle::open(StoreBackend::Local, &config).await.unwrap();

        let sig = Signature::new("5a".repeat(32));
        handle.replace_signature(None, &sig).await.unwrap();
        let on_disk = std::fs::read_to_string(temp.path().join("state/last_signature.txt")).unwrap();
        assert_eq!(on_disk.trim(), sig.as_str());
    }
}
