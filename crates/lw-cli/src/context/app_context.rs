use lw_config::{LwConfig, StoreBackend};

use super::StoreHandle;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LwConfig,
    pub store: StoreHandle,
}

impl AppContext {
    /// Open the store for `backend`, which defaults to the configured one.
    pub async fn init(config: LwConfig, backend: Option<StoreBackend>) -> anyhow::Result<Self> {
        let backend = backend.unwrap_or(config.store.backend);
        let store = StoreHandle::open(backend, &config.store).await?;
        Ok(Self { config, store })
    }
}
