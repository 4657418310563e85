//! # lw-config
//!
//! Layered configuration loading for launchwatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LAUNCHWATCH_*` prefix, `__` as separator)
//! 2. An explicit file passed with `lwatch --config`
//! 3. Project-level `.launchwatch/config.toml`
//! 4. User-level `~/.config/launchwatch/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LAUNCHWATCH_STORE__BACKEND` -> `store.backend`,
//! `LAUNCHWATCH_STORE__LIBSQL__AUTH_TOKEN` -> `store.libsql.auth_token`, etc.
//!
//! The loaded value is built once by the binary and handed by reference to
//! the constructors that need it; nothing below the CLI reads the
//! environment.
//!
//! # Usage
//!
//! ```no_run
//! use lw_config::LwConfig;
//!
//! let config = LwConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.store.backend);
//! ```

mod error;
mod general;
mod source;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use source::SourceConfig;
pub use store::{LibsqlConfig, LocalStoreConfig, StoreBackend, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LwConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LwConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or the result does not validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `explicit` above the discovered TOML files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or the result does not validate.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or the result does not validate.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".launchwatch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("LAUNCHWATCH_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout and
    /// [`ConfigError::NotConfigured`] for a libSQL backend pointing at a remote
    /// URL without an auth token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.source.detail_marker.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "source.detail_marker".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.store.backend == StoreBackend::Libsql
            && self.store.libsql.is_remote()
            && !self.store.libsql.is_configured()
        {
            return Err(ConfigError::NotConfigured {
                section: "store.libsql".into(),
                missing: "auth_token is required for a remote url".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("launchwatch").join("config.toml"))
    }
}
