//! Errors raised while building an [`LwConfig`](crate::LwConfig).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `LAUNCHWATCH_*` variable could not be read into the
    /// expected shape.
    #[error("failed to load launchwatch configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The selected store backend is missing settings it cannot run without.
    #[error("store section '{section}' selected but incomplete: {missing}")]
    NotConfigured { section: String, missing: String },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
