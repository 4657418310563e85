use std::path::Path;

use anyhow::Context;
use lw_config::LwConfig;

use crate::cli::GlobalFlags;

/// Load `.env` (next to an explicit config file, else the working directory)
/// and then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LwConfig> {
    load_dotenv(flags.config.as_deref())?;
    LwConfig::load_from(flags.config.as_deref()).context("failed to load launchwatch configuration")
}

fn load_dotenv(explicit: Option<&Path>) -> anyhow::Result<()> {
    if let Some(dir) = explicit.and_then(Path::parent) {
        let env_path = dir.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
