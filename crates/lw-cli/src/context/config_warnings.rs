use lw_config::{LwConfig, StoreBackend};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LwConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LwConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.store.libsql.is_remote()
        && env_keys.iter().any(|key| key.starts_with("LAUNCHWATCH_STORE_LIBSQL"))
    {
        warnings.push(
            "libSQL config appears default while LAUNCHWATCH_STORE_LIBSQL* env vars exist. Use double underscores (example: LAUNCHWATCH_STORE__LIBSQL__URL)."
                .to_string(),
        );
    }

    if config.store.backend == StoreBackend::Local
        && env_keys.iter().any(|key| key == "LAUNCHWATCH_STORE_BACKEND")
    {
        warnings.push(
            "Store backend is 'local' while LAUNCHWATCH_STORE_BACKEND is set. Use double underscores (example: LAUNCHWATCH_STORE__BACKEND=libsql)."
                .to_string(),
        );
    }

    if has_single_underscore(&env_keys, "LAUNCHWATCH_SOURCE") {
        warnings.push(
            "LAUNCHWATCH_SOURCE_* env vars are ignored. Use double underscores (example: LAUNCHWATCH_SOURCE__URL)."
                .to_string(),
        );
    }

    warnings
}

/// Whether any key continues `section` with one underscore instead of two.
fn has_single_underscore(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('_'))
    })
}
