use anyhow::Context;
use chrono::Utc;
use lw_config::LwConfig;
use lw_core::responses::ExtractResponse;
use lw_detect::filter_and_sort;
use lw_source::save_fragments;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::commands::shared::source;
use crate::output::output;

/// Handle `lwatch extract`. Never reads or writes the signature store.
pub async fn handle(args: &ExtractArgs, config: &LwConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fragments = source::load(&args.source, &config.source).await?;
    if let Some(path) = &args.save_fragments {
        save_fragments(path, &fragments)
            .with_context(|| format!("failed to write fragments to {}", path.display()))?;
    }

    let extracted = source::extract(&fragments, &config.source)?;
    let total = extracted.len();
    let mut missions = if args.all {
        extracted
    } else {
        filter_and_sort(extracted, Utc::now())
    };
    if let Some(limit) = flags.limit.filter(|limit| *limit > 0) {
        missions.truncate(usize::try_from(limit)?);
    }

    output(&ExtractResponse { missions, total }, flags.format)
}
