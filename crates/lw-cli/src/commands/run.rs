use anyhow::Context;
use chrono::Utc;
use lw_detect::ChangeDetector;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::commands::shared::source;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lwatch run`: extract, detect and report.
pub async fn handle(args: &RunArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fragments = source::load(&args.source, &ctx.config.source).await?;
    let missions = source::extract(&fragments, &ctx.config.source)?;
    tracing::debug!(extracted = missions.len(), "missions extracted");

    let report = ChangeDetector::new(&ctx.store)
        .run(missions, Utc::now())
        .await
        .context("change detection failed")?;

    output(&report, flags.format)
}
