use lw_core::responses::HistoryResponse;
use lw_store::SignatureStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lwatch history`: most recent run log entries, newest first.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let entries = ctx.store.run_log(limit).await?;

    output(
        &HistoryResponse {
            backend: ctx.store.backend().to_string(),
            entries,
        },
        flags.format,
    )
}
