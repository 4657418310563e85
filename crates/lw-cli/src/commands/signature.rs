use lw_core::responses::SignatureResponse;
use lw_store::SignatureStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lwatch signature`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let signature = ctx.store.latest_signature().await?;
    output(
        &SignatureResponse {
            backend: ctx.store.backend().to_string(),
            signature,
        },
        flags.format,
    )
}
