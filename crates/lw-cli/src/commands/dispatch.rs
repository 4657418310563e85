use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `extract` and `schema` never open a store and are handled in `main`.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(&args, ctx, flags).await,
        Commands::History => commands::history::handle(ctx, flags).await,
        Commands::Signature => commands::signature::handle(ctx, flags).await,
        Commands::Extract(_) | Commands::Schema(_) => {
            unreachable!("extract/schema are pre-dispatched in main")
        }
    }
}
