use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Service { action } => commands::service::handle(&action, ctx, flags).await,
        Commands::Health(args) => commands::health::handle(&args, ctx, flags).await,
        Commands::Deploy { action } => commands::deploy::handle(&action, ctx, flags),
        Commands::Backup { action } => commands::backup::handle(&action, ctx, flags).await,
        Commands::Config { action } => commands::config::handle(&action, ctx, flags),
    }
}
