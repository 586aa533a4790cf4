use crate::cli::GlobalFlags;
use crate::cli::subcommands::ServiceCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `hsp service`.
pub async fn handle(
    action: &ServiceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let root = &ctx.project_root;
    let service = &ctx.config.service;
    let health = &ctx.config.health;

    match action {
        ServiceCommands::Start => {
            let report = hsp_supervise::start(root, service, health).await?;
            let healthy = report.health.healthy;
            output::output(&report, flags.format)?;
            if !healthy {
                anyhow::bail!("service started but never turned healthy (see log tail)");
            }
            Ok(())
        }
        ServiceCommands::Stop { force } => {
            let report = hsp_supervise::stop(root, service, *force).await?;
            output::output(&report, flags.format)?;
            Ok(())
        }
        ServiceCommands::Restart { force } => {
            let (stopped, started) = hsp_supervise::restart(root, service, health, *force).await?;
            let healthy = started.health.healthy;
            output::output(&stopped, flags.format)?;
            output::output(&started, flags.format)?;
            if !healthy {
                anyhow::bail!("service restarted but never turned healthy (see log tail)");
            }
            Ok(())
        }
        ServiceCommands::Status => {
            let report = hsp_supervise::status(root, service, health).await?;
            output::output(&report, flags.format)?;
            Ok(())
        }
    }
}
