use crate::cli::GlobalFlags;
use crate::cli::subcommands::BackupCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `hsp backup`.
pub async fn handle(
    action: &BackupCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let root = &ctx.project_root;
    let backup = &ctx.config.backup;

    match action {
        BackupCommands::Run { no_upload } => {
            let report = hsp_backup::run(root, backup, &ctx.config.s3, !*no_upload).await?;
            let success = report.success;
            output::output(&report, flags.format)?;
            if !success {
                anyhow::bail!("backup produced no artifacts");
            }
            Ok(())
        }
        BackupCommands::List => {
            let entries = hsp_backup::list_backups(root, backup)?;
            output::output(&entries, flags.format)?;
            Ok(())
        }
        BackupCommands::Prune { keep_days } => {
            let effective = keep_days.map_or_else(
                || backup.clone(),
                |days| hsp_config::BackupConfig {
                    keep_days: days,
                    ..backup.clone()
                },
            );
            let report = hsp_backup::prune(root, &effective)?;
            output::output(&report, flags.format)?;
            Ok(())
        }
    }
}
