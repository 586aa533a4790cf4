use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeployCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `hsp deploy`.
pub fn handle(
    action: &DeployCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let root = &ctx.project_root;

    match action {
        DeployCommands::Check => {
            let report = hsp_deploy::check_essential_files(root);
            let all_present = report.all_present;
            output::output(&report, flags.format)?;
            if !all_present {
                anyhow::bail!("application tree is missing essential files");
            }
            Ok(())
        }
        DeployCommands::Package { output: dir } => {
            let effective = dir.as_ref().map_or_else(
                || ctx.config.deploy.clone(),
                |dir| hsp_config::DeployConfig {
                    output_dir: dir.clone(),
                    ..ctx.config.deploy.clone()
                },
            );
            let report = hsp_deploy::generate(root, &ctx.config.service, &effective)?;
            output::output(&report, flags.format)?;
            Ok(())
        }
    }
}
