use std::time::Duration;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HealthArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `hsp health`.
pub async fn handle(
    args: &HealthArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &ctx.config.service;
    let health = &ctx.config.health;
    let url = args
        .url
        .clone()
        .unwrap_or_else(|| health.url(&service.host, service.port));

    let report = hsp_supervise::probe_once(&url, Duration::from_secs(health.timeout_secs)).await;
    let healthy = report.healthy;
    output::output(&report, flags.format)?;
    if !healthy {
        anyhow::bail!("health probe failed for {url}");
    }
    Ok(())
}
