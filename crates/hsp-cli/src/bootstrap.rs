use std::path::Path;

use anyhow::Context;

/// Load the project's `.env` (when present) and the layered config.
pub fn load_config(project_root: &Path) -> anyhow::Result<hsp_config::HospConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    } else {
        dotenvy::dotenv().ok();
    }

    let config = hsp_config::HospConfig::load_at(project_root)
        .context("failed to load hospshop configuration")?;
    tracing::debug!(root = %project_root.display(), "configuration loaded");
    Ok(config)
}
