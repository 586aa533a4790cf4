use std::path::PathBuf;

use hsp_config::HospConfig;

/// Everything command handlers need: where the application lives and the
/// merged configuration.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: HospConfig,
}

impl AppContext {
    #[must_use]
    pub const fn new(project_root: PathBuf, config: HospConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }
}
