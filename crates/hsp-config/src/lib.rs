//! # hsp-config
//!
//! Layered configuration loading for the Hospshop ops toolbox using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HOSPSHOP_*` prefix, `__` as separator)
//! 2. Project-level `.hospshop/config.toml`
//! 3. User-level `~/.config/hospshop/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HOSPSHOP_SERVICE__PORT` -> `service.port`,
//! `HOSPSHOP_S3__BUCKET` -> `s3.bucket`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hsp_config::HospConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = HospConfig::load_with_dotenv().expect("config");
//!
//! if config.s3.is_configured() {
//!     println!("Backup bucket: {}", config.s3.bucket);
//! }
//! ```

mod backup;
mod deploy;
mod error;
mod health;
mod s3;
mod service;

pub use backup::BackupConfig;
pub use deploy::DeployConfig;
pub use error::ConfigError;
pub use health::HealthConfig;
pub use s3::S3Config;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HospConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub s3: S3Config,
    #[serde(default)]
    pub deploy: DeployConfig,
}

impl HospConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Path::new("."))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration rooted at `project_root`, so the project-local
    /// `.hospshop/config.toml` is found regardless of the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load_at(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment(project_root)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` for the current directory's `.env` before building
    /// the figment. This is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain rooted at `project_root`.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(".hospshop/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("HOSPSHOP_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hospshop").join("config.toml"))
    }
}
