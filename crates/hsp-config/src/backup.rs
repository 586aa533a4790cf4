//! Backup configuration.

use serde::{Deserialize, Serialize};

/// Default database file path, relative to the project root.
fn default_database_path() -> String {
    String::from("hospshop.db")
}

/// Default local backup directory.
fn default_backup_dir() -> String {
    String::from("/tmp/hospshop_backups")
}

/// Default artifact name prefix.
fn default_prefix() -> String {
    String::from("hospshop")
}

/// Default local retention, in days.
const fn default_keep_days() -> u32 {
    7
}

/// Default glob patterns for the application archive.
fn default_app_patterns() -> Vec<String> {
    vec![
        String::from("*.py"),
        String::from("requirements.txt"),
        String::from("README.md"),
        String::from("Dockerfile"),
        String::from("railway.json"),
        String::from("static/**"),
        String::from("templates/**"),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackupConfig {
    /// Database file to compress, relative to the project root.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Directory backups are written to before upload.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Prefix for artifact names (`<prefix>_db_<ts>.db.gz`).
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Local backups older than this are removed by `prune`.
    #[serde(default = "default_keep_days")]
    pub keep_days: u32,

    /// Files included in the application archive, matched against paths
    /// relative to the project root.
    #[serde(default = "default_app_patterns")]
    pub app_patterns: Vec<String>,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            backup_dir: default_backup_dir(),
            prefix: default_prefix(),
            keep_days: default_keep_days(),
            app_patterns: default_app_patterns(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = BackupConfig::default();
        assert_eq!(config.database_path, "hospshop.db");
        assert_eq!(config.keep_days, 7);
        assert!(config.app_patterns.contains(&String::from("*.py")));
    }
}
