//! Backup error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing or shipping backups.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The configured database file does not exist.
    #[error("database file {path} does not exist")]
    MissingDatabase {
        /// Configured database path.
        path: PathBuf,
    },

    /// Filesystem error while reading or writing an artifact.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured glob pattern is invalid.
    #[error("invalid backup pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Walking the application tree failed.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Object store (S3) operation failed.
    #[error("object store error: {0}")]
    Store(#[from] object_store::Error),

    /// The computed object key is not a valid store path.
    #[error("invalid object key: {0}")]
    StorePath(#[from] object_store::path::Error),
}
