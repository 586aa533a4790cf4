//! # hsp-backup
//!
//! Automated backups for the platform: a gzip copy of the database file,
//! a tar.gz archive of the application tree, optional S3 upload, and local
//! retention pruning. Artifacts are named
//! `<prefix>_db_<timestamp>.db.gz` / `<prefix>_app_<timestamp>.tar.gz`.

mod archive;
mod database;
mod error;
mod retention;
mod upload;

use std::path::{Path, PathBuf};

use chrono::Utc;
use hsp_config::{BackupConfig, S3Config};
use hsp_core::responses::BackupReport;

pub use archive::backup_application;
pub use database::backup_database;
pub use error::BackupError;
pub use retention::{list_backups, prune, prune_before};
pub use upload::{build_store, upload_file};

/// Resolve the backup directory: absolute paths are used as-is, relative
/// ones are anchored at the project root.
pub(crate) fn resolve_backup_dir(root: &Path, backup: &BackupConfig) -> PathBuf {
    let dir = Path::new(&backup.backup_dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}

/// Run a full backup: database + application archive, then uploads.
///
/// A missing database file is recorded as a warning and the application
/// archive still runs; individual upload failures are warnings too, with
/// the artifact kept locally. `success` means at least one artifact was
/// produced.
///
/// # Errors
///
/// Returns [`BackupError`] when archiving itself fails (bad patterns,
/// filesystem errors).
pub async fn run(
    root: &Path,
    backup: &BackupConfig,
    s3: &S3Config,
    upload: bool,
) -> Result<BackupReport, BackupError> {
    let started_at = Utc::now();
    let timestamp = started_at.format("%Y%m%d_%H%M%S").to_string();
    let mut warnings = Vec::new();

    let database_archive = match backup_database(root, backup, &timestamp) {
        Ok(path) => Some(path),
        Err(BackupError::MissingDatabase { path }) => {
            warnings.push(format!(
                "database file {} not found; skipping database backup",
                path.display()
            ));
            None
        }
        Err(error) => return Err(error),
    };

    let app_archive = backup_application(root, backup, &timestamp)?;

    let mut uploaded = Vec::new();
    let mut upload_skipped = None;
    if !upload {
        upload_skipped = Some(String::from("uploads disabled"));
    } else if !s3.is_configured() {
        upload_skipped = Some(String::from(
            "S3 is not configured (set bucket/access_key_id/secret_access_key); backups kept locally",
        ));
    } else {
        let artifacts = database_archive.iter().chain(std::iter::once(&app_archive));
        for artifact in artifacts {
            match upload_file(s3, artifact).await {
                Ok(uri) => uploaded.push(uri),
                Err(error) => warnings.push(format!(
                    "upload failed for {}: {error}; artifact kept locally",
                    artifact.display()
                )),
            }
        }
    }

    let success = database_archive.is_some() || app_archive.exists();
    Ok(BackupReport {
        started_at,
        database_archive: database_archive.map(|path| path.display().to_string()),
        app_archive: Some(app_archive.display().to_string()),
        uploaded,
        upload_skipped,
        warnings,
        success,
    })
}
