//! Database backup: gzip-compressed copy of the database file.
//!
//! Restore is decompress-and-replace; no dump format is involved.

use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use hsp_config::BackupConfig;

use crate::error::BackupError;
use crate::resolve_backup_dir;

/// Compress the configured database file into the backup directory as
/// `<prefix>_db_<timestamp>.db.gz`, returning the artifact path.
///
/// # Errors
///
/// Returns [`BackupError::MissingDatabase`] when the database file does
/// not exist and [`BackupError::Io`] on filesystem failure.
pub fn backup_database(
    root: &Path,
    backup: &BackupConfig,
    timestamp: &str,
) -> Result<PathBuf, BackupError> {
    let db_path = root.join(&backup.database_path);
    if !db_path.is_file() {
        return Err(BackupError::MissingDatabase { path: db_path });
    }

    let backup_dir = resolve_backup_dir(root, backup);
    std::fs::create_dir_all(&backup_dir).map_err(|source| BackupError::Io {
        path: backup_dir.clone(),
        source,
    })?;

    let target = backup_dir.join(format!("{}_db_{}.db.gz", backup.prefix, timestamp));

    let mut input = std::fs::File::open(&db_path).map_err(|source| BackupError::Io {
        path: db_path.clone(),
        source,
    })?;
    let output = std::fs::File::create(&target).map_err(|source| BackupError::Io {
        path: target.clone(),
        source,
    })?;

    let mut encoder = GzEncoder::new(output, Compression::default());
    std::io::copy(&mut input, &mut encoder).map_err(|source| BackupError::Io {
        path: target.clone(),
        source,
    })?;
    encoder.finish().map_err(|source| BackupError::Io {
        path: target.clone(),
        source,
    })?;

    let size = std::fs::metadata(&target).map(|m| m.len()).unwrap_or(0);
    tracing::info!(path = %target.display(), size_bytes = size, "database backup created");
    Ok(target)
}
