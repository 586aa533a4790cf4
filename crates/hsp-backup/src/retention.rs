//! Local backup listing and retention pruning.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use hsp_config::BackupConfig;
use hsp_core::responses::{BackupEntry, PruneReport};

use crate::error::BackupError;
use crate::resolve_backup_dir;

/// List local backups matching the configured prefix, newest first.
///
/// A missing backup directory yields an empty list.
///
/// # Errors
///
/// Returns [`BackupError::Io`] on directory read failure.
pub fn list_backups(root: &Path, backup: &BackupConfig) -> Result<Vec<BackupEntry>, BackupError> {
    let dir = resolve_backup_dir(root, backup);
    let read_dir = match std::fs::read_dir(&dir) {
        Ok(read_dir) => read_dir,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(BackupError::Io { path: dir, source }),
    };

    let marker = format!("{}_", backup.prefix);
    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|source| BackupError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = item.path();
        let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !path.is_file() || !filename.starts_with(&marker) {
            continue;
        }

        let metadata = item.metadata().map_err(|source| BackupError::Io {
            path: path.clone(),
            source,
        })?;
        let modified_at = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .map_err(|source| BackupError::Io {
                path: path.clone(),
                source,
            })?;

        entries.push(BackupEntry {
            filename: filename.to_string(),
            path: path.display().to_string(),
            size_bytes: metadata.len(),
            modified_at,
        });
    }

    entries.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    Ok(entries)
}

/// Remove local backups last modified before `cutoff`.
///
/// # Errors
///
/// Returns [`BackupError::Io`] on listing or removal failure.
pub fn prune_before(
    root: &Path,
    backup: &BackupConfig,
    cutoff: DateTime<Utc>,
) -> Result<PruneReport, BackupError> {
    let mut removed = 0u32;
    let mut kept = 0u32;

    for entry in list_backups(root, backup)? {
        if entry.modified_at < cutoff {
            std::fs::remove_file(&entry.path).map_err(|source| BackupError::Io {
                path: entry.path.clone().into(),
                source,
            })?;
            tracing::info!(file = %entry.filename, "old backup removed");
            removed += 1;
        } else {
            kept += 1;
        }
    }

    Ok(PruneReport { removed, kept })
}

/// Remove local backups older than the configured `keep_days`.
///
/// # Errors
///
/// Returns [`BackupError::Io`] on listing or removal failure.
pub fn prune(root: &Path, backup: &BackupConfig) -> Result<PruneReport, BackupError> {
    let cutoff = Utc::now() - Duration::days(i64::from(backup.keep_days));
    prune_before(root, backup, cutoff)
}
