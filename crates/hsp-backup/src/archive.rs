//! Application archive: tar.gz of the files matching the configured globs.

use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use globset::{Glob, GlobSet, GlobSetBuilder};
use hsp_config::BackupConfig;
use ignore::WalkBuilder;

use crate::error::BackupError;
use crate::resolve_backup_dir;

/// Archive the application tree under `root` into the backup directory as
/// `<prefix>_app_<timestamp>.tar.gz`, returning the artifact path.
///
/// Files are matched against the configured patterns by their path
/// relative to `root`. Hidden files and anything under the backup
/// directory itself are skipped.
///
/// # Errors
///
/// Returns [`BackupError`] on invalid patterns, walk failures, or
/// filesystem failure.
pub fn backup_application(
    root: &Path,
    backup: &BackupConfig,
    timestamp: &str,
) -> Result<PathBuf, BackupError> {
    let patterns = build_globset(&backup.app_patterns)?;

    let backup_dir = resolve_backup_dir(root, backup);
    std::fs::create_dir_all(&backup_dir).map_err(|source| BackupError::Io {
        path: backup_dir.clone(),
        source,
    })?;

    let target = backup_dir.join(format!("{}_app_{}.tar.gz", backup.prefix, timestamp));
    let output = std::fs::File::create(&target).map_err(|source| BackupError::Io {
        path: target.clone(),
        source,
    })?;
    let mut builder = tar::Builder::new(GzEncoder::new(output, Compression::default()));

    let mut included = 0usize;
    for entry in WalkBuilder::new(root).build() {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.starts_with(&backup_dir) {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if !patterns.is_match(relative) {
            continue;
        }

        builder
            .append_path_with_name(path, relative)
            .map_err(|source| BackupError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        included += 1;
    }

    builder
        .into_inner()
        .and_then(GzEncoder::finish)
        .map_err(|source| BackupError::Io {
            path: target.clone(),
            source,
        })?;

    tracing::info!(path = %target.display(), files = included, "application archive created");
    Ok(target)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, BackupError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use flate2::read::GzDecoder;
    use hsp_config::BackupConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::backup_application;

    fn archived_names(artifact: &std::path::Path) -> BTreeSet<String> {
        let mut archive = tar::Archive::new(GzDecoder::new(
            std::fs::File::open(artifact).unwrap(),
        ));
        archive
            .entries()
            .unwrap()
            .map(|entry| {
                entry
                    .unwrap()
                    .path()
                    .unwrap()
                    .display()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn archive_includes_matching_files_only() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app.py"), "print()").unwrap();
        std::fs::write(temp.path().join("requirements.txt"), "flask").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "skip me").unwrap();
        std::fs::create_dir(temp.path().join("static")).unwrap();
        std::fs::write(temp.path().join("static/app.js"), "js").unwrap();

        let config = BackupConfig {
            backup_dir: temp.path().join("backups").display().to_string(),
            ..Default::default()
        };

        let artifact = backup_application(temp.path(), &config, "ts").unwrap();
        let names = archived_names(&artifact);

        assert!(names.contains("app.py"));
        assert!(names.contains("requirements.txt"));
        assert!(names.contains("static/app.js"));
        assert!(!names.contains("notes.txt"));
    }

    #[test]
    fn archive_skips_the_backup_dir_itself() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app.py"), "print()").unwrap();

        // Backup dir nested under the root, containing a matchable file.
        let backup_dir = temp.path().join("backups");
        std::fs::create_dir(&backup_dir).unwrap();
        std::fs::write(backup_dir.join("old.py"), "stale").unwrap();

        let config = BackupConfig {
            backup_dir: backup_dir.display().to_string(),
            app_patterns: vec![String::from("**/*.py")],
            ..Default::default()
        };

        let artifact = backup_application(temp.path(), &config, "ts").unwrap();
        let names = archived_names(&artifact);

        assert_eq!(names.len(), 1);
        assert!(names.contains("app.py"));
    }
}
