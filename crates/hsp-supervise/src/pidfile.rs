//! Pidfile read/write, the hand-off between `start` and `stop`.

use std::path::Path;

use crate::error::SuperviseError;

/// Persist `pid` to the pidfile, overwriting any previous contents.
///
/// # Errors
///
/// Returns [`SuperviseError::Io`] if the file cannot be written.
pub fn write_pid(path: &Path, pid: u32) -> Result<(), SuperviseError> {
    std::fs::write(path, format!("{pid}\n")).map_err(|source| SuperviseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the PID from the pidfile.
///
/// Returns `Ok(None)` when the file does not exist -- a missing pidfile is
/// an expected state, not an error.
///
/// # Errors
///
/// Returns [`SuperviseError::InvalidPidfile`] when the file exists but does
/// not contain a PID, and [`SuperviseError::Io`] on read failure.
pub fn read_pid(path: &Path) -> Result<Option<u32>, SuperviseError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SuperviseError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let trimmed = contents.trim();
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|error| SuperviseError::InvalidPidfile {
            path: path.to_path_buf(),
            reason: format!("'{trimmed}' is not a PID: {error}"),
        })
}

/// Remove the pidfile. Returns `false` when it was already gone.
///
/// # Errors
///
/// Returns [`SuperviseError::Io`] on removal failure other than the file
/// not existing.
pub fn remove_pidfile(path: &Path) -> Result<bool, SuperviseError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(SuperviseError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
