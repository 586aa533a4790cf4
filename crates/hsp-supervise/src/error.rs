//! Supervision error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while supervising the service process.
#[derive(Debug, Error)]
pub enum SuperviseError {
    /// The service port already has a listener; starting would collide.
    #[error("port {port} is already in use; is the service already running?")]
    PortInUse {
        /// Port that was found occupied.
        port: u16,
    },

    /// The pidfile exists but its contents are not a PID.
    #[error("pidfile {path} is unreadable: {reason}")]
    InvalidPidfile {
        /// Path of the offending pidfile.
        path: PathBuf,
        /// Why the contents could not be parsed.
        reason: String,
    },

    /// Launching the service executable failed.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        /// Command that failed to launch.
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error (pidfile, log file).
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Running a helper command (`kill`, `lsof`) failed outright.
    #[error("failed to run '{command}': {source}")]
    Helper {
        /// Helper command that could not be executed.
        command: String,
        #[source]
        source: std::io::Error,
    },
}
