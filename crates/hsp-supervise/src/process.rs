//! Spawning and signaling the service process.
//!
//! Signaling shells out to `kill(1)`: `kill -0` for liveness, `-TERM` for
//! shutdown, `-KILL` when forced. No repo-local FFI; the helpers are the
//! same ones the operational shell wrappers rely on.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use hsp_config::ServiceConfig;

use crate::error::SuperviseError;

/// Spawn the service with stdout/stderr appended to its log file.
///
/// The child is fully detached from the CLI: stdin is null, output goes to
/// the log file, and nothing holds the child handle, so it survives the
/// supervisor exiting.
///
/// # Errors
///
/// Returns [`SuperviseError::Io`] if the log file cannot be opened and
/// [`SuperviseError::Spawn`] if the executable cannot be launched.
pub fn spawn_service(root: &Path, service: &ServiceConfig) -> Result<u32, SuperviseError> {
    let log_path = root.join(&service.log_file);
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SuperviseError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let log = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|source| SuperviseError::Io {
            path: log_path.clone(),
            source,
        })?;
    let log_err = log.try_clone().map_err(|source| SuperviseError::Io {
        path: log_path.clone(),
        source,
    })?;

    let child = std::process::Command::new(&service.command)
        .args(&service.args)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log))
        .stderr(Stdio::from(log_err))
        .spawn()
        .map_err(|source| SuperviseError::Spawn {
            command: service.command.clone(),
            source,
        })?;

    let pid = child.id();
    tracing::info!(pid, command = %service.command, log = %log_path.display(), "service spawned");
    Ok(pid)
}

/// Check whether `pid` is alive (signal 0).
///
/// A zombie still accepts signal 0 but is already dead for supervision
/// purposes, so Linux zombies count as not alive.
#[must_use]
pub fn is_alive(pid: u32) -> bool {
    let signalable = std::process::Command::new("kill")
        .args(["-0", &pid.to_string()])
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);
    signalable && !is_zombie(pid)
}

#[cfg(target_os = "linux")]
fn is_zombie(pid: u32) -> bool {
    // /proc/<pid>/stat is "pid (comm) state ..."; comm may contain spaces,
    // so the state field is the first token after the last ')'.
    std::fs::read_to_string(format!("/proc/{pid}/stat")).is_ok_and(|stat| {
        stat.rfind(')')
            .and_then(|idx| stat[idx + 1..].split_whitespace().next())
            == Some("Z")
    })
}

#[cfg(not(target_os = "linux"))]
const fn is_zombie(_pid: u32) -> bool {
    false
}

/// Send SIGTERM (or SIGKILL when `force`) to `pid`.
///
/// Returns `false` when the signal could not be delivered, which normally
/// means the process exited in the meantime.
///
/// # Errors
///
/// Returns [`SuperviseError::Helper`] when `kill` itself cannot be run.
pub fn terminate(pid: u32, force: bool) -> Result<bool, SuperviseError> {
    let signal = if force { "-KILL" } else { "-TERM" };
    let status = std::process::Command::new("kill")
        .args([signal, &pid.to_string()])
        .stderr(Stdio::null())
        .status()
        .map_err(|source| SuperviseError::Helper {
            command: String::from("kill"),
            source,
        })?;

    tracing::info!(pid, signal, delivered = status.success(), "signal sent");
    Ok(status.success())
}

/// Wait up to `timeout` for `pid` to exit. Returns `true` on exit.
pub async fn wait_for_exit(pid: u32, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if !is_alive(pid) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    !is_alive(pid)
}
