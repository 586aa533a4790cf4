//! Port occupancy checks and port-to-PID lookup.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::SuperviseError;

const CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

/// Check whether something is accepting connections on `host:port`.
///
/// A connect within a short timeout counts as bound. Resolution failures
/// count as unbound rather than erroring; the caller only needs a yes/no.
#[must_use]
pub fn is_port_bound(host: &str, port: u16) -> bool {
    let Ok(addrs) = (host, port).to_socket_addrs() else {
        return false;
    };
    for addr in addrs {
        if TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT).is_ok() {
            return true;
        }
    }
    false
}

/// Find the PID of the process listening on `port` via `lsof`.
///
/// This is the stop-path fallback when the pidfile is missing or stale.
/// Returns `Ok(None)` when nothing is listening (lsof exits non-zero with
/// no output in that case), and also when `lsof` is not installed at all,
/// since the fallback is best-effort.
///
/// # Errors
///
/// Returns [`SuperviseError::Helper`] when `lsof` exists but cannot be run.
pub fn find_pid_by_port(port: u16) -> Result<Option<u32>, SuperviseError> {
    let output = match std::process::Command::new("lsof")
        .args(["-ti", &format!("tcp:{port}"), "-sTCP:LISTEN"])
        .output()
    {
        Ok(output) => output,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(port, "lsof not available; skipping port lookup");
            return Ok(None);
        }
        Err(source) => {
            return Err(SuperviseError::Helper {
                command: String::from("lsof"),
                source,
            });
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let pid = stdout
        .lines()
        .find_map(|line| line.trim().parse::<u32>().ok());

    if pid.is_none() {
        tracing::debug!(port, "no listener found via lsof");
    }
    Ok(pid)
}
