//! Start/stop/status orchestration.
//!
//! `start` refuses to run when the port already has a listener, spawns the
//! service with output redirected to the log file, persists the PID, then
//! polls the health endpoint. A failed probe leaves the process running and
//! returns a report carrying the log tail; the caller decides the exit code.
//!
//! `stop` prefers the pidfile and falls back to a port lookup; a service
//! that is already stopped is reported, not errored.

use std::path::Path;
use std::time::Duration;

use hsp_config::{HealthConfig, ServiceConfig};
use hsp_core::enums::{ServiceState, StopMethod};
use hsp_core::responses::{StartReport, StatusReport, StopReport};

use crate::error::SuperviseError;
use crate::logtail::tail_lines;
use crate::pidfile::{read_pid, remove_pidfile, write_pid};
use crate::port::{find_pid_by_port, is_port_bound};
use crate::probe::{probe, probe_once};
use crate::process::{is_alive, spawn_service, terminate, wait_for_exit};

/// Lines of service log included in a failed-start report.
const LOG_TAIL_LINES: usize = 20;

/// Start the service.
///
/// # Errors
///
/// Returns [`SuperviseError::PortInUse`] when the port is already bound,
/// plus spawn/pidfile errors. A service that starts but never turns
/// healthy is NOT an error: the report says `healthy: false` and carries
/// the log tail.
pub async fn start(
    root: &Path,
    service: &ServiceConfig,
    health: &HealthConfig,
) -> Result<StartReport, SuperviseError> {
    if is_port_bound(&service.host, service.port) {
        return Err(SuperviseError::PortInUse { port: service.port });
    }

    let pid = spawn_service(root, service)?;
    let pid_path = root.join(&service.pid_file);
    write_pid(&pid_path, pid)?;

    tokio::time::sleep(Duration::from_secs(service.startup_wait_secs)).await;

    let url = health.url(&service.host, service.port);
    let report = probe(&url, health).await;

    let log_tail = if report.healthy {
        None
    } else {
        tracing::warn!(pid, url, "service started but health probe failed");
        Some(tail_lines(&root.join(&service.log_file), LOG_TAIL_LINES)?)
    };

    Ok(StartReport {
        service: service.name.clone(),
        pid,
        port: service.port,
        log_file: service.log_file.clone(),
        pid_file: service.pid_file.clone(),
        health: report,
        log_tail,
    })
}

/// Stop the service.
///
/// # Errors
///
/// Returns [`SuperviseError::InvalidPidfile`] for a garbage pidfile and
/// helper/pidfile I/O errors. A missing pidfile or dead PID falls back to
/// the port lookup; nothing running at all yields a clean report.
pub async fn stop(
    root: &Path,
    service: &ServiceConfig,
    force: bool,
) -> Result<StopReport, SuperviseError> {
    let mut warnings = Vec::new();
    let pid_path = root.join(&service.pid_file);

    let mut target: Option<(u32, StopMethod)> = None;
    match read_pid(&pid_path)? {
        Some(pid) if is_alive(pid) => {
            target = Some((pid, StopMethod::Pidfile));
        }
        Some(pid) => {
            warnings.push(format!(
                "pidfile PID {pid} is not running; removing stale pidfile"
            ));
            remove_pidfile(&pid_path)?;
        }
        None => {
            warnings.push(format!(
                "pidfile {} not found; falling back to port lookup",
                pid_path.display()
            ));
        }
    }

    if target.is_none() {
        if let Some(pid) = find_pid_by_port(service.port)? {
            target = Some((pid, StopMethod::PortLookup));
        }
    }

    let Some((pid, method)) = target else {
        warnings.push(format!(
            "no process found on port {}; nothing to stop",
            service.port
        ));
        return Ok(StopReport {
            service: service.name.clone(),
            pid: None,
            method: None,
            terminated: false,
            forced: force,
            pidfile_removed: false,
            warnings,
        });
    };

    terminate(pid, force)?;
    let exited = wait_for_exit(pid, Duration::from_secs(service.stop_timeout_secs)).await;
    if !exited {
        warnings.push(format!(
            "process {pid} still running after {}s; retry with --force",
            service.stop_timeout_secs
        ));
    }

    let pidfile_removed = remove_pidfile(&pid_path)?;

    Ok(StopReport {
        service: service.name.clone(),
        pid: Some(pid),
        method: Some(method),
        terminated: exited,
        forced: force,
        pidfile_removed,
        warnings,
    })
}

/// Report the observed service state: pidfile, port, and one health probe.
///
/// # Errors
///
/// Returns [`SuperviseError::InvalidPidfile`] for a garbage pidfile.
pub async fn status(
    root: &Path,
    service: &ServiceConfig,
    health: &HealthConfig,
) -> Result<StatusReport, SuperviseError> {
    let pid = read_pid(&root.join(&service.pid_file))?;
    let pid_alive = pid.is_some_and(is_alive);
    let port_bound = is_port_bound(&service.host, service.port);

    let probe_report = if port_bound {
        let url = health.url(&service.host, service.port);
        Some(probe_once(&url, Duration::from_secs(health.timeout_secs)).await)
    } else {
        None
    };

    let state = match &probe_report {
        Some(report) if report.healthy => ServiceState::Running,
        _ if pid_alive || port_bound => ServiceState::Degraded,
        _ => ServiceState::Stopped,
    };

    Ok(StatusReport {
        service: service.name.clone(),
        state,
        pid,
        pid_alive,
        port: service.port,
        port_bound,
        health: probe_report,
    })
}

/// Stop then start, returning both reports.
///
/// # Errors
///
/// Propagates errors from [`stop`] and [`start`].
pub async fn restart(
    root: &Path,
    service: &ServiceConfig,
    health: &HealthConfig,
    force: bool,
) -> Result<(StopReport, StartReport), SuperviseError> {
    let stop_report = stop(root, service, force).await?;
    let start_report = start(root, service, health).await?;
    Ok((stop_report, start_report))
}

#[cfg(all(test, unix))]
mod tests {
    use std::net::TcpListener;

    use hsp_config::{HealthConfig, ServiceConfig};
    use hsp_core::enums::ServiceState;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{start, status, stop};
    use crate::error::SuperviseError;
    use crate::pidfile::write_pid;
    use crate::process::{is_alive, terminate};

    fn free_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        port
    }

    fn sleeper_config(port: u16) -> ServiceConfig {
        ServiceConfig {
            command: String::from("sleep"),
            args: vec![String::from("30")],
            port,
            startup_wait_secs: 0,
            stop_timeout_secs: 5,
            ..Default::default()
        }
    }

    fn quick_health() -> HealthConfig {
        HealthConfig {
            timeout_secs: 1,
            poll_interval_secs: 1,
            max_wait_secs: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn start_refuses_occupied_port() {
        let temp = TempDir::new().unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let error = start(temp.path(), &sleeper_config(port), &quick_health())
            .await
            .unwrap_err();
        assert!(matches!(error, SuperviseError::PortInUse { port: p } if p == port));
    }

    #[tokio::test]
    async fn start_writes_pidfile_and_reports_failed_probe() {
        let temp = TempDir::new().unwrap();
        let config = sleeper_config(free_port());

        // `sleep` never listens, so the probe fails and the tail is attached.
        let report = start(temp.path(), &config, &quick_health()).await.unwrap();
        assert!(is_alive(report.pid));
        assert!(temp.path().join(&config.pid_file).exists());
        assert!(!report.health.healthy);
        assert!(report.log_tail.is_some());

        terminate(report.pid, true).unwrap();
    }

    #[tokio::test]
    async fn stop_with_nothing_running_is_clean() {
        let temp = TempDir::new().unwrap();
        let config = sleeper_config(free_port());

        let report = stop(temp.path(), &config, false).await.unwrap();
        assert_eq!(report.pid, None);
        assert!(!report.terminated);
        assert!(!report.warnings.is_empty());
    }

    #[tokio::test]
    async fn stop_removes_stale_pidfile() {
        let temp = TempDir::new().unwrap();
        let config = sleeper_config(free_port());
        // PIDs near the u32 max are not valid on Linux.
        write_pid(&temp.path().join(&config.pid_file), u32::MAX - 1).unwrap();

        let report = stop(temp.path(), &config, false).await.unwrap();
        assert_eq!(report.pid, None);
        assert!(!temp.path().join(&config.pid_file).exists());
        assert!(
            report
                .warnings
                .iter()
                .any(|warning| warning.contains("stale"))
        );
    }

    #[tokio::test]
    async fn start_then_stop_round_trip() {
        let temp = TempDir::new().unwrap();
        let config = sleeper_config(free_port());

        let started = start(temp.path(), &config, &quick_health()).await.unwrap();
        let stopped = stop(temp.path(), &config, false).await.unwrap();

        assert_eq!(stopped.pid, Some(started.pid));
        assert!(stopped.terminated);
        assert!(stopped.pidfile_removed);
        assert!(!is_alive(started.pid));
    }

    #[tokio::test]
    async fn status_reports_stopped_when_nothing_runs() {
        let temp = TempDir::new().unwrap();
        let config = sleeper_config(free_port());

        let report = status(temp.path(), &config, &quick_health())
            .await
            .unwrap();
        assert_eq!(report.state, ServiceState::Stopped);
        assert_eq!(report.pid, None);
        assert!(!report.port_bound);
        assert!(report.health.is_none());
    }
}
