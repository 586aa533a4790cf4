//! Supervised service configuration.

use serde::{Deserialize, Serialize};

/// Default service name.
fn default_name() -> String {
    String::from("hospshop")
}

/// Default launch command.
fn default_command() -> String {
    String::from("gunicorn")
}

/// Default launch arguments (gunicorn bound to the service port).
fn default_args() -> Vec<String> {
    vec![
        String::from("--bind"),
        String::from("0.0.0.0:5000"),
        String::from("--workers"),
        String::from("4"),
        String::from("app:app"),
    ]
}

/// Default bind host used for local port/health checks.
fn default_host() -> String {
    String::from("127.0.0.1")
}

/// Default service port.
const fn default_port() -> u16 {
    5000
}

/// Default pidfile path, relative to the project root.
fn default_pid_file() -> String {
    String::from("hospshop.pid")
}

/// Default log file path, relative to the project root.
fn default_log_file() -> String {
    String::from("hospshop.log")
}

/// Default delay before the first health probe, in seconds.
const fn default_startup_wait_secs() -> u64 {
    3
}

/// Default wait for process exit after SIGTERM, in seconds.
const fn default_stop_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name, used in reports and generated deploy artifacts.
    #[serde(default = "default_name")]
    pub name: String,

    /// Executable launched by `hsp service start`.
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments passed to the executable.
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Host probed for port occupancy and health checks.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port the service listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Pidfile handed off between start and stop, relative to the project root.
    #[serde(default = "default_pid_file")]
    pub pid_file: String,

    /// File the service's stdout/stderr is appended to.
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Delay before the first health probe after spawning.
    #[serde(default = "default_startup_wait_secs")]
    pub startup_wait_secs: u64,

    /// How long `stop` waits for the process to exit after signaling.
    #[serde(default = "default_stop_timeout_secs")]
    pub stop_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            command: default_command(),
            args: default_args(),
            host: default_host(),
            port: default_port(),
            pid_file: default_pid_file(),
            log_file: default_log_file(),
            startup_wait_secs: default_startup_wait_secs(),
            stop_timeout_secs: default_stop_timeout_secs(),
        }
    }
}
