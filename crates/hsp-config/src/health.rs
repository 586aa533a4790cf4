//! Health probe configuration.

use serde::{Deserialize, Serialize};

/// Default health endpoint path.
fn default_path() -> String {
    String::from("/health")
}

/// Default per-request timeout, in seconds.
const fn default_timeout_secs() -> u64 {
    5
}

/// Default interval between probe attempts, in seconds.
const fn default_poll_interval_secs() -> u64 {
    1
}

/// Default total polling window after startup, in seconds.
const fn default_max_wait_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthConfig {
    /// Path of the health endpoint on the service.
    #[serde(default = "default_path")]
    pub path: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Interval between attempts while polling.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Give up polling after this long.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
}

impl HealthConfig {
    /// Build the probe URL for a service bound to `host:port`.
    #[must_use]
    pub fn url(&self, host: &str, port: u16) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        format!("http://{host}:{port}{path}")
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            timeout_secs: default_timeout_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            max_wait_secs: default_max_wait_secs(),
        }
    }
}
