//! State enums for the supervised service.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ServiceState
// ---------------------------------------------------------------------------

/// Observed state of the supervised service.
///
/// `Degraded` means the process is alive but the health endpoint is not
/// answering successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Running,
    Degraded,
    Stopped,
}

impl ServiceState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Degraded => "degraded",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StopMethod
// ---------------------------------------------------------------------------

/// How the PID of the process to stop was located.
///
/// The pidfile is the primary hand-off between `start` and `stop`; the
/// port lookup is the fallback when the pidfile is missing or stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopMethod {
    Pidfile,
    PortLookup,
}

impl StopMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pidfile => "pidfile",
            Self::PortLookup => "port_lookup",
        }
    }
}

impl fmt::Display for StopMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
