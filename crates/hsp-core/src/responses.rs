//! Report types returned as JSON by `hsp` commands.
//!
//! These structs define the shape of output for commands like
//! `hsp service start`, `hsp service status`, `hsp backup run`, and
//! `hsp deploy package`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ServiceState, StopMethod};

/// Result of one health-probe cycle against the service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeReport {
    pub url: String,
    pub healthy: bool,
    /// HTTP status of the last attempt, if a response was received.
    pub status: Option<u16>,
    /// `status` field of the JSON body, when the endpoint returns one.
    pub body_status: Option<String>,
    pub latency_ms: Option<u64>,
    pub attempts: u32,
    pub error: Option<String>,
}

/// Response from `hsp service start`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartReport {
    pub service: String,
    pub pid: u32,
    pub port: u16,
    pub log_file: String,
    pub pid_file: String,
    pub health: ProbeReport,
    /// Last lines of the service log, included when the probe failed.
    pub log_tail: Option<Vec<String>>,
}

/// Response from `hsp service stop`.
///
/// A missing pidfile or an already-dead process is not an error: `pid`
/// is `None` and `terminated` is `false` when nothing was running.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopReport {
    pub service: String,
    pub pid: Option<u32>,
    pub method: Option<StopMethod>,
    pub terminated: bool,
    pub forced: bool,
    pub pidfile_removed: bool,
    pub warnings: Vec<String>,
}

/// Response from `hsp service status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusReport {
    pub service: String,
    pub state: ServiceState,
    pub pid: Option<u32>,
    pub pid_alive: bool,
    pub port: u16,
    pub port_bound: bool,
    pub health: Option<ProbeReport>,
}

/// One local backup artifact, as listed by `hsp backup list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupEntry {
    pub filename: String,
    pub path: String,
    pub size_bytes: u64,
    pub modified_at: DateTime<Utc>,
}

/// Response from `hsp backup run`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupReport {
    pub started_at: DateTime<Utc>,
    pub database_archive: Option<String>,
    pub app_archive: Option<String>,
    /// Remote URIs of uploaded artifacts.
    pub uploaded: Vec<String>,
    /// Reason uploads were skipped (S3 unconfigured, `--no-upload`).
    pub upload_skipped: Option<String>,
    pub warnings: Vec<String>,
    /// At least one artifact was produced.
    pub success: bool,
}

/// Response from `hsp backup prune`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PruneReport {
    pub removed: u32,
    pub kept: u32,
}

/// One entry of the essential-file verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileCheckEntry {
    pub file: String,
    pub description: String,
    pub present: bool,
}

/// Response from `hsp deploy check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileCheckReport {
    pub entries: Vec<FileCheckEntry>,
    pub all_present: bool,
}

/// Response from `hsp deploy package`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageReport {
    pub output_dir: String,
    pub written: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ServiceState;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_report_serializes_expected_shape() {
        let report = StatusReport {
            service: "hospshop".into(),
            state: ServiceState::Stopped,
            pid: None,
            pid_alive: false,
            port: 5000,
            port_bound: false,
            health: None,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["state"], "stopped");
        assert_eq!(value["port"], 5000);
        assert!(value["pid"].is_null());
    }

    #[test]
    fn stop_report_round_trips() {
        let report = StopReport {
            service: "hospshop".into(),
            pid: Some(4242),
            method: Some(StopMethod::PortLookup),
            terminated: true,
            forced: false,
            pidfile_removed: true,
            warnings: vec!["pidfile missing, fell back to port lookup".into()],
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: StopReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
