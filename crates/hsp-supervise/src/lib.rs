//! # hsp-supervise
//!
//! Process supervision for the Hospshop service.
//!
//! The contract between operations is small and file-based: `start` spawns
//! the service with its output redirected to a log file and persists the
//! PID to a pidfile; `stop` reads that pidfile and signals the process,
//! falling back to a port-based lookup when the pidfile is missing or
//! stale. `status` combines pidfile, port occupancy, and a health probe.

mod error;
mod logtail;
mod pidfile;
mod port;
mod probe;
mod process;
mod service;

pub use error::SuperviseError;
pub use logtail::tail_lines;
pub use pidfile::{read_pid, remove_pidfile, write_pid};
pub use port::{find_pid_by_port, is_port_bound};
pub use probe::{probe, probe_once};
pub use process::{is_alive, spawn_service, terminate, wait_for_exit};
pub use service::{restart, start, status, stop};
