use clap::{Args, Subcommand};

use crate::cli::subcommands::{BackupCommands, ConfigCommands, DeployCommands, ServiceCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Service lifecycle: start, stop, restart, status.
    Service {
        #[command(subcommand)]
        action: ServiceCommands,
    },
    /// One-shot health probe of the service endpoint.
    Health(HealthArgs),
    /// Deploy tooling: essential-file check and artifact generation.
    Deploy {
        #[command(subcommand)]
        action: DeployCommands,
    },
    /// Backups: run, list, prune.
    Backup {
        #[command(subcommand)]
        action: BackupCommands,
    },
    /// Configuration inspection.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Arguments for `hsp health`.
#[derive(Clone, Debug, Args)]
pub struct HealthArgs {
    /// Probe this URL instead of the configured service endpoint
    /// (e.g. the public address behind the reverse proxy).
    #[arg(long)]
    pub url: Option<String>,
}
