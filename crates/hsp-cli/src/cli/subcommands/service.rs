use clap::Subcommand;

/// Service lifecycle commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ServiceCommands {
    /// Start the service and wait for it to turn healthy.
    Start,
    /// Stop the service (pidfile first, port lookup as fallback).
    Stop {
        /// Send SIGKILL instead of SIGTERM.
        #[arg(long)]
        force: bool,
    },
    /// Stop then start.
    Restart {
        /// Send SIGKILL instead of SIGTERM during the stop phase.
        #[arg(long)]
        force: bool,
    },
    /// Show pidfile, port, and health state.
    Status,
}
