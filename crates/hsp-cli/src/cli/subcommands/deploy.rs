use clap::Subcommand;

/// Deploy tooling commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DeployCommands {
    /// Verify the application tree carries its essential files.
    Check,
    /// Generate the production artifacts (Docker, nginx, systemd, env).
    Package {
        /// Override the configured output directory.
        #[arg(long)]
        output: Option<String>,
    },
}
