use clap::Subcommand;

/// Configuration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective merged configuration (secrets redacted).
    Show,
}
