use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hsp` binary.
#[derive(Debug, Parser)]
#[command(name = "hsp", version, about = "Hospshop ops - service supervision and deploy toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .hospshop)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{BackupCommands, ServiceCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["hsp", "--format", "json", "--verbose", "service", "status"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Service {
                action: ServiceCommands::Status
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hsp", "backup", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Backup {
                action: BackupCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["hsp", "--format", "xml", "health"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn stop_accepts_force_flag() {
        let cli = Cli::try_parse_from(["hsp", "service", "stop", "--force"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Service {
                action: ServiceCommands::Stop { force: true }
            }
        ));
    }

    #[test]
    fn backup_run_accepts_no_upload() {
        let cli = Cli::try_parse_from(["hsp", "backup", "run", "--no-upload"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Backup {
                action: BackupCommands::Run { no_upload: true }
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["hsp", "--project", "/tmp/demo", "health"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
    }
}
