use clap::Subcommand;

/// Backup commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BackupCommands {
    /// Create database + application backups and upload them.
    Run {
        /// Keep the artifacts local, skip the S3 upload.
        #[arg(long)]
        no_upload: bool,
    },
    /// List local backups, newest first.
    List,
    /// Remove local backups older than the retention window.
    Prune {
        /// Override the configured retention, in days.
        #[arg(long)]
        keep_days: Option<u32>,
    },
}
