mod backup;
mod config;
mod deploy;
mod service;

pub use backup::BackupCommands;
pub use config::ConfigCommands;
pub use deploy::DeployCommands;
pub use service::ServiceCommands;
