//! # hsp-deploy
//!
//! Production packaging for the platform: verifies the application tree is
//! complete and renders the deploy artifacts (Dockerfile, docker-compose,
//! nginx site, systemd unit, environment contract, deploy checklist) from
//! the deploy configuration.

mod error;
mod package;
mod templates;
mod verify;

pub use error::DeployError;
pub use package::generate;
pub use templates::{ArtifactContext, render_artifact};
pub use verify::check_essential_files;
