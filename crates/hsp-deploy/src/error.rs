//! Deploy error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating deploy artifacts.
#[derive(Debug, Error)]
pub enum DeployError {
    /// A template failed to register (malformed template source).
    #[error("template registration failed: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Rendering a registered template failed.
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Filesystem error while writing artifacts.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
