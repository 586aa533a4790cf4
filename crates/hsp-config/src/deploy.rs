//! Deploy-package generation configuration.

use serde::{Deserialize, Serialize};

/// Default public domain for the nginx site.
fn default_domain() -> String {
    String::from("localhost")
}

/// Default container image name.
fn default_image_name() -> String {
    String::from("hospshop")
}

/// Default output directory for generated artifacts, relative to the
/// project root.
fn default_output_dir() -> String {
    String::from("deploy")
}

/// Default gunicorn worker count.
const fn default_workers() -> u32 {
    4
}

/// Default TLS setting for the nginx site.
const fn default_tls() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeployConfig {
    /// Public domain the reverse proxy serves.
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Container image name used in Dockerfile/compose artifacts.
    #[serde(default = "default_image_name")]
    pub image_name: String,

    /// Where generated artifacts are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Gunicorn worker count baked into generated artifacts.
    #[serde(default = "default_workers")]
    pub workers: u32,

    /// Whether the nginx site includes the 443 server block and
    /// Let's Encrypt certificate paths.
    #[serde(default = "default_tls")]
    pub tls: bool,

    /// Contact e-mail for certbot registration, shown in the checklist.
    #[serde(default)]
    pub acme_email: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            image_name: default_image_name(),
            output_dir: default_output_dir(),
            workers: default_workers(),
            tls: default_tls(),
            acme_email: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DeployConfig::default();
        assert_eq!(config.domain, "localhost");
        assert_eq!(config.workers, 4);
        assert!(config.tls);
    }
}
