//! Production package generation.

use std::path::{Path, PathBuf};

use hsp_config::{DeployConfig, ServiceConfig};
use hsp_core::responses::PackageReport;

use crate::error::DeployError;
use crate::templates::{
    ArtifactContext, CHECKLIST, DOCKER_COMPOSE, DOCKERFILE, ENV_EXAMPLE, NGINX_SITE, SYSTEMD_UNIT,
    render_artifact,
};

/// Render every deploy artifact into `<root>/<output_dir>`.
///
/// The report lists the written files relative to the output directory.
///
/// # Errors
///
/// Returns [`DeployError`] on template or filesystem failure.
pub fn generate(
    root: &Path,
    service: &ServiceConfig,
    deploy: &DeployConfig,
) -> Result<PackageReport, DeployError> {
    let context = ArtifactContext::new(service, deploy);
    let output_dir = root.join(&deploy.output_dir);

    let artifacts: [(PathBuf, &str); 6] = [
        (PathBuf::from("Dockerfile"), DOCKERFILE),
        (PathBuf::from("docker-compose.yml"), DOCKER_COMPOSE),
        (
            PathBuf::from("nginx").join(format!("{}.conf", service.name)),
            NGINX_SITE,
        ),
        (
            PathBuf::from("systemd").join(format!("{}.service", service.name)),
            SYSTEMD_UNIT,
        ),
        (PathBuf::from(".env.example"), ENV_EXAMPLE),
        (PathBuf::from("CHECKLIST_DEPLOY.md"), CHECKLIST),
    ];

    let mut written = Vec::with_capacity(artifacts.len());
    for (relative, template) in artifacts {
        let rendered = render_artifact(template, &context)?;
        let target = output_dir.join(&relative);

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|source| DeployError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&target, rendered).map_err(|source| DeployError::Io {
            path: target.clone(),
            source,
        })?;

        tracing::debug!(path = %target.display(), "artifact written");
        written.push(relative.display().to_string());
    }

    Ok(PackageReport {
        output_dir: output_dir.display().to_string(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use hsp_config::{DeployConfig, ServiceConfig};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::generate;

    #[test]
    fn generates_all_artifacts() {
        let temp = TempDir::new().unwrap();
        let service = ServiceConfig::default();
        let deploy = DeployConfig::default();

        let report = generate(temp.path(), &service, &deploy).unwrap();

        assert_eq!(report.written.len(), 6);
        let out = temp.path().join("deploy");
        assert!(out.join("Dockerfile").exists());
        assert!(out.join("docker-compose.yml").exists());
        assert!(out.join("nginx/hospshop.conf").exists());
        assert!(out.join("systemd/hospshop.service").exists());
        assert!(out.join(".env.example").exists());
        assert!(out.join("CHECKLIST_DEPLOY.md").exists());
    }

    #[test]
    fn custom_output_dir_and_name_are_respected() {
        let temp = TempDir::new().unwrap();
        let service = ServiceConfig {
            name: String::from("quoteboard"),
            ..Default::default()
        };
        let deploy = DeployConfig {
            output_dir: String::from("dist/prod"),
            ..Default::default()
        };

        let report = generate(temp.path(), &service, &deploy).unwrap();

        assert!(report.written.contains(&String::from("nginx/quoteboard.conf")));
        assert!(temp.path().join("dist/prod/systemd/quoteboard.service").exists());
    }

    #[test]
    fn generated_dockerfile_contains_configured_port() {
        let temp = TempDir::new().unwrap();
        let service = ServiceConfig {
            port: 7000,
            ..Default::default()
        };

        generate(temp.path(), &service, &DeployConfig::default()).unwrap();

        let dockerfile =
            std::fs::read_to_string(temp.path().join("deploy/Dockerfile")).unwrap();
        assert!(dockerfile.contains("EXPOSE 7000"));
    }
}
