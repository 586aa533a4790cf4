//! S3 upload of backup artifacts.

use std::path::Path;

use object_store::ObjectStore;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::{PutPayload, path::Path as StorePath};

use hsp_config::S3Config;

use crate::error::BackupError;

/// Build an S3 client from the config, honoring a custom endpoint for
/// S3-compatible stores.
///
/// # Errors
///
/// Returns [`BackupError::Store`] when the builder rejects the config.
pub fn build_store(s3: &S3Config) -> Result<AmazonS3, BackupError> {
    let mut builder = AmazonS3Builder::new()
        .with_bucket_name(&s3.bucket)
        .with_region(&s3.region)
        .with_access_key_id(&s3.access_key_id)
        .with_secret_access_key(&s3.secret_access_key);

    if !s3.endpoint.is_empty() {
        builder = builder.with_endpoint(&s3.endpoint).with_allow_http(true);
    }

    Ok(builder.build()?)
}

/// Upload one artifact as `<key_prefix>/<filename>`, returning its
/// `s3://` URI.
///
/// # Errors
///
/// Returns [`BackupError::Io`] when the artifact cannot be read and
/// [`BackupError::Store`]/[`BackupError::StorePath`] on upload failure.
pub async fn upload_file(s3: &S3Config, artifact: &Path) -> Result<String, BackupError> {
    let filename = artifact
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("backup");
    let key = object_key(s3, filename);
    let location = StorePath::parse(&key)?;

    let bytes = tokio::fs::read(artifact)
        .await
        .map_err(|source| BackupError::Io {
            path: artifact.to_path_buf(),
            source,
        })?;

    let store = build_store(s3)?;
    store.put(&location, PutPayload::from(bytes)).await?;

    let uri = s3.object_uri(&key);
    tracing::info!(%uri, "backup uploaded");
    Ok(uri)
}

/// Object key for an artifact filename, honoring an empty prefix.
fn object_key(s3: &S3Config, filename: &str) -> String {
    if s3.key_prefix.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", s3.key_prefix, filename)
    }
}

#[cfg(test)]
mod tests {
    use hsp_config::S3Config;
    use pretty_assertions::assert_eq;

    use super::{build_store, object_key};

    fn configured() -> S3Config {
        S3Config {
            access_key_id: "key".into(),
            secret_access_key: "secret".into(),
            ..Default::default()
        }
    }

    #[test]
    fn store_builds_from_configured_s3() {
        assert!(build_store(&configured()).is_ok());
    }

    #[test]
    fn store_builds_with_custom_endpoint() {
        let config = S3Config {
            endpoint: "http://localhost:9000".into(),
            ..configured()
        };
        assert!(build_store(&config).is_ok());
    }

    #[test]
    fn object_key_joins_prefix_and_filename() {
        let config = configured();
        assert_eq!(
            object_key(&config, "hospshop_db_x.db.gz"),
            "backups/hospshop_db_x.db.gz"
        );
    }

    #[test]
    fn object_key_without_prefix_is_bare() {
        let config = S3Config {
            key_prefix: String::new(),
            ..configured()
        };
        assert_eq!(object_key(&config, "a.tar.gz"), "a.tar.gz");
    }
}
