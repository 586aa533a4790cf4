//! S3 backup-target configuration.

use serde::{Deserialize, Serialize};

/// Default bucket name.
fn default_bucket() -> String {
    String::from("hospshop-backups")
}

/// Default region.
fn default_region() -> String {
    String::from("us-east-1")
}

/// Default key prefix for uploaded artifacts.
fn default_key_prefix() -> String {
    String::from("backups")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Config {
    /// Bucket backups are uploaded to.
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,

    /// Access key ID.
    #[serde(default)]
    pub access_key_id: String,

    /// Secret access key.
    #[serde(default)]
    pub secret_access_key: String,

    /// Custom endpoint URL for S3-compatible stores. Empty means AWS.
    #[serde(default)]
    pub endpoint: String,

    /// Key prefix under which artifacts land (`<prefix>/<filename>`).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            region: default_region(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            endpoint: String::new(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl S3Config {
    /// Check if the S3 config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.bucket.is_empty()
            && !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
    }

    /// Remote URI for an uploaded object key.
    #[must_use]
    pub fn object_uri(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = S3Config::default();
        assert!(!config.is_configured());
        assert_eq!(config.bucket, "hospshop-backups");
    }

    #[test]
    fn configured_when_all_required_fields_set() {
        let config = S3Config {
            access_key_id: "key".into(),
            secret_access_key: "secret".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn not_configured_when_missing_field() {
        let config = S3Config {
            access_key_id: "key".into(),
            secret_access_key: String::new(), // missing
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn object_uri_includes_bucket() {
        let config = S3Config::default();
        assert_eq!(
            config.object_uri("backups/hospshop_db_x.db.gz"),
            "s3://hospshop-backups/backups/hospshop_db_x.db.gz"
        );
    }
}
