use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use tracing::info;

use configs::StorageConfig;

use crate::errors::ServiceError;

/// Thin wrapper over the S3 client bound to one bucket. Objects are written
/// with a public-read ACL; reads go straight to the public base URL.
#[derive(Clone)]
pub struct ObjectStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl ObjectStore {
    pub async fn from_config(cfg: &StorageConfig) -> Result<Self, ServiceError> {
        if !cfg.is_configured() {
            return Err(ServiceError::Storage(
                "object storage is not configured".into(),
            ));
        }
        let shared = aws_config::from_env()
            .region(Region::new(cfg.region.clone()))
            .load()
            .await;
        let credentials = Credentials::new(
            cfg.access_key.clone(),
            cfg.secret_key.clone(),
            None,
            None,
            "config",
        );
        let s3_config = aws_sdk_s3::config::Builder::from(&shared)
            .endpoint_url(cfg.endpoint.clone())
            .credentials_provider(credentials)
            .build();
        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: cfg.bucket.clone(),
            public_base_url: cfg.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upload one object and return its public URL.
    pub async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ServiceError> {
        let len = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        info!(key = %key, bytes = len, "object uploaded");
        Ok(self.public_url(key))
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }
}
