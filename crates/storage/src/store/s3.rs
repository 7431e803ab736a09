//! S3-compatible object store.
//!
//! Works against AWS S3 and any S3-compatible service the ambient AWS
//! configuration points at (custom endpoints via `AWS_ENDPOINT_URL`).
//! Credentials come from the standard SDK provider chain: environment
//! variables, shared config files, instance metadata.

use crate::error::{ErrorKind, Result};
use crate::store::ObjectStore;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

/// Object store backed by an S3 bucket.
///
/// Explicitly constructed and scoped to one mirroring run — there is no
/// process-global client. Substitutable behind
/// [`StoreHandle`](crate::StoreHandle) for testing.
///
/// # Examples
///
/// ```no_run
/// use sitepush_storage::store::S3Store;
///
/// # async fn example() {
/// let store = S3Store::from_env("my-site-bucket").await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct S3Store {
    name: String,
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Create a store from the ambient AWS configuration (environment,
    /// shared config, credential chain).
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket)
    }

    /// Create a store from an already-configured client, for callers that
    /// need a custom endpoint or credentials.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            name: "s3".to_string(),
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn name(&self) -> &str {
        &self.name
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str, cache_control: &str) -> Result<()> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .cache_control(cache_control)
            .send()
            .await
            .map_err(|err| ErrorKind::Upload {
                key: key.to_string(),
                // The rendered context includes the service response,
                // which is what an operator needs to diagnose a refusal.
                detail: DisplayErrorContext(&err).to_string(),
            })?;
        tracing::debug!(bucket = %self.bucket, key, size, content_type, cache_control, "object stored");
        Ok(())
    }
}
