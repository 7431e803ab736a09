//! Object store trait and implementations.
//!
//! This module defines the `ObjectStore` trait: the single write seam this
//! tool needs from an S3-compatible service. One method, one semantic —
//! a put either lands with its metadata attached, or the run is over.

#[cfg(feature = "mock")]
mod mock;
mod s3;

#[cfg(feature = "mock")]
pub use self::mock::{MockStore, StoredObject};
pub use self::s3::S3Store;
use crate::error::Result;
use async_trait::async_trait;

/// Write interface for a bucket/key addressed blob store.
///
/// Constructed once per run and passed around as a
/// [`StoreHandle`](crate::StoreHandle), so tests can substitute
/// [`MockStore`] for the real [`S3Store`] without touching the pipeline.
///
/// # Examples
///
/// ```
/// use sitepush_storage::{ObjectStore, error::Result};
///
/// async fn publish_marker(store: &dyn ObjectStore) -> Result<()> {
///     store.put("deploy.txt", b"done".to_vec(), "text/plain", "no-cache").await
/// }
/// ```
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Name of the configured store (used for logging only).
    fn name(&self) -> &str;

    /// The bucket every key in this store resolves against.
    fn bucket(&self) -> &str;

    /// Write one object with its content-type and cache-control metadata.
    ///
    /// Success means the store explicitly acknowledged the write. Anything
    /// else — a non-success status, a network failure, an authentication
    /// failure — is an [`Upload`](crate::error::ErrorKind::Upload) error
    /// carrying the full response detail. There is no retry at this layer.
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str, cache_control: &str) -> Result<()>;
}
