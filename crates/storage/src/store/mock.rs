//! In-memory object store for testing.

use crate::error::{ErrorKind, Result};
use crate::store::ObjectStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// One stored object: body plus the metadata the put attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
    pub cache_control: String,
}

#[derive(Default)]
struct MockState {
    objects: HashMap<String, StoredObject>,
    /// Keys in the order they were put, so tests can assert upload ordering.
    order: Vec<String>,
}

/// In-memory object store for testing.
///
/// Objects live in a `HashMap` behind a [`RwLock`], so all trait methods
/// operate on `&self` without external synchronisation. Records every put's
/// key order and metadata; can be told to reject a specific key to exercise
/// failure propagation.
///
/// # Examples
///
/// ```
/// use sitepush_storage::store::{MockStore, ObjectStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MockStore::new("test-bucket");
/// store.put("a/index.html", b"<html>".to_vec(), "text/html", "no-cache").await?;
/// assert_eq!(store.keys_in_order().await, vec!["a/index.html"]);
/// # Ok(())
/// # }
/// ```
pub struct MockStore {
    name: String,
    bucket: String,
    state: RwLock<MockState>,
    fail_on: Option<String>,
}

impl MockStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            name: "mock".to_string(),
            bucket: bucket.into(),
            state: RwLock::new(MockState::default()),
            fail_on: None,
        }
    }

    /// Reject the put for one specific key with an upload error.
    ///
    /// # Example
    ///
    /// ```
    /// use sitepush_storage::store::MockStore;
    ///
    /// let store = MockStore::new("test-bucket").failing_on("css/broken.css");
    /// ```
    pub fn failing_on(mut self, key: impl Into<String>) -> Self {
        self.fail_on = Some(key.into());
        self
    }

    /// The object stored under `key`, if any.
    pub async fn object(&self, key: &str) -> Option<StoredObject> {
        self.state.read().await.objects.get(key).cloned()
    }

    /// Every stored key, in put order.
    pub async fn keys_in_order(&self) -> Vec<String> {
        self.state.read().await.order.clone()
    }

    /// Number of stored objects.
    pub async fn object_count(&self) -> usize {
        self.state.read().await.objects.len()
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str, cache_control: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(key) {
            exn::bail!(ErrorKind::Upload {
                key: key.to_string(),
                detail: "injected failure".to_string(),
            });
        }
        let mut state = self.state.write().await;
        state.order.push(key.to_string());
        state.objects.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
                cache_control: cache_control.to_string(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_read_back() {
        let store = MockStore::new("bucket");
        store.put("k", b"body".to_vec(), "text/plain", "no-cache").await.unwrap();
        let object = store.object("k").await.unwrap();
        assert_eq!(object.body, b"body");
        assert_eq!(object.content_type, "text/plain");
        assert_eq!(object.cache_control, "no-cache");
    }

    #[tokio::test]
    async fn test_records_put_order() {
        let store = MockStore::new("bucket");
        store.put("b", vec![], "text/plain", "no-cache").await.unwrap();
        store.put("a", vec![], "text/plain", "no-cache").await.unwrap();
        assert_eq!(store.keys_in_order().await, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let store = MockStore::new("bucket").failing_on("bad");
        store.put("good", vec![], "text/plain", "no-cache").await.unwrap();
        let err = store.put("bad", vec![], "text/plain", "no-cache").await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Upload { .. }));
        assert_eq!(store.object_count().await, 1);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_latest() {
        let store = MockStore::new("bucket");
        store.put("k", b"one".to_vec(), "text/plain", "no-cache").await.unwrap();
        store.put("k", b"two".to_vec(), "text/plain", "no-cache").await.unwrap();
        assert_eq!(store.object("k").await.unwrap().body, b"two");
        // Both puts are still visible in the order log.
        assert_eq!(store.keys_in_order().await.len(), 2);
    }
}
