//! Single-file upload.

use crate::error::{ErrorKind, Result};
use crate::key::derive_key;
use exn::ResultExt;
use sitepush_storage::StoreHandle;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// What one upload attached and where it landed. Consumed by the CLI for
/// its progress lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub path: PathBuf,
    pub key: String,
    pub content_type: &'static str,
    pub cache_control: &'static str,
}

/// Uploads one file: classify, read, derive the key, put.
///
/// Content type and cache policy are derived from the filename alone; the
/// whole body is read and written in a single put with both metadata
/// headers attached. Success means the store acknowledged the write —
/// anything else aborts the caller's run.
///
/// # Errors
///
/// [`Filesystem`](ErrorKind::Filesystem) when the planned file can't be
/// read back, [`Upload`](ErrorKind::Upload) when the store refuses the
/// write (the inner error carries the response detail).
#[instrument(skip(store, path), fields(path = %path.display()))]
pub async fn upload_file(
    store: &StoreHandle,
    source_root: &str,
    prefix: &str,
    path: &Path,
) -> Result<UploadReceipt> {
    let filename = path.to_string_lossy();
    let content_type = sitepush_classify::content_type(&filename);
    let cache_control = sitepush_classify::cache_control(&filename, content_type);
    let key = derive_key(source_root, prefix, &filename);
    let body = tokio::fs::read(path).await.or_raise(|| ErrorKind::Filesystem)?;
    store.put(&key, body, content_type, cache_control).await.or_raise(|| ErrorKind::Upload)?;
    Ok(UploadReceipt {
        path: path.to_path_buf(),
        key,
        content_type,
        cache_control,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitepush_storage::store::MockStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_upload_attaches_metadata() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();
        std::fs::write(temp_dir.path().join("photo.png"), b"png bytes").unwrap();

        let mock = Arc::new(MockStore::new("bucket"));
        let store: StoreHandle = mock.clone();
        let receipt =
            upload_file(&store, &root, "media", &temp_dir.path().join("photo.png")).await.unwrap();

        assert_eq!(receipt.key, "media/photo.png");
        assert_eq!(receipt.content_type, "image/png");
        assert_eq!(receipt.cache_control, "max-age=1800");

        let object = mock.object("media/photo.png").await.unwrap();
        assert_eq!(object.body, b"png bytes");
        assert_eq!(object.content_type, "image/png");
        assert_eq!(object.cache_control, "max-age=1800");
    }

    #[tokio::test]
    async fn test_missing_file_is_a_filesystem_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();
        let store: StoreHandle = Arc::new(MockStore::new("bucket"));

        let err = upload_file(&store, &root, "", &temp_dir.path().join("gone.txt")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Filesystem));
    }

    #[tokio::test]
    async fn test_store_refusal_is_an_upload_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();
        std::fs::write(temp_dir.path().join("a.txt"), b"x").unwrap();

        let store: StoreHandle = Arc::new(MockStore::new("bucket").failing_on("a.txt"));
        let err = upload_file(&store, &root, "", &temp_dir.path().join("a.txt")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Upload));
    }
}
