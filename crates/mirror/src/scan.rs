//! Source tree discovery.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Recursively collects every regular file under `source`.
///
/// Directories are descended silently and never yielded. Entry metadata is
/// read without traversing symlinks, so a symlinked file or directory is
/// skipped rather than followed — the same platform-dependent edge the
/// underlying `read_dir` contract leaves open.
///
/// Single pass, finite. The caller owns ordering; this function promises
/// nothing about it.
///
/// # Errors
///
/// A missing or unreadable source directory (or any unreadable
/// subdirectory) is a [`Scan`](ErrorKind::Scan) error. There is no
/// best-effort partial result.
pub async fn scan(source: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![source.to_path_buf()];
    while let Some(current) = stack.pop() {
        let mut entries = fs::read_dir(&current).await.or_raise(|| ErrorKind::Scan)?;
        while let Some(entry) = entries.next_entry().await.or_raise(|| ErrorKind::Scan)? {
            let metadata = entry.metadata().await.or_raise(|| ErrorKind::Scan)?;
            if metadata.is_dir() {
                stack.push(entry.path());
            } else if metadata.is_file() {
                files.push(entry.path());
            }
            // Anything else is most likely a symlink; silently drop it.
        }
    }
    tracing::debug!(source = %source.display(), count = files.len(), "source walk complete");
    Ok(files)
}
