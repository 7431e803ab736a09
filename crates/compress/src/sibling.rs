//! Sibling artifact production.

use crate::Compression;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Compresses one file into its `.br` and `.gz` siblings.
///
/// If [`sitepush_classify::is_compressible`] rejects the filename, returns
/// `Ok(None)` without touching the filesystem. Otherwise the whole file is
/// read into memory, both artifacts are written next to the original
/// (`<file>.br`, `<file>.gz`), and `Ok(Some(path))` is returned so the
/// caller can derive the artifact names it now knows exist.
///
/// Read and write failures are hard errors, not skips: a published page
/// will ask for these siblings by name, so a missing artifact must abort
/// the run that would have promised it.
///
/// Synchronous by design; callers fan this out over blocking worker tasks.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn write_siblings(path: &Path) -> Result<Option<PathBuf>> {
    if !sitepush_classify::is_compressible(&path.to_string_lossy()) {
        return Ok(None);
    }
    let data = std::fs::read(path).or_raise(|| ErrorKind::ReadSource(path.to_path_buf()))?;
    for format in Compression::ARTIFACTS {
        let artifact = sibling_path(path, format);
        let compressed = format.compress(&data)?;
        std::fs::write(&artifact, compressed).or_raise(|| ErrorKind::WriteArtifact(artifact.clone()))?;
        tracing::debug!(artifact = %artifact.display(), "wrote compressed sibling");
    }
    Ok(Some(path.to_path_buf()))
}

/// Appends a format's extension to a path (`app.js` → `app.js.gz`).
pub fn sibling_path(path: &Path, format: Compression) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format.extension());
    PathBuf::from(name)
}
