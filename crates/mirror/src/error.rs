//! Mirror Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A mirror error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for mirror operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies the origin of a pipeline failure.
///
/// Each variant identifies the stage that failed, allowing callers to
/// inspect the error tree without matching on opaque strings. Any of these
/// aborts the whole run: the design prefers fail-fast over a partial,
/// inconsistent mirror.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Walking the source directory failed.
    #[display("failed to walk the source directory")]
    Scan,
    /// Producing a file's compressed siblings failed; continuing would
    /// publish pages that reference artifacts which don't exist.
    #[display("failed to produce compressed siblings")]
    Compression,
    /// A planned file could not be read back for upload.
    #[display("failed to read a planned file")]
    Filesystem,
    /// The object store did not acknowledge a write.
    #[display("object store rejected an upload")]
    Upload,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Upload)
    }
}
