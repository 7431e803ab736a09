//! Compression Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A compression error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for compression operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Data is corrupt or malformed. Don't retry with the same input.
    #[display("invalid or corrupted data")]
    InvalidData,
    /// An in-memory encode/decode operation failed.
    #[display("I/O error")]
    Io,
    /// The source file could not be read. A run missing this file's
    /// artifacts must not proceed.
    #[display("failed to read source file: {}", _0.display())]
    ReadSource(#[error(not(source))] PathBuf),
    /// A compressed sibling could not be written (disk full, permissions).
    #[display("failed to write artifact: {}", _0.display())]
    WriteArtifact(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Io | ErrorKind::ReadSource(_) | ErrorKind::WriteArtifact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exn::ResultExt;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::InvalidData.to_string(), "invalid or corrupted data");
        assert_eq!(ErrorKind::Io.to_string(), "I/O error");
        assert_eq!(
            ErrorKind::ReadSource(PathBuf::from("a/b.json")).to_string(),
            "failed to read source file: a/b.json"
        );
    }

    #[test]
    fn error_kind_retryable() {
        assert!(!ErrorKind::InvalidData.is_retryable());
        assert!(ErrorKind::Io.is_retryable());
        assert!(ErrorKind::WriteArtifact(PathBuf::from("x.gz")).is_retryable());
    }

    #[test]
    fn error_from_result() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));

        let err: Result<()> = result.or_raise(|| ErrorKind::Io);
        assert!(err.is_err());

        let exn = err.unwrap_err();
        // Exn<E> implements Deref<Target = E>
        assert!(matches!(&*exn, ErrorKind::Io));
    }
}
