//! Storage Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A storage error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The destination string could not be parsed into a bucket (and
    /// optional prefix). Surfaced before any I/O happens.
    #[display("invalid destination: {_0}")]
    InvalidDestination(#[error(not(source))] String),
    /// The store did not acknowledge a write. Carries the full response
    /// detail for operator diagnosis; covers rejected, network, and
    /// authentication failures alike.
    #[display("upload of `{key}` failed: {detail}")]
    Upload { key: String, detail: String },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}
