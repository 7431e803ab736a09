//! Publish-time asset compression.
//!
//! This crate wraps the two compression libraries used for pre-compressed
//! web assets behind a small [`Compression`] enum, providing:
//!
//! - **In-memory** compression/decompression ([`Compression::compress`],
//!   [`Compression::decompress`])
//! - **Sibling artifacts**: [`write_siblings`] reads an eligible file and
//!   writes `<file>.br` and `<file>.gz` next to it
//!
//! Eligibility is decided by [`sitepush_classify::is_compressible`]; a file
//! already carrying a `.br` or `.gz` suffix is never compressed again.
//!
//! All compression uses the highest available level for each format,
//! prioritizing transfer size over speed — this runs once at publish time.
//! Output is deterministic: compressing the same bytes twice produces
//! byte-identical artifacts.

pub mod error;
mod ops;
mod sibling;
mod util;

pub use crate::sibling::{sibling_path, write_siblings};

/// A supported compression format.
///
/// Defaults to [`None`](Self::None) (uncompressed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Uncompressed
    #[default]
    None,
    /// Brotli compression (.br)
    Brotli,
    /// Gzip compression (.gz)
    Gzip,
}

impl Compression {
    /// The two artifact formats written next to every eligible original.
    pub const ARTIFACTS: [Compression; 2] = [Compression::Brotli, Compression::Gzip];
}

#[cfg(test)]
mod tests {
    use crate::Compression;

    #[test]
    fn compression_default() {
        assert_eq!(Compression::default(), Compression::None);
    }

    #[test]
    fn artifact_formats() {
        assert!(!Compression::ARTIFACTS.contains(&Compression::None));
    }
}
