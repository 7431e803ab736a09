//! Compression Operations

use crate::Compression;
use crate::error::{ErrorKind, Result};
use brotli::{CompressorWriter as BrotliEncoder, Decompressor as BrotliDecoder};
use exn::ResultExt;
use flate2::{Compression as GzCompression, read::GzDecoder, write::GzEncoder};
use std::io::{Read, Write};
use tracing::instrument;

// Use the highest compression level available for the formats; artifacts are
// produced once at publish time and served many times. These are also what
// keep the output deterministic across runs: no timestamps, fixed levels.
const GZIP_LEVEL: GzCompression = GzCompression::best();
const BROTLI_LEVEL: u32 = 11;
const BROTLI_BUFFER_SIZE: usize = 4096;
const BROTLI_LG_WINDOW_SIZE: u32 = 22;

impl Compression {
    /// Compress a byte slice in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitepush_compress::Compression;
    ///
    /// let data = b"Hello, world! Hello, world! Hello, world!";
    /// let compressed = Compression::Gzip.compress(data).unwrap();
    /// assert!(compressed.len() < data.len() || data.len() < 100);
    /// ```
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.compress_into(input, &mut output)?;
        Ok(output)
    }

    /// Decompress a byte slice in memory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sitepush_compress::Compression;
    ///
    /// let original = b"Hello, world!";
    /// let compressed = Compression::Gzip.compress(original).unwrap();
    /// assert_ne!(compressed, original);
    /// let decompressed = Compression::Gzip.decompress(&compressed).unwrap();
    /// assert_eq!(decompressed, original);
    /// ```
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decompress_into(input, &mut output)?;
        Ok(output)
    }

    #[instrument(skip(input, output), fields(
        format = %self,
        input_size = input.len(),
        output_size
    ))]
    pub fn compress_into(&self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let size = match self {
            Compression::None => {
                output.extend_from_slice(input);
                input.len()
            },
            Compression::Brotli => {
                let mut encoder =
                    BrotliEncoder::new(&mut *output, BROTLI_BUFFER_SIZE, BROTLI_LEVEL, BROTLI_LG_WINDOW_SIZE);
                encoder.write_all(input).or_raise(|| ErrorKind::Io)?;
                // Brotli doesn't have some sort of finish/flush method?!
                drop(encoder);
                output.len()
            },
            Compression::Gzip => {
                let mut encoder = GzEncoder::new(&mut *output, GZIP_LEVEL);
                encoder.write_all(input).or_raise(|| ErrorKind::Io)?;
                encoder.finish().or_raise(|| ErrorKind::Io)?;
                output.len()
            },
        };
        tracing::Span::current().record("output_size", size);
        Ok(size)
    }

    #[instrument(skip(input, output), fields(
        format = %self,
        input_size = input.len(),
        output_size
    ))]
    pub fn decompress_into(&self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let size = match self {
            Compression::None => {
                output.extend_from_slice(input);
                input.len()
            },
            Compression::Brotli => {
                let mut decoder = BrotliDecoder::new(input, BROTLI_BUFFER_SIZE);
                decoder.read_to_end(output).or_raise(|| ErrorKind::InvalidData)?
            },
            Compression::Gzip => {
                let mut decoder = GzDecoder::new(input);
                decoder.read_to_end(output).or_raise(|| ErrorKind::InvalidData)?
            },
        };
        tracing::Span::current().record("output_size", size);
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use crate::Compression;
    use rstest::rstest;

    #[rstest]
    #[case(Compression::None)]
    #[case(Compression::Brotli)]
    #[case(Compression::Gzip)]
    fn test_compress_decompress(#[case] format: Compression) {
        let original = b"Hello, world! This is a test of some compression.";
        let compressed = format.compress(original).unwrap();
        let decompressed = format.decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[rstest]
    #[case(Compression::Gzip)]
    fn test_invalid_compressed_data(#[case] format: Compression) {
        let invalid_data = b"This is not compressed data";
        assert!(format.decompress(invalid_data).is_err());
    }

    #[rstest]
    #[case(Compression::Brotli)]
    #[case(Compression::Gzip)]
    fn test_deterministic_output(#[case] format: Compression) {
        let original = b"the same bytes in, the same bytes out, every single run";
        let first = format.compress(original).unwrap();
        let second = format.compress(original).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let compressed = Compression::Gzip.compress(b"").unwrap();
        let decompressed = Compression::Gzip.decompress(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }
}
