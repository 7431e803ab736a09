use crate::Compression;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

impl Display for Compression {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Compression {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl Compression {
    /// Returns the file extension for this compression format.
    #[inline]
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Compression::None => "",
            Compression::Brotli => ".br",
            Compression::Gzip => ".gz",
        }
    }

    /// Returns the short name for displaying to the user.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Brotli => "brotli",
            Compression::Gzip => "gzip",
        }
    }

    /// Detect compression from a file extension.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| match ext {
                "br" => Compression::Brotli,
                "gz" => Compression::Gzip,
                _ => Compression::None,
            })
            .unwrap_or(Compression::None)
    }
}

#[cfg(test)]
mod tests {
    use crate::Compression;
    use rstest::rstest;

    #[rstest]
    #[case(Compression::None, "")]
    #[case(Compression::Brotli, ".br")]
    #[case(Compression::Gzip, ".gz")]
    fn test_extension(#[case] format: Compression, #[case] expected: &str) {
        assert_eq!(format.extension(), expected);
    }

    #[rstest]
    #[case("file.html", Compression::None)]
    #[case("file.html.br", Compression::Brotli)]
    #[case("file.html.gz", Compression::Gzip)]
    #[case("file.gz", Compression::Gzip)]
    // `.br` is a dotfile with no extension (like `.bashrc`), and therefore
    // with no extension is considered to have no compression.
    #[case(".br", Compression::None)]
    fn test_from_path(#[case] test: &str, #[case] expected: Compression) {
        assert_eq!(Compression::from_path(test), expected);
    }
}
