//! Extension → MIME type resolution.

use crate::consts::MIME_BY_EXTENSION;

/// Content type reported when the extension is unknown or missing.
pub const DEFAULT_CONTENT_TYPE: &str = "binary/octet-stream";

/// Resolves a filename to its MIME type.
///
/// The candidate extension is the last `.`-separated segment. When that
/// segment is `gz` or `br` and the *second-to-last* segment is itself a known
/// extension, the inner segment wins — a compressed sibling keeps the MIME
/// type of the file it was derived from (`app.js.gz` → `text/javascript`,
/// not `application/gzip`). A bare `archive.gz` still resolves to
/// `application/gzip`.
///
/// Total and deterministic: unknown extensions yield
/// [`DEFAULT_CONTENT_TYPE`]. Lookup is case-sensitive against the lowercase
/// table, so mixed-case extensions (`logo.PNG`) fall through to the default.
///
/// # Examples
///
/// ```
/// use sitepush_classify::content_type;
///
/// assert_eq!(content_type("index.html"), "text/html");
/// assert_eq!(content_type("app.js.gz"), content_type("app.js"));
/// assert_eq!(content_type("mystery.blob"), "binary/octet-stream");
/// ```
pub fn content_type(filename: &str) -> &'static str {
    let mut segments = filename.rsplit('.');
    let last = segments.next().unwrap_or(filename);
    let candidate = match last {
        "gz" | "br" => match segments.next() {
            Some(inner) if MIME_BY_EXTENSION.contains_key(inner) => inner,
            _ => last,
        },
        _ => last,
    };
    MIME_BY_EXTENSION.get(candidate).copied().unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("index.html", "text/html")]
    #[case("style.css", "text/css")]
    #[case("app.js", "text/javascript")]
    #[case("logo.png", "image/png")]
    #[case("font.woff2", "font/woff2")]
    #[case("data.json", "application/json")]
    #[case("bundle.js.map", "application/json")]
    #[case("notes.md", "text/markdown")]
    #[case("clip.ts", "video/mp2t")]
    fn test_known_extensions(#[case] filename: &str, #[case] expected: &str) {
        assert_eq!(content_type(filename), expected);
    }

    #[rstest]
    #[case("mystery.blob")]
    #[case("README")]
    #[case("")]
    // Case-sensitive on purpose; mixed-case extensions are unclassified.
    #[case("logo.PNG")]
    #[case("INDEX.HTML")]
    fn test_unknown_extensions(#[case] filename: &str) {
        assert_eq!(content_type(filename), DEFAULT_CONTENT_TYPE);
    }

    #[rstest]
    #[case("app.js.gz", "app.js")]
    #[case("app.js.br", "app.js")]
    #[case("style.css.gz", "style.css")]
    #[case("index.html.br", "index.html")]
    #[case("data.json.gz", "data.json")]
    fn test_compressed_sibling_passthrough(#[case] sibling: &str, #[case] original: &str) {
        assert_eq!(content_type(sibling), content_type(original));
    }

    #[rstest]
    // No known inner extension: the compression extension classifies itself.
    #[case("archive.gz", "application/gzip")]
    #[case("archive.br", "application/x-br")]
    #[case("mystery.blob.gz", "application/gzip")]
    fn test_bare_compression_extensions(#[case] filename: &str, #[case] expected: &str) {
        assert_eq!(content_type(filename), expected);
    }

    #[test]
    fn test_full_paths_resolve_like_filenames() {
        assert_eq!(content_type("dist/assets/app.js"), "text/javascript");
        assert_eq!(content_type("/abs/path/to/photo.jpeg"), "image/jpeg");
    }
}
