//! Destination key derivation.

/// Derives the destination object key for one local file.
///
/// Strips `source_root` from `file_path` as a literal string prefix,
/// collapses any doubled separator the strip leaves behind, prepends
/// `prefix` verbatim (the stripped remainder's leading `/` becomes the
/// joiner), and finally strips a leading `/` — object keys never start
/// with one.
///
/// Pure and total for any `file_path` that is a descendant of
/// `source_root`; the scanner guarantees that is the only input this ever
/// sees. Behaviour for non-descendants is undefined.
///
/// # Examples
///
/// ```
/// use sitepush_mirror::derive_key;
///
/// assert_eq!(derive_key("/site", "assets", "/site/css/a.css"), "assets/css/a.css");
/// assert_eq!(derive_key("/site", "", "/site/css/a.css"), "css/a.css");
/// ```
pub fn derive_key(source_root: &str, prefix: &str, file_path: &str) -> String {
    let rest = file_path.strip_prefix(source_root).unwrap_or(file_path);
    let rest = rest.replace("//", "/");
    let key = format!("{prefix}{rest}");
    key.trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/site", "assets", "/site/css/a.css", "assets/css/a.css")]
    #[case("/site", "", "/site/css/a.css", "css/a.css")]
    #[case("/site", "deep/prefix", "/site/index.html", "deep/prefix/index.html")]
    #[case("dist", "", "dist/app.js", "app.js")]
    #[case("/site", "", "/site/a/b/c.txt", "a/b/c.txt")]
    fn test_derive_key(
        #[case] source_root: &str,
        #[case] prefix: &str,
        #[case] file_path: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(derive_key(source_root, prefix, file_path), expected);
    }

    #[test]
    fn test_collapses_doubled_separator() {
        assert_eq!(derive_key("/site/", "", "/site//css/a.css"), "css/a.css");
    }
}
