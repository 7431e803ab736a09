//! Pre-compression eligibility.

use crate::consts::{COMPRESSIBLE_MIME_TYPES, MIME_BY_EXTENSION, NON_TEXT_COMPRESSIBLE_EXTENSIONS};
use crate::mime::content_type;

/// Decides whether a file should be pre-compressed.
///
/// A file is compressible when:
///
/// - its raw (last) extension maps to a `text/*` MIME type, or
/// - its raw extension is one of the non-text always-compress extensions
///   (`json`, `map`, `svg`, `ico`, `yaml`, `yml`, `xml`), or
/// - its resolved MIME type is in the compressible set AND its raw extension
///   is not already `gz` or `br`.
///
/// The extension guard in the last clause is what keeps `app.js.gz` from
/// being compressed a second time, even though [`content_type`] deliberately
/// reports it as `text/javascript` for upload metadata.
///
/// # Examples
///
/// ```
/// use sitepush_classify::is_compressible;
///
/// assert!(is_compressible("data.json"));
/// assert!(!is_compressible("data.json.gz"));
/// assert!(!is_compressible("photo.png"));
/// ```
pub fn is_compressible(filename: &str) -> bool {
    let extension = filename.rsplit('.').next().unwrap_or(filename);
    if NON_TEXT_COMPRESSIBLE_EXTENSIONS.contains(&extension) {
        return true;
    }
    if MIME_BY_EXTENSION.get(extension).is_some_and(|mime| mime.starts_with("text")) {
        return true;
    }
    COMPRESSIBLE_MIME_TYPES.contains(content_type(filename)) && extension != "gz" && extension != "br"
}
