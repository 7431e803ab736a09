//! Cache-control policy derivation.

use crate::consts::HASH_IN_FILENAME;

/// One year, immutable. For content-addressed filenames and fonts.
pub const CACHE_FOREVER: &str = "max-age=31536000, immutable";
/// Thirty minutes. For media that changes rarely but isn't content-addressed.
pub const CACHE_MEDIA: &str = "max-age=1800";
/// Always revalidate. Everything else, notably entry-point HTML.
pub const CACHE_NONE: &str = "no-cache";

/// Heuristic detection of a build-pipeline content hash in the filename:
/// a `.` or `-`, one or more hex digits, then a `.` before the remainder
/// (`main.a1b2c3d4.js`, `chunk-0dfa12.js`). False negatives are fine —
/// an undetected hash merely fails safe into shorter caching.
pub fn contains_hash_suffix(filename: &str) -> bool {
    HASH_IN_FILENAME.is_match(filename)
}

/// Derives the cache-control directive for a file.
///
/// Hash-in-filename or a `font/` MIME type caches forever (the name changes
/// when the content does); image, video, and audio get half an hour;
/// everything else is `no-cache` so that entry points are always fresh.
///
/// # Examples
///
/// ```
/// use sitepush_classify::{cache_control, CACHE_NONE};
///
/// assert_eq!(cache_control("index.html", "text/html"), CACHE_NONE);
/// ```
pub fn cache_control(filename: &str, content_type: &str) -> &'static str {
    if contains_hash_suffix(filename) || content_type.starts_with("font/") {
        CACHE_FOREVER
    } else if content_type.starts_with("image/")
        || content_type.starts_with("video/")
        || content_type.starts_with("audio/")
    {
        CACHE_MEDIA
    } else {
        CACHE_NONE
    }
}
