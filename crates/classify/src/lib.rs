//! Filename classification for upload metadata.
//!
//! Everything in this crate is a pure function over the filename (and, for
//! cache policy, the already-derived content type): no I/O, no async, no
//! mutable state. The lookup tables are fixed at compile time and
//! materialized once on first use.
//!
//! - [`content_type`] — extension → MIME lookup, with passthrough for
//!   `.gz`/`.br` compressed siblings (`app.js.gz` reports the MIME of `js`)
//! - [`is_compressible`] — whether a file is worth pre-compressing
//! - [`contains_hash_suffix`] — detects build-pipeline content hashes
//!   embedded in filenames (`main.a1b2c3d4.js`)
//! - [`cache_control`] — maps the above into one of three HTTP cache
//!   directives

mod cache;
mod compressible;
mod consts;
mod mime;

pub use crate::cache::{CACHE_FOREVER, CACHE_MEDIA, CACHE_NONE, cache_control, contains_hash_suffix};
pub use crate::compressible::is_compressible;
pub use crate::mime::{DEFAULT_CONTENT_TYPE, content_type};
