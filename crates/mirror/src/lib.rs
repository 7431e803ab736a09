//! The upload planning and execution pipeline.
//!
//! [`run::mirror`] drives one full publish: walk the source tree, optionally
//! fan out `.br`/`.gz` sibling compression, build a deduplicated plan that
//! keeps entry-point HTML strictly last, then push every object
//! sequentially with its classified metadata. Every invocation re-uploads
//! the whole tree — this is a full mirror, not an incremental sync.

pub mod error;
mod key;
mod plan;
pub mod run;
mod scan;
mod upload;

pub use crate::key::derive_key;
pub use crate::plan::UploadPlan;
pub use crate::run::{MirrorEvent, MirrorJob, Summary, mirror};
pub use crate::scan::scan;
pub use crate::upload::{UploadReceipt, upload_file};

/// Upper bound on in-flight compression workers. Each worker only touches
/// its own input file and writes two new siblings, so the bound exists to
/// keep the blocking thread pool polite, not for correctness.
pub(crate) const MAX_COMPRESS_CONCURRENCY: usize = 16;
