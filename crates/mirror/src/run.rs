//! The orchestrator: scan → (compress) → plan → upload.

use crate::MAX_COMPRESS_CONCURRENCY;
use crate::error::{ErrorKind, Result};
use crate::plan::UploadPlan;
use crate::scan::scan;
use crate::upload::{UploadReceipt, upload_file};
use async_stream::stream;
use exn::ResultExt;
use futures::stream::FuturesUnordered;
use futures::{Stream, StreamExt};
use sitepush_storage::{Destination, StoreHandle};
use std::path::PathBuf;

/// One mirroring run: a source tree, a parsed destination, and whether to
/// produce compressed siblings.
#[derive(Debug, Clone)]
pub struct MirrorJob {
    pub source: PathBuf,
    pub destination: Destination,
    pub compress: bool,
}

impl MirrorJob {
    pub fn new(source: impl Into<PathBuf>, destination: Destination, compress: bool) -> Self {
        Self {
            source: source.into(),
            destination,
            compress,
        }
    }
}

/// Totals reported once the run completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Objects acknowledged by the store.
    pub uploaded: u64,
    /// Originals that gained `.br`/`.gz` siblings this run.
    pub compressed: u64,
}

/// Progress events emitted by [`mirror`] as a run moves through its stages.
///
/// Events follow a strict ordering:
/// 1. [`Started`](Self::Started) — exactly once.
/// 2. [`ScanComplete`](Self::ScanComplete) — exactly once, with the
///    total file count.
/// 3. [`Compressed`](Self::Compressed) — zero or more times, one per
///    eligible file, in no particular order; then
///    [`CompressionComplete`](Self::CompressionComplete) — exactly once,
///    but only when compression was requested.
/// 4. [`Uploaded`](Self::Uploaded) — zero or more times, in plan order.
/// 5. [`Complete`](Self::Complete) — exactly once, signalling the stream
///    is finished.
///
/// An error terminates the stream early, in which case
/// [`Complete`](Self::Complete) is never emitted and nothing further is
/// attempted.
pub enum MirrorEvent {
    /// Mirroring has begun; emitted exactly once before any other event.
    Started,
    /// The source walk finished; the total file count is now known.
    ScanComplete(u64),
    /// A file gained its `.br` and `.gz` siblings.
    Compressed { path: PathBuf },
    /// Every compression worker has joined; the artifact set is final.
    CompressionComplete(u64),
    /// One object landed with its metadata attached.
    Uploaded(UploadReceipt),
    /// Every planned object was acknowledged.
    Complete(Summary),
}

/// Streams [`MirrorEvent`]s for one full publish of `job.source` into
/// `job.destination`.
///
/// Compression fans out over blocking workers, at most
/// `MAX_COMPRESS_CONCURRENCY` in flight, with a hard join barrier before
/// planning — the plan needs the complete artifact list, and a failed
/// worker aborts the run before anything is uploaded. Uploads then run
/// strictly sequentially in plan order; that ordering is the index-last
/// correctness requirement, not a performance choice. The first failure
/// anywhere ends the stream; there is no checkpoint or resume.
pub fn mirror<'a>(store: &'a StoreHandle, job: &'a MirrorJob) -> impl Stream<Item = Result<MirrorEvent>> + 'a {
    // `rustfmt` does not format macros that use braces. Wrap in parentheses!
    stream!({
        yield Ok(MirrorEvent::Started);

        let scanned = match scan(&job.source).await {
            Ok(files) => files,
            Err(e) => {
                yield Err(e);
                return;
            },
        };
        // Infallible: a usize (either 32- or 64-bit) will always fit in a u64.
        yield Ok(MirrorEvent::ScanComplete(u64::try_from(scanned.len()).unwrap_or(0)));

        let mut compressed = Vec::new();
        if job.compress {
            let mut queue: Vec<_> = scanned.iter().cloned().map(compress_one).collect();
            let mut processing = FuturesUnordered::new();
            processing.extend(queue.drain(..MAX_COMPRESS_CONCURRENCY.min(queue.len())));
            while let Some(result) = processing.next().await {
                match result {
                    Ok(Some(path)) => {
                        compressed.push(path.clone());
                        yield Ok(MirrorEvent::Compressed { path });
                    },
                    Ok(None) => {},
                    Err(e) => {
                        yield Err(e);
                        return;
                    },
                }
                // Pop-n-push, but FIFO instead of LIFO.
                if !queue.is_empty() {
                    processing.push(queue.remove(0));
                }
            }
            yield Ok(MirrorEvent::CompressionComplete(u64::try_from(compressed.len()).unwrap_or(0)));
        }

        let plan = UploadPlan::build(scanned, &compressed);
        let source_root = job.source.to_string_lossy().trim_end_matches('/').to_string();
        let mut summary = Summary {
            uploaded: 0,
            compressed: u64::try_from(compressed.len()).unwrap_or(0),
        };
        for path in plan {
            match upload_file(store, &source_root, job.destination.prefix(), &path).await {
                Ok(receipt) => {
                    summary.uploaded += 1;
                    yield Ok(MirrorEvent::Uploaded(receipt));
                },
                Err(e) => {
                    yield Err(e);
                    return;
                },
            }
        }

        yield Ok(MirrorEvent::Complete(summary));
    })
}

/// Compress one file's siblings on the blocking pool.
async fn compress_one(path: PathBuf) -> Result<Option<PathBuf>> {
    tokio::task::spawn_blocking(move || sitepush_compress::write_siblings(&path))
        .await
        .or_raise(|| ErrorKind::Compression)?
        .or_raise(|| ErrorKind::Compression)
}
