//! Command-line glue.
//!
//! Everything with decision logic lives in the `sitepush-*` crates; this
//! module only parses arguments, wires up the store, and prints what the
//! pipeline reports.

use clap::Parser;
use futures::StreamExt;
use sitepush_mirror::{MirrorEvent, MirrorJob, mirror};
use sitepush_storage::store::S3Store;
use sitepush_storage::{Destination, StoreHandle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Copy a local directory to an object-storage bucket with inferred
/// content types and cache policies.
#[derive(Parser)]
#[clap(name = "sitepush", version)]
pub struct Cli {
    /// Compress eligible files into brotli and gzip siblings before upload
    #[clap(short, long)]
    pub compress: bool,
    /// Source directory
    pub source: PathBuf,
    /// Destination url: [s3://]bucket[/prefix]
    pub destination: String,
}

pub async fn run(cli: Cli) -> ExitCode {
    let destination = match Destination::parse(&cli.destination) {
        Ok(destination) => destination,
        Err(e) => {
            tracing::error!(error = ?e, "invalid destination");
            return ExitCode::FAILURE;
        },
    };
    let store: StoreHandle = Arc::new(S3Store::from_env(destination.bucket()).await);
    let job = MirrorJob::new(cli.source, destination, cli.compress);

    let mut stream = std::pin::pin!(mirror(&store, &job));
    while let Some(event) = stream.next().await {
        match event {
            Ok(MirrorEvent::Started) => {},
            Ok(MirrorEvent::ScanComplete(count)) => {
                tracing::info!(count, source = %job.source.display(), "scanned source directory");
            },
            Ok(MirrorEvent::Compressed { path }) => {
                tracing::debug!(path = %path.display(), "compressed");
            },
            Ok(MirrorEvent::CompressionComplete(count)) => {
                tracing::info!(count, "compression complete");
            },
            Ok(MirrorEvent::Uploaded(receipt)) => {
                println!(
                    "upload: {} -> {}/{}, Content-Type={}, Cache-Control={}",
                    receipt.path.display(),
                    job.destination.bucket(),
                    receipt.key,
                    receipt.content_type,
                    receipt.cache_control,
                );
            },
            Ok(MirrorEvent::Complete(summary)) => {
                tracing::info!(
                    uploaded = summary.uploaded,
                    compressed = summary.compressed,
                    "mirror complete"
                );
            },
            Err(e) => {
                tracing::error!(error = ?e, "mirror aborted");
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}
