//! Assembly pipeline
//!
//! Orchestrates one document build: validate the snapshot, open a writer,
//! then per capture read → probe → compose → add page, strictly in capture
//! order. Fail-fast: the first error aborts the whole assembly and the
//! writer's temp file is discarded, leaving the output path untouched.
//!
//! One invocation is one sequential blocking unit; the async entry points
//! move it onto the blocking pool so callers never block an interactive
//! thread. The core holds no cross-invocation lock: callers must not run
//! two assemblies against the same output path concurrently.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::compose::compose;
use crate::options::AssembleOptions;
use crate::probe::probe;
use crate::types::{AssembleError, CapturedImage, ImageSource, Result};
use crate::writer::DocumentWriter;

/// Shared flag for requesting early termination of an in-flight assembly.
///
/// Checked between per-image iterations; cancellation applies the same
/// cleanup contract as failure (no partial file at the output path).
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request termination before the next per-image iteration.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Assemble the captures into a PDF at `output_path`.
///
/// Returns the output path on success. With empty input, fails with
/// [`AssembleError::EmptyInput`] before touching the filesystem.
pub async fn assemble(
    images: Vec<Arc<CapturedImage>>,
    options: &AssembleOptions,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    assemble_with(images, options, output_path, CancelFlag::new()).await
}

/// Like [`assemble`], but checks `cancel` between per-image iterations.
pub async fn assemble_with(
    images: Vec<Arc<CapturedImage>>,
    options: &AssembleOptions,
    output_path: impl AsRef<Path>,
    cancel: CancelFlag,
) -> Result<PathBuf> {
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    tokio::task::spawn_blocking(move || assemble_sync(&images, &options, &output_path, &cancel))
        .await?
}

fn assemble_sync(
    images: &[Arc<CapturedImage>],
    options: &AssembleOptions,
    output_path: &Path,
    cancel: &CancelFlag,
) -> Result<PathBuf> {
    if images.is_empty() {
        return Err(AssembleError::EmptyInput);
    }

    let (page_w, page_h) = options.page_dimensions_pt();
    info!(
        captures = images.len(),
        page_w,
        page_h,
        path = %output_path.display(),
        "assembling document"
    );

    let mut writer = DocumentWriter::create(output_path, page_w, page_h, options.title.clone())?;

    for image in images {
        if cancel.is_cancelled() {
            debug!(pages_done = writer.page_count(), "assembly cancelled");
            return Err(AssembleError::Cancelled);
        }

        let bytes = read_source(image)?;
        let probe_info = probe(&image.id, &bytes)?;
        let placement = compose(
            probe_info.width,
            probe_info.height,
            page_w,
            page_h,
            options.placement,
        )?;
        writer.add_page(bytes, &probe_info, &placement)?;
    }

    let path = writer.finalize()?;
    info!(pages = images.len(), path = %path.display(), "document written");
    Ok(path)
}

fn read_source(image: &CapturedImage) -> Result<Vec<u8>> {
    match &image.source {
        ImageSource::Bytes(bytes) => Ok(bytes.clone()),
        ImageSource::File(path) => {
            std::fs::read(path).map_err(|source| AssembleError::ImageRead {
                id: image.id.clone(),
                source,
            })
        }
    }
}
