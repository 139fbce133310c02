//! Ordered collection of captured images
//!
//! The capture layer appends completed captures here; the pipeline takes a
//! snapshot at invocation start and iterates that, so the store may keep
//! growing while an assembly is in flight. Captures appended after the
//! snapshot was taken land in the next document.

use std::sync::{Arc, Mutex};

use crate::types::{CapturedImage, ImageSource};

/// Append-only store of captured images in capture order.
///
/// Sequence numbers are assigned on append and never reused; there is no
/// reorder or remove operation.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: Mutex<Vec<Arc<CapturedImage>>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a capture at the end of the collection, returning its
    /// assigned sequence number.
    pub fn append(&self, id: impl Into<String>, source: ImageSource) -> u64 {
        let mut images = self.images.lock().expect("image store lock poisoned");
        // Sequence assignment and push happen under the same lock so the
        // stored order always matches sequence order.
        let sequence = images.len() as u64;
        images.push(CapturedImage::new(id, source, sequence));
        sequence
    }

    /// Take an immutable, independently iterable copy of the current
    /// collection for handoff to the pipeline.
    pub fn snapshot(&self) -> Vec<Arc<CapturedImage>> {
        self.images
            .lock()
            .expect("image store lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.images.lock().expect("image store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
