//! Photo-to-PDF document assembly
//!
//! Turns an ordered collection of captured photographs into a single
//! multi-page PDF, one page per photograph, each scaled to fit a fixed
//! page size while preserving aspect ratio:
//! 1. The capture layer appends encoded captures to an [`ImageStore`]
//! 2. A pipeline invocation snapshots the store and iterates in order
//! 3. Each capture's header is probed and a fit placement computed
//! 4. Pages accumulate in a [`DocumentWriter`] and persist atomically

pub mod assemble;
mod compose;
pub mod constants;
mod options;
mod probe;
mod store;
mod types;
mod writer;

pub use assemble::{CancelFlag, assemble, assemble_with};
pub use compose::{compose, placed_size};
pub use options::AssembleOptions;
pub use probe::{ColorSpace, ImageInfo, probe};
pub use store::ImageStore;
pub use types::*;
pub use writer::DocumentWriter;
