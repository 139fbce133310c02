use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::constants::{DEFAULT_PAGE_HEIGHT_PT, DEFAULT_PAGE_WIDTH_PT, mm_to_pt};

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("no images to assemble")]
    EmptyInput,
    #[error("failed to read capture '{id}': {source}")]
    ImageRead {
        id: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode capture '{id}': {reason}")]
    ImageDecode { id: String, reason: String },
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("failed to write document: {0}")]
    Write(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("assembly cancelled")]
    Cancelled,
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AssembleError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for scanned documents)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard page sizes, in PDF points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PageSize {
    /// Custom page size given in millimeters
    pub fn custom_mm(width_mm: f32, height_mm: f32) -> Self {
        PageSize::Custom {
            width_pt: mm_to_pt(width_mm),
            height_pt: mm_to_pt(height_mm),
        }
    }

    /// Get base dimensions in points (always portrait: width < height for standard sizes)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT),
            PageSize::A5 => (420.0, 595.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Where a scaled image lands on its page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementPolicy {
    /// Center the scaled image on the page (matches visual expectations
    /// for a scanned-document tool)
    #[default]
    Centered,
    /// Place the scaled image at the page origin (bottom-left in PDF space)
    Origin,
}

/// Computed position of one scaled image on one page.
///
/// Produced by [`compose`](crate::compose); the scale is derived from the
/// image and page dimensions and is always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Uniform scale factor applied to both axes
    pub scale: f32,
    /// Horizontal offset of the placed image, in points
    pub x_pt: f32,
    /// Vertical offset of the placed image, in points
    pub y_pt: f32,
}

/// Where a capture's encoded bytes live
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Encoded bytes already in memory (e.g. handed over by the camera layer)
    Bytes(Vec<u8>),
    /// Encoded bytes on disk, read lazily during assembly
    File(PathBuf),
}

/// One captured photograph, immutable once created.
///
/// Intrinsic pixel dimensions are not carried here; the pipeline probes the
/// encoded header itself so a collaborator cannot declare dimensions that
/// disagree with the bytes.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// Stable identifier, used in error messages
    pub id: String,
    /// Encoded image data
    pub source: ImageSource,
    /// Position in capture order, assigned by the store on append
    pub sequence: u64,
}

impl CapturedImage {
    pub fn new(id: impl Into<String>, source: ImageSource, sequence: u64) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            source,
            sequence,
        })
    }
}
