//! Shared constants for document assembly
//!
//! This module centralizes unit conversions and default page geometry
//! used throughout the assembly process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (A4 portrait)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 595.0;

/// Default page height in points (A4 portrait)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 842.0;

// =============================================================================
// Container
// =============================================================================

/// PDF version written into the output header
pub const PDF_VERSION: &str = "1.7";

/// Bits per component for embedded captures (baseline JPEG)
pub const JPEG_BITS_PER_COMPONENT: i64 = 8;
