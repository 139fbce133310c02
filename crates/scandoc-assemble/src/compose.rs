//! Page composition geometry
//!
//! Computes where a capture lands on its page. Pure functions, no side
//! effects; the writer consumes the resulting [`Placement`] verbatim.

use crate::types::{AssembleError, Placement, PlacementPolicy, Result};

/// Compute the placement of an image on a page.
///
/// `scale = min(page_w / width, page_h / height)` — the largest uniform
/// scale at which the whole image fits the page, preserving aspect ratio
/// exactly. Small captures are upscaled; there is no maximum-scale clamp.
///
/// Fails with [`AssembleError::InvalidDimensions`] when either dimension
/// is zero.
pub fn compose(
    width_px: u32,
    height_px: u32,
    page_width_pt: f32,
    page_height_pt: f32,
    policy: PlacementPolicy,
) -> Result<Placement> {
    if width_px == 0 || height_px == 0 {
        return Err(AssembleError::InvalidDimensions {
            width: width_px,
            height: height_px,
        });
    }

    let scale_w = page_width_pt / width_px as f32;
    let scale_h = page_height_pt / height_px as f32;
    let scale = scale_w.min(scale_h);

    let placed_w = width_px as f32 * scale;
    let placed_h = height_px as f32 * scale;

    let (x_pt, y_pt) = match policy {
        PlacementPolicy::Centered => (
            (page_width_pt - placed_w) / 2.0,
            (page_height_pt - placed_h) / 2.0,
        ),
        PlacementPolicy::Origin => (0.0, 0.0),
    };

    Ok(Placement { scale, x_pt, y_pt })
}

/// Placed width and height of an image under a placement, in points.
pub fn placed_size(width_px: u32, height_px: u32, placement: &Placement) -> (f32, f32) {
    (
        width_px as f32 * placement.scale,
        height_px as f32 * placement.scale,
    )
}
