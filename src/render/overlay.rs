//! Live preview overlay placement
//!
//! The editor UI positions an absolutely-placed glyph layer over the video
//! element; this module only computes where. The interpolation itself is
//! shared with the export path.

use crate::capture::input::types::CursorPosition;
use crate::processing::interpolate::interpolate_cursor;
use crate::render::glyph::GLYPH_SIZE;
use serde::Serialize;

/// Video content area within the surrounding editor layer, in layer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the UI layer should draw the glyph, tip anchored at `(left, top)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPlacement {
    pub left: f64,
    pub top: f64,
    /// Glyph size in layer pixels; matches the export scale.
    pub size: u32,
}

/// Compute the overlay glyph placement for `time_ms`.
///
/// Returns `None` while the video bounds are degenerate (layout not settled
/// yet) or no cursor position can be resolved.
pub fn place_cursor(
    positions: &[CursorPosition],
    time_ms: f64,
    bounds: &VideoBounds,
    offset_x: f64,
    offset_y: f64,
) -> Option<OverlayPlacement> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }

    let position = interpolate_cursor(positions, time_ms)?;

    Some(OverlayPlacement {
        left: bounds.x + position.x * bounds.width + offset_x,
        top: bounds.y + position.y * bounds.height + offset_y,
        size: GLYPH_SIZE,
    })
}
