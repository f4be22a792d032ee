//! Pointer glyph shared by the live overlay and the export compositor
//!
//! A single embedded SVG (classic arrow, tip at the origin, dark fill with
//! a light outline for contrast against arbitrary backgrounds) rasterized
//! with resvg. Both renderers draw this exact geometry, so preview and
//! export stay visually indistinguishable.

use parking_lot::Mutex as ParkingMutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Design size of the pointer glyph in pixels at 1x scale.
pub const GLYPH_SIZE: u32 = 24;

const POINTER_SVG: &str = include_str!("assets/pointer.svg");

/// Rasterized pointer glyph.
#[derive(Debug, Clone)]
pub struct RenderedGlyph {
    pub width: u32,
    pub height: u32,
    /// Premultiplied RGBA pixels, row-major.
    pub data: Vec<u8>,
}

static GLYPH_CACHE: OnceLock<ParkingMutex<HashMap<u32, Arc<RenderedGlyph>>>> = OnceLock::new();

/// Rasterize the pointer glyph at `size_px` pixels.
///
/// Rasterizations are cached per size; export draws one frame after another
/// at the same scale and must not re-parse the SVG each time.
pub fn pointer_glyph(size_px: u32) -> Option<Arc<RenderedGlyph>> {
    let size_px = size_px.max(1);
    let cache = GLYPH_CACHE.get_or_init(|| ParkingMutex::new(HashMap::new()));

    if let Some(glyph) = cache.lock().get(&size_px) {
        return Some(glyph.clone());
    }

    let glyph = Arc::new(rasterize(size_px)?);
    cache.lock().insert(size_px, glyph.clone());
    Some(glyph)
}

fn rasterize(size_px: u32) -> Option<RenderedGlyph> {
    let opts = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_str(POINTER_SVG, &opts).ok()?;

    let size = tree.size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size_px, size_px)?;
    let transform = resvg::tiny_skia::Transform::from_scale(
        size_px as f32 / size.width(),
        size_px as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // Keep premultiplied alpha for compositing.
    let mut data = Vec::with_capacity((size_px * size_px * 4) as usize);
    for pixel in pixmap.pixels() {
        data.extend_from_slice(&[pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()]);
    }

    Some(RenderedGlyph {
        width: size_px,
        height: size_px,
        data,
    })
}
