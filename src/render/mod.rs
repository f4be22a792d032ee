//! Cursor rendering for preview and export
//!
//! Both targets consume the shared interpolator and the shared glyph; only
//! the output surface differs.

pub mod canvas;
pub mod glyph;
pub mod overlay;

pub use canvas::render_cursor;
pub use glyph::{pointer_glyph, RenderedGlyph, GLYPH_SIZE};
pub use overlay::{place_cursor, OverlayPlacement, VideoBounds};
