//! Processing module for post-recording transformations
//!
//! Pure, synchronous functions over immutable recorded data: autozoom
//! region synthesis and cursor interpolation, applied identically during
//! playback and export.

pub mod autozoom;
pub mod interpolate;

pub use autozoom::{
    generate_zoom_regions_from_clicks, merge_nearby_clicks, screen_to_normalized_focus,
    MergedClick,
};
pub use interpolate::{interpolate_cursor, NormalizedPosition};
