//! ScreenLoupe - pointer capture, autozoom and cursor overlay engine.
//!
//! Records pointer activity during a screen recording and derives automatic
//! zoom regions and a smooth cursor overlay from it. The embedding editor
//! supplies the native input hook, display enumeration and rendering
//! surfaces; this crate owns the session state machine, the zoom synthesis
//! and the interpolation both renderers share.

pub mod capture;
pub mod processing;
pub mod project;
pub mod render;

pub use capture::input::{ClickEvent, CursorPosition, MouseButton};
pub use capture::{DisplayBounds, DisplayLocator, HookError, InputHook, InputSink, RecordingSession};
pub use processing::{generate_zoom_regions_from_clicks, interpolate_cursor, NormalizedPosition};
pub use project::{
    AutozoomSettings, JsonFileStore, MetadataStore, RecordingMetadata, ZoomDepth, ZoomFocus,
    ZoomRegion,
};
pub use render::{place_cursor, render_cursor, OverlayPlacement, VideoBounds};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for embedding applications that have no subscriber of
/// their own.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screenloupe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
