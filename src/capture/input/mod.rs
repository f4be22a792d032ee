//! Pointer input capture
//!
//! Raw click and move events from the native hook are buffered and
//! normalized here into the session-relative, display-relative samples the
//! editor consumes.

pub mod session;
pub mod types;

pub use session::{InputSink, RecordingSession, CURSOR_SAMPLE_INTERVAL};
pub use types::{ClickEvent, CursorPosition, MouseButton};
