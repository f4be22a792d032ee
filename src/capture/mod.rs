//! Capture-side collaborator interfaces and the recording session
//!
//! The native input hook and the display enumeration service are external;
//! this module defines the traits they plug into plus the session that
//! consumes them.

pub mod display;
pub mod hook;
pub mod input;

pub use display::{DisplayBounds, DisplayLocator};
pub use hook::{HookError, InputHook};
pub use input::{InputSink, RecordingSession};
