//! Native input-hook boundary
//!
//! The OS-level hook that delivers global mouse events lives outside this
//! crate. It is driven through the `InputHook` trait and reports events by
//! calling into the [`InputSink`] handed to `start`.

use crate::capture::input::session::InputSink;
use thiserror::Error;

/// Errors surfaced by the native input hook.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("failed to start input hook: {0}")]
    StartFailed(String),

    #[error("failed to stop input hook: {0}")]
    StopFailed(String),
}

/// Lifecycle of the OS-level mouse hook.
///
/// `stop` is attempted on every session teardown path, including drop, so a
/// stuck hook never outlives its session.
pub trait InputHook: Send + Sync {
    /// Begin delivering `mouse_down`/`mouse_move` events to the sink.
    fn start(&self, sink: InputSink) -> Result<(), HookError>;

    /// Stop delivering events and release the OS hook.
    fn stop(&self) -> Result<(), HookError>;
}
