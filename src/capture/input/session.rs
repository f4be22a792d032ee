//! Recording session state machine
//!
//! Owns the click and cursor-position buffers for one start/stop interval.
//! Clicks are appended synchronously from the hook callback so a stop racing
//! a late click cannot lose it; cursor positions are sampled on a
//! fixed-period thread from the most recent raw move. The sampling is a
//! deliberate lossy downsample that bounds buffer growth regardless of the
//! native move-event rate.

use crate::capture::display::DisplayLocator;
use crate::capture::hook::InputHook;
use crate::capture::input::types::{ClickEvent, CursorPosition, MouseButton};
use crate::project::schema::{RecordingMetadata, METADATA_VERSION};
use parking_lot::Mutex as ParkingMutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cursor sampling period (~30 Hz), balancing data size and smoothness.
pub const CURSOR_SAMPLE_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Clone)]
struct CaptureBuffers {
    clicks: Arc<ParkingMutex<Vec<ClickEvent>>>,
    cursor_positions: Arc<ParkingMutex<Vec<CursorPosition>>>,
    last_raw_position: Arc<ParkingMutex<Option<(i32, i32)>>>,
}

impl CaptureBuffers {
    fn new() -> Self {
        Self {
            clicks: Arc::new(ParkingMutex::new(Vec::new())),
            cursor_positions: Arc::new(ParkingMutex::new(Vec::new())),
            last_raw_position: Arc::new(ParkingMutex::new(None)),
        }
    }
}

/// Callback surface handed to the native input hook.
///
/// Both entry points are cheap and non-blocking: a buffer append or a
/// shared-variable store. Events that arrive outside an active session are
/// ignored.
#[derive(Clone)]
pub struct InputSink {
    is_recording: Arc<AtomicBool>,
    buffers: CaptureBuffers,
    locator: Arc<dyn DisplayLocator>,
    started: Instant,
}

impl InputSink {
    /// Record a mouse-down event, synchronously with its arrival.
    pub fn mouse_down(&self, x: i32, y: i32, button: MouseButton) {
        if !self.is_recording.load(Ordering::SeqCst) {
            return;
        }

        let bounds = self.locator.display_nearest_point(x, y);
        let (rel_x, rel_y) = bounds.to_relative(x, y);

        self.buffers.clicks.lock().push(ClickEvent {
            timestamp_ms: self.started.elapsed().as_millis() as u64,
            x: rel_x,
            y: rel_y,
            screen_width: bounds.width,
            screen_height: bounds.height,
            button,
        });
    }

    /// Track the most recent raw position; the sampler thread records it.
    pub fn mouse_move(&self, x: i32, y: i32) {
        if !self.is_recording.load(Ordering::SeqCst) {
            return;
        }
        *self.buffers.last_raw_position.lock() = Some((x, y));
    }
}

struct ActiveCapture {
    recording_start_ms: i64,
    source_id: Option<String>,
    source_name: Option<String>,
    buffers: CaptureBuffers,
    sampler: Option<std::thread::JoinHandle<()>>,
}

/// Start/stop state machine for one pointer-capture session.
///
/// A session is either `Idle` or `Recording`; the recording flag is the only
/// shared control state and is transitioned exclusively by [`start`] and
/// [`stop`] on the main control flow, never from the sampler thread or the
/// hook callbacks.
///
/// [`start`]: RecordingSession::start
/// [`stop`]: RecordingSession::stop
pub struct RecordingSession {
    hook: Arc<dyn InputHook>,
    locator: Arc<dyn DisplayLocator>,
    sample_interval: Duration,
    is_recording: Arc<AtomicBool>,
    active: Option<ActiveCapture>,
}

impl RecordingSession {
    pub fn new(hook: Arc<dyn InputHook>, locator: Arc<dyn DisplayLocator>) -> Self {
        Self::with_sample_interval(hook, locator, CURSOR_SAMPLE_INTERVAL)
    }

    /// Create a session with a custom cursor sampling period.
    pub fn with_sample_interval(
        hook: Arc<dyn InputHook>,
        locator: Arc<dyn DisplayLocator>,
        sample_interval: Duration,
    ) -> Self {
        Self {
            hook,
            locator,
            sample_interval,
            is_recording: Arc::new(AtomicBool::new(false)),
            active: None,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    /// Begin capturing pointer activity.
    ///
    /// Starting while already recording is a warned no-op. A hook that fails
    /// to start leaves the session idle.
    pub fn start(&mut self, source_id: Option<String>, source_name: Option<String>) {
        if self.is_recording() {
            tracing::warn!("recording session is already active");
            return;
        }

        let buffers = CaptureBuffers::new();
        let started = Instant::now();
        let recording_start_ms = chrono::Utc::now().timestamp_millis();

        self.is_recording.store(true, Ordering::SeqCst);

        let sink = InputSink {
            is_recording: self.is_recording.clone(),
            buffers: buffers.clone(),
            locator: self.locator.clone(),
            started,
        };

        if let Err(err) = self.hook.start(sink) {
            tracing::error!("failed to start input hook: {err}");
            self.is_recording.store(false, Ordering::SeqCst);
            return;
        }

        let sampler = spawn_cursor_sampler(
            self.is_recording.clone(),
            buffers.clone(),
            self.locator.clone(),
            started,
            self.sample_interval,
        );

        self.active = Some(ActiveCapture {
            recording_start_ms,
            source_id,
            source_name,
            buffers,
            sampler: Some(sampler),
        });

        tracing::info!("recording session started");
    }

    /// Stop capturing and snapshot everything recorded so far.
    ///
    /// Stopping while idle is a warned no-op that returns an empty
    /// zero-valued snapshot.
    pub fn stop(&mut self) -> RecordingMetadata {
        if !self.is_recording() {
            tracing::warn!("recording session is not active");
            return RecordingMetadata::empty();
        }

        self.teardown();

        let Some(capture) = self.active.take() else {
            return RecordingMetadata::empty();
        };

        let clicks = std::mem::take(&mut *capture.buffers.clicks.lock());
        let cursor_positions = std::mem::take(&mut *capture.buffers.cursor_positions.lock());

        let metadata = RecordingMetadata {
            version: METADATA_VERSION,
            recording_start_ms: capture.recording_start_ms,
            clicks,
            cursor_positions,
            source_id: capture.source_id,
            source_name: capture.source_name,
        };

        tracing::info!(
            clicks = metadata.clicks.len(),
            cursor_positions = metadata.cursor_positions.len(),
            "recording session stopped"
        );

        metadata
    }

    /// Halt the sampler and release the hook.
    ///
    /// A hook that fails to stop is logged and otherwise ignored: failing to
    /// unsubscribe must not leave the session stuck in `Recording`.
    fn teardown(&mut self) {
        self.is_recording.store(false, Ordering::SeqCst);

        if let Some(capture) = self.active.as_mut() {
            if let Some(handle) = capture.sampler.take() {
                let _ = handle.join();
            }
        }

        if let Err(err) = self.hook.stop() {
            tracing::error!("error stopping input hook: {err}");
        }
    }
}

impl Drop for RecordingSession {
    fn drop(&mut self) {
        if self.is_recording() {
            self.teardown();
        }
    }
}

fn spawn_cursor_sampler(
    is_recording: Arc<AtomicBool>,
    buffers: CaptureBuffers,
    locator: Arc<dyn DisplayLocator>,
    started: Instant,
    interval: Duration,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        while is_recording.load(Ordering::Relaxed) {
            let raw = *buffers.last_raw_position.lock();
            if let Some((x, y)) = raw {
                let bounds = locator.display_nearest_point(x, y);
                let (rel_x, rel_y) = bounds.to_relative(x, y);

                buffers.cursor_positions.lock().push(CursorPosition {
                    timestamp_ms: started.elapsed().as_millis() as u64,
                    x: rel_x,
                    y: rel_y,
                    screen_width: bounds.width,
                    screen_height: bounds.height,
                });
            }
            std::thread::sleep(interval);
        }
    })
}
