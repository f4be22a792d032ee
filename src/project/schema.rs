//! Project schema types shared with the editor and persisted to disk
//!
//! `RecordingMetadata` is the wire format: one JSON document per recording,
//! stored alongside the captured video. Field names are camelCase to match
//! the editor's serialization; `version` gates forward compatibility.

use crate::capture::input::types::{ClickEvent, CursorPosition};
use serde::{Deserialize, Serialize};

/// Current metadata document version.
pub const METADATA_VERSION: u32 = 1;

/// Immutable snapshot of one recording session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingMetadata {
    pub version: u32,
    /// Wall-clock session start, epoch milliseconds.
    pub recording_start_ms: i64,
    pub clicks: Vec<ClickEvent>,
    /// Recordings made before cursor tracking existed have no such field;
    /// treat it as an empty capture rather than a parse error.
    #[serde(default)]
    pub cursor_positions: Vec<CursorPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl RecordingMetadata {
    /// Zero-valued snapshot returned when no capture took place.
    pub fn empty() -> Self {
        Self {
            version: METADATA_VERSION,
            recording_start_ms: 0,
            clicks: Vec::new(),
            cursor_positions: Vec::new(),
            source_id: None,
            source_name: None,
        }
    }
}

/// Zoom magnitude tier applied by the editor while a region is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDepth {
    Subtle,
    Medium,
    Deep,
}

impl ZoomDepth {
    /// Viewport scale factor at full zoom.
    pub fn magnification(self) -> f64 {
        match self {
            ZoomDepth::Subtle => 1.5,
            ZoomDepth::Medium => 2.0,
            ZoomDepth::Deep => 2.5,
        }
    }
}

/// Zoom focal point as fractions of the recorded display size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomFocus {
    pub cx: f64,
    pub cy: f64,
}

/// A time interval of the output video rendered with a magnified,
/// focus-centered view. Regions never overlap each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomRegion {
    pub id: String,
    pub start_ms: u64,
    pub end_ms: u64,
    pub depth: ZoomDepth,
    pub focus: ZoomFocus,
}

/// Autozoom synthesis configuration. All durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutozoomSettings {
    /// How early a zoom begins before the click it was derived from.
    pub lead_time: u64,
    /// How long the zoom holds after the click.
    pub hold_time: u64,
    /// Total budget for one zoom including lead, hold and both fades.
    pub zoom_duration: u64,
    pub default_depth: ZoomDepth,
    /// Clicks closer together than this collapse into one zoom target.
    pub merge_threshold: u64,
    pub ignore_right_clicks: bool,
}

impl Default for AutozoomSettings {
    fn default() -> Self {
        Self {
            lead_time: 500,
            hold_time: 1500,
            zoom_duration: 3000,
            default_depth: ZoomDepth::Medium,
            merge_threshold: 1000,
            ignore_right_clicks: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cursor_positions_is_empty() {
        let json = r#"{
            "version": 1,
            "recordingStartMs": 1700000000000,
            "clicks": [],
            "sourceId": "screen:0"
        }"#;

        let metadata: RecordingMetadata = serde_json::from_str(json).unwrap();
        assert!(metadata.cursor_positions.is_empty());
        assert_eq!(metadata.source_id.as_deref(), Some("screen:0"));
        assert_eq!(metadata.source_name, None);
    }

    #[test]
    fn test_metadata_field_names_are_camel_case() {
        let metadata = RecordingMetadata::empty();
        let json = serde_json::to_value(&metadata).unwrap();

        assert!(json.get("recordingStartMs").is_some());
        assert!(json.get("cursorPositions").is_some());
        // Absent sources are omitted entirely, matching older documents.
        assert!(json.get("sourceId").is_none());
    }

    #[test]
    fn test_zoom_depth_serialization() {
        assert_eq!(
            serde_json::to_string(&ZoomDepth::Medium).unwrap(),
            "\"medium\""
        );
        assert!(ZoomDepth::Subtle.magnification() < ZoomDepth::Deep.magnification());
    }

    #[test]
    fn test_default_settings() {
        let settings = AutozoomSettings::default();
        assert_eq!(settings.lead_time, 500);
        assert_eq!(settings.hold_time, 1500);
        assert_eq!(settings.zoom_duration, 3000);
        assert_eq!(settings.merge_threshold, 1000);
        assert_eq!(settings.default_depth, ZoomDepth::Medium);
        assert!(settings.ignore_right_clicks);
    }
}
