use serde::{Deserialize, Serialize};

/// Mouse button identity, numbered the way the native hook reports it
/// (1 = left, 2 = right, 3 = middle). Serialized as the raw number so the
/// metadata format matches what the hook produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

impl From<u8> for MouseButton {
    fn from(raw: u8) -> Self {
        match raw {
            1 => MouseButton::Left,
            2 => MouseButton::Right,
            3 => MouseButton::Middle,
            other => MouseButton::Other(other),
        }
    }
}

impl From<MouseButton> for u8 {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 3,
            MouseButton::Other(raw) => raw,
        }
    }
}

/// One recorded mouse click, display-relative and session-relative.
///
/// Coordinates can be negative when an off-screen point was snapped to its
/// nearest display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    /// Milliseconds since recording start.
    pub timestamp_ms: u64,
    pub x: i32,
    pub y: i32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub button: MouseButton,
}

/// One cursor position sample (~30 Hz while recording).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPosition {
    /// Milliseconds since recording start; non-decreasing within a session.
    pub timestamp_ms: u64,
    pub x: i32,
    pub y: i32,
    pub screen_width: u32,
    pub screen_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_wire_format() {
        let click = ClickEvent {
            timestamp_ms: 1200,
            x: 640,
            y: 360,
            screen_width: 1920,
            screen_height: 1080,
            button: MouseButton::Left,
        };

        let json = serde_json::to_value(&click).unwrap();
        assert_eq!(json["timestampMs"], 1200);
        assert_eq!(json["screenWidth"], 1920);
        assert_eq!(json["button"], 1);
    }

    #[test]
    fn test_button_round_trip() {
        for raw in [1u8, 2, 3, 7] {
            let button = MouseButton::from(raw);
            assert_eq!(u8::from(button), raw);
        }
        assert_eq!(MouseButton::from(2), MouseButton::Right);
    }
}
