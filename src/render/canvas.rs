//! Export frame compositing
//!
//! During export the cursor is drawn directly onto each decoded RGBA frame
//! before it is handed to the encoder. Uses the same interpolation and the
//! same glyph as the live overlay.

use crate::capture::input::types::CursorPosition;
use crate::processing::interpolate::interpolate_cursor;
use crate::render::glyph::{pointer_glyph, RenderedGlyph, GLYPH_SIZE};

/// Composite the pointer glyph onto an RGBA frame at the interpolated
/// cursor position for `time_ms`, tip anchored at the mapped point.
///
/// Frames for which no cursor position resolves are left untouched.
pub fn render_cursor(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    positions: &[CursorPosition],
    time_ms: f64,
) {
    if frame_width == 0 || frame_height == 0 {
        return;
    }
    if frame.len() < frame_width as usize * frame_height as usize * 4 {
        tracing::warn!(
            frame_width,
            frame_height,
            len = frame.len(),
            "frame buffer too small for RGBA compositing"
        );
        return;
    }

    let Some(position) = interpolate_cursor(positions, time_ms) else {
        return;
    };
    let Some(glyph) = pointer_glyph(GLYPH_SIZE) else {
        return;
    };

    let tip_x = (position.x * frame_width as f64).round() as i64;
    let tip_y = (position.y * frame_height as f64).round() as i64;

    blend_glyph(frame, frame_width, frame_height, &glyph, tip_x, tip_y);
}

/// Source-over blend of a premultiplied-RGBA glyph, clipped to the frame.
fn blend_glyph(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    glyph: &RenderedGlyph,
    origin_x: i64,
    origin_y: i64,
) {
    for gy in 0..glyph.height as i64 {
        let fy = origin_y + gy;
        if fy < 0 || fy >= frame_height as i64 {
            continue;
        }
        for gx in 0..glyph.width as i64 {
            let fx = origin_x + gx;
            if fx < 0 || fx >= frame_width as i64 {
                continue;
            }

            let src = (gy * glyph.width as i64 + gx) as usize * 4;
            let alpha = glyph.data[src + 3] as u32;
            if alpha == 0 {
                continue;
            }

            let dst = (fy as usize * frame_width as usize + fx as usize) * 4;
            let inv = 255 - alpha;
            for channel in 0..3 {
                let blended =
                    glyph.data[src + channel] as u32 + frame[dst + channel] as u32 * inv / 255;
                frame[dst + channel] = blended.min(255) as u8;
            }
            let out_alpha = alpha + frame[dst + 3] as u32 * inv / 255;
            frame[dst + 3] = out_alpha.min(255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::overlay::{place_cursor, VideoBounds};

    fn sample(timestamp_ms: u64, x: i32, y: i32) -> CursorPosition {
        CursorPosition {
            timestamp_ms,
            x,
            y,
            screen_width: 100,
            screen_height: 100,
        }
    }

    fn white_frame(width: u32, height: u32) -> Vec<u8> {
        vec![255u8; (width * height * 4) as usize]
    }

    #[test]
    fn test_draws_glyph_at_interpolated_position() {
        let positions = vec![sample(0, 0, 0), sample(100, 100, 100)];
        let mut frame = white_frame(200, 200);

        render_cursor(&mut frame, 200, 200, &positions, 50.0);

        // Tip lands at (100, 100); the arrow body extends down-right. Probe
        // well inside the dark fill, clear of the light outline.
        let probe = ((100 + 8) * 200 + (100 + 3)) * 4;
        assert!(frame[probe] < 128, "expected a darkened pixel under the arrow");
    }

    #[test]
    fn test_no_positions_leave_frame_untouched() {
        let mut frame = white_frame(64, 64);
        let expected = frame.clone();

        render_cursor(&mut frame, 64, 64, &[], 0.0);
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_glyph_clipped_at_frame_edge() {
        // Cursor at the bottom-right corner; most of the glyph is clipped.
        let positions = vec![sample(0, 100, 100)];
        let mut frame = white_frame(64, 64);

        render_cursor(&mut frame, 64, 64, &positions, 0.0);
    }

    #[test]
    fn test_undersized_buffer_is_rejected() {
        let positions = vec![sample(0, 50, 50)];
        let mut frame = vec![0u8; 16];

        render_cursor(&mut frame, 64, 64, &positions, 0.0);
        assert!(frame.iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_matches_overlay_mapping() {
        // The overlay and the exporter must anchor the tip at the same
        // pixel for the same frame geometry.
        let positions = vec![sample(0, 25, 75)];
        let bounds = VideoBounds {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 360.0,
        };

        let placement = place_cursor(&positions, 0.0, &bounds, 0.0, 0.0).unwrap();
        let tip_x = (0.25f64 * 640.0).round();
        let tip_y = (0.75f64 * 360.0).round();

        assert_eq!(placement.left.round(), tip_x);
        assert_eq!(placement.top.round(), tip_y);

        let mut frame = white_frame(640, 360);
        render_cursor(&mut frame, 640, 360, &positions, 0.0);
        let probe = ((tip_y as usize + 8) * 640 + tip_x as usize + 3) * 4;
        assert!(frame[probe] < 128);
    }
}
