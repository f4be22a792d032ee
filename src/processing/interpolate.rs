//! Cursor position interpolation
//!
//! One shared implementation queried by both the live overlay and the
//! offline exporter, so preview and final output cannot drift apart.

use crate::capture::input::types::CursorPosition;

/// Cursor position expressed as fractions of the recorded display size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPosition {
    pub x: f64,
    pub y: f64,
}

fn normalized(position: &CursorPosition) -> Option<NormalizedPosition> {
    if position.screen_width == 0 || position.screen_height == 0 {
        return None;
    }
    Some(NormalizedPosition {
        x: position.x as f64 / position.screen_width as f64,
        y: position.y as f64 / position.screen_height as f64,
    })
}

/// Interpolate the cursor position at `time_ms` from recorded samples.
///
/// Queries outside the sampled range clamp to the nearest sample rather than
/// extrapolating. Each sample is normalized by its own screen size before
/// interpolating, so a display-geometry change between two consecutive
/// samples does not produce a jump scaled by the wrong denominator.
pub fn interpolate_cursor(
    positions: &[CursorPosition],
    time_ms: f64,
) -> Option<NormalizedPosition> {
    if positions.is_empty() {
        return None;
    }

    // Rightmost sample at or before the query, leftmost strictly after.
    let split = positions.partition_point(|p| p.timestamp_ms as f64 <= time_ms);
    let before = split.checked_sub(1).map(|index| &positions[index]);
    let after = positions.get(split);

    match (before, after) {
        (Some(before), None) => normalized(before),
        (None, Some(after)) => normalized(after),
        (Some(before), Some(after)) => {
            let from = normalized(before)?;
            let to = normalized(after)?;

            let span = after.timestamp_ms as f64 - before.timestamp_ms as f64;
            let t = if span > 0.0 {
                (time_ms - before.timestamp_ms as f64) / span
            } else {
                0.0
            };

            Some(NormalizedPosition {
                x: from.x + (to.x - from.x) * t,
                y: from.y + (to.y - from.y) * t,
            })
        }
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp_ms: u64, x: i32, y: i32) -> CursorPosition {
        CursorPosition {
            timestamp_ms,
            x,
            y,
            screen_width: 100,
            screen_height: 100,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(interpolate_cursor(&[], 100.0), None);
    }

    #[test]
    fn test_query_before_first_sample() {
        let positions = vec![sample(100, 50, 50), sample(200, 100, 100)];
        let result = interpolate_cursor(&positions, 10.0).unwrap();
        assert_eq!(result, NormalizedPosition { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_query_after_last_sample() {
        let positions = vec![sample(100, 50, 50), sample(200, 100, 100)];
        // Clamped to the last sample, not linearly extended.
        let result = interpolate_cursor(&positions, 10_000.0).unwrap();
        assert_eq!(result, NormalizedPosition { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_query_at_sample_timestamp() {
        let positions = vec![sample(100, 50, 50), sample(200, 100, 100)];
        let result = interpolate_cursor(&positions, 200.0).unwrap();
        assert_eq!(result, NormalizedPosition { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_midpoint_interpolation() {
        let positions = vec![sample(0, 0, 0), sample(100, 100, 100)];
        let result = interpolate_cursor(&positions, 50.0).unwrap();
        assert_eq!(result, NormalizedPosition { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_fractional_query_time() {
        let positions = vec![sample(0, 0, 0), sample(100, 100, 100)];
        let result = interpolate_cursor(&positions, 33.25).unwrap();
        assert!((result.x - 0.3325).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_timestamps_do_not_divide_by_zero() {
        let positions = vec![sample(100, 0, 0), sample(100, 100, 100)];

        // Before both: the first sample wins.
        let result = interpolate_cursor(&positions, 50.0).unwrap();
        assert_eq!(result, NormalizedPosition { x: 0.0, y: 0.0 });

        // At the shared timestamp both are "before"; the last one wins.
        let result = interpolate_cursor(&positions, 100.0).unwrap();
        assert_eq!(result, NormalizedPosition { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_geometry_change_between_samples() {
        // The display switched from 100x100 to 200x200 mid-flight; each
        // sample normalizes against its own geometry.
        let positions = vec![
            sample(0, 50, 50),
            CursorPosition {
                timestamp_ms: 100,
                x: 200,
                y: 200,
                screen_width: 200,
                screen_height: 200,
            },
        ];

        let result = interpolate_cursor(&positions, 50.0).unwrap();
        assert_eq!(result, NormalizedPosition { x: 0.75, y: 0.75 });
    }

    #[test]
    fn test_zero_screen_dimensions_yield_none() {
        let positions = vec![CursorPosition {
            timestamp_ms: 0,
            x: 10,
            y: 10,
            screen_width: 0,
            screen_height: 0,
        }];
        assert_eq!(interpolate_cursor(&positions, 0.0), None);
    }
}
