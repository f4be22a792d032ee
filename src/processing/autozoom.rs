//! Automatic zoom region synthesis from recorded clicks
//!
//! Rapid click bursts collapse into a single zoom target; each target
//! becomes a time-bounded region with lead/hold/fade timing that never
//! overlaps existing regions or other regions produced in the same pass.

use crate::capture::input::types::{ClickEvent, MouseButton};
use crate::project::schema::{AutozoomSettings, RecordingMetadata, ZoomFocus, ZoomRegion};
use uuid::Uuid;

/// Minimum duration a synthesized region may have, in milliseconds.
const MIN_REGION_DURATION_MS: f64 = 100.0;

/// Convert a display-relative point into a focus expressed as fractions of
/// the display size. Clamping absorbs off-by-one rounding at screen edges.
///
/// `screen_width` and `screen_height` must be nonzero.
pub fn screen_to_normalized_focus(
    x: i32,
    y: i32,
    screen_width: u32,
    screen_height: u32,
) -> ZoomFocus {
    ZoomFocus {
        cx: (x as f64 / screen_width as f64).clamp(0.0, 1.0),
        cy: (y as f64 / screen_height as f64).clamp(0.0, 1.0),
    }
}

/// One or more raw clicks collapsed into a single representative point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedClick {
    /// Timestamp of the first click in the group.
    pub timestamp_ms: u64,
    /// Rounded average position of the group.
    pub x: i32,
    pub y: i32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub click_count: usize,
}

/// Group temporally-adjacent clicks into representative merged clicks.
///
/// Grouping is chained: a click joins the current group when it falls within
/// `merge_threshold` of the group's *previous member*, so a burst can span
/// well past the threshold measured from its first click.
pub fn merge_nearby_clicks(
    clicks: &[ClickEvent],
    merge_threshold: u64,
    ignore_right_clicks: bool,
) -> Vec<MergedClick> {
    let mut filtered: Vec<&ClickEvent> = clicks
        .iter()
        .filter(|click| !(ignore_right_clicks && click.button == MouseButton::Right))
        .collect();

    if filtered.is_empty() {
        return Vec::new();
    }

    // Callers should already provide clicks ordered; sort defensively.
    filtered.sort_by_key(|click| click.timestamp_ms);

    let mut merged = Vec::new();
    let mut group: Vec<&ClickEvent> = vec![filtered[0]];

    for &click in &filtered[1..] {
        let last = group[group.len() - 1];
        if click.timestamp_ms - last.timestamp_ms <= merge_threshold {
            group.push(click);
        } else {
            merged.push(collapse_group(&group));
            group = vec![click];
        }
    }
    merged.push(collapse_group(&group));

    merged
}

fn collapse_group(group: &[&ClickEvent]) -> MergedClick {
    let count = group.len();
    let sum_x: i64 = group.iter().map(|click| click.x as i64).sum();
    let sum_y: i64 = group.iter().map(|click| click.y as i64).sum();
    let first = group[0];

    MergedClick {
        timestamp_ms: first.timestamp_ms,
        x: (sum_x as f64 / count as f64).round() as i32,
        y: (sum_y as f64 / count as f64).round() as i32,
        screen_width: first.screen_width,
        screen_height: first.screen_height,
        click_count: count,
    }
}

/// Open-interval overlap test: touching endpoints do not overlap.
fn overlaps_any(start_ms: f64, end_ms: f64, regions: &[ZoomRegion]) -> bool {
    regions
        .iter()
        .any(|region| !(end_ms <= region.start_ms as f64 || start_ms >= region.end_ms as f64))
}

/// Propose zoom regions for the recorded clicks.
///
/// Candidates that would be shorter than 100 ms or would overlap an existing
/// region are skipped silently. Later candidates also see the running output
/// of this pass, so two nearby clicks cannot produce overlapping regions.
/// The caller merges the returned sequence into its authoritative region
/// list.
pub fn generate_zoom_regions_from_clicks(
    metadata: &RecordingMetadata,
    video_duration_ms: u64,
    existing_regions: &[ZoomRegion],
    settings: &AutozoomSettings,
) -> Vec<ZoomRegion> {
    // Whatever the zoom budget leaves after lead and hold is split between
    // the zoom-in and zoom-out fades.
    let fadeout_time = ((settings.zoom_duration as f64
        - settings.lead_time as f64
        - settings.hold_time as f64)
        / 2.0)
        .max(0.0);

    let merged = merge_nearby_clicks(
        &metadata.clicks,
        settings.merge_threshold,
        settings.ignore_right_clicks,
    );
    let merged_count = merged.len();

    let mut new_regions: Vec<ZoomRegion> = Vec::new();

    for click in merged {
        if click.screen_width == 0 || click.screen_height == 0 {
            continue;
        }

        let start_ms = (click.timestamp_ms as f64 - settings.lead_time as f64).max(0.0);
        let end_ms = (click.timestamp_ms as f64 + settings.hold_time as f64 + fadeout_time)
            .min(video_duration_ms as f64);

        if end_ms - start_ms < MIN_REGION_DURATION_MS {
            continue;
        }
        if overlaps_any(start_ms, end_ms, existing_regions) {
            continue;
        }
        if overlaps_any(start_ms, end_ms, &new_regions) {
            continue;
        }

        new_regions.push(ZoomRegion {
            id: format!("zoom-auto-{}", Uuid::new_v4()),
            start_ms: start_ms.round() as u64,
            end_ms: end_ms.round() as u64,
            depth: settings.default_depth,
            focus: screen_to_normalized_focus(
                click.x,
                click.y,
                click.screen_width,
                click.screen_height,
            ),
        });
    }

    tracing::debug!(
        merged_clicks = merged_count,
        accepted = new_regions.len(),
        "synthesized zoom regions"
    );

    new_regions
}
