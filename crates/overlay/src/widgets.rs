//! Value mapping for slider tracks and the float write-back guard.

use crate::geom::Rect;

/// Maps a cursor x position on `track` to a value in `[min, max]`.
/// Cursor positions outside the track clamp to the nearest end.
pub(crate) fn slider_value_at(track: Rect, cursor_x: f32, min: f32, max: f32) -> f32 {
    if track.width <= 0.0 {
        return min;
    }
    let t = ((cursor_x - track.x) / track.width).clamp(0.0, 1.0);
    min + t * (max - min)
}

/// Inverse of [`slider_value_at`]: knob center x for a value.
pub(crate) fn slider_position_of(track: Rect, value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return track.x;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    track.x + t * track.width
}

/// Approximate float equality tolerant of slider jitter. Discrete and
/// boolean controls compare exactly; only the continuous volume value
/// goes through this guard.
pub(crate) fn approximately(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() < (1e-6 * scale).max(f32::EPSILON * 8.0)
}
