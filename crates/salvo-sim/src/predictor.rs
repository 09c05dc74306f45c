//! Single-step lead predictor for automatic fire.
//!
//! Looks only at the shot just taken. The damping keeps the correction from
//! overshooting into an oscillation.

use salvo_core::constants::PREDICTION_DAMPING;
use salvo_core::types::AngleBounds;

use crate::trajectory::angle_for_range;

/// Where the target is expected to be by the time the next shot lands.
pub fn predicted_position(
    prev_range: f64,
    prev_flight_time: f64,
    miss_delta: f64,
    target_speed: f64,
) -> f64 {
    let closing = (PREDICTION_DAMPING * target_speed) * (PREDICTION_DAMPING * prev_flight_time);
    prev_range + miss_delta - closing
}

/// Launch angle for the next shot, clamped to `bounds`.
///
/// An unreachable prediction falls back to `bounds.max`.
pub fn predict_next_angle(
    prev_range: f64,
    prev_flight_time: f64,
    miss_delta: f64,
    target_speed: f64,
    muzzle_speed: f64,
    bounds: &AngleBounds,
) -> f64 {
    let position = predicted_position(prev_range, prev_flight_time, miss_delta, target_speed);
    let angle = angle_for_range(position, muzzle_speed).unwrap_or(bounds.max);
    bounds.clamp(angle)
}
