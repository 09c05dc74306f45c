//! Drag-free ballistic trajectory under uniform gravity.
//!
//! Pure functions, angles in degrees, distances in meters.

use salvo_core::constants::GRAVITY;
use salvo_core::types::AngleBounds;

/// Slack allowed when the asin argument lands a rounding error above 1.
const ASIN_SLACK: f64 = 1e-12;

/// Horizontal range and flight time for a launch at `angle` degrees and
/// `speed` m/s, landing at launch height.
pub fn range_and_time(angle: f64, speed: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    let time = (radians.sin() * speed * 2.0) / GRAVITY;
    let range = radians.cos() * time * speed;
    (range, time)
}

/// Launch angle (degrees, the shallow solution) that carries a shot `range`
/// meters at `speed` m/s.
///
/// Returns `None` when no real angle exists, i.e. the target is beyond the
/// maximum range for this speed.
pub fn angle_for_range(range: f64, speed: f64) -> Option<f64> {
    let ratio = (range * GRAVITY) / (speed * speed);
    if ratio.is_nan() || ratio.abs() > 1.0 + ASIN_SLACK {
        return None;
    }
    let radians = ratio.clamp(-1.0, 1.0).asin() / 2.0;
    Some(radians.to_degrees())
}

/// Range at the steepest legal angle.
pub fn max_range(bounds: &AngleBounds, speed: f64) -> f64 {
    range_and_time(bounds.max, speed).0
}

/// One row of the shot profile table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileRow {
    pub angle: f64,
    pub range: f64,
    pub flight_time: f64,
}

/// Range and flight time for every whole degree from `bounds.min` to
/// `bounds.max`.
pub fn shot_profile(bounds: &AngleBounds, speed: f64) -> Vec<ProfileRow> {
    let mut rows = Vec::new();
    let mut angle = bounds.min;
    while angle <= bounds.max {
        let (range, flight_time) = range_and_time(angle, speed);
        rows.push(ProfileRow {
            angle,
            range,
            flight_time,
        });
        angle += 1.0;
    }
    rows
}
