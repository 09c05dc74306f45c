//! Simulation constants and tuning parameters.
//!
//! All distances are meters and all angles are degrees unless noted.

/// Standard gravity (m/s²).
pub const GRAVITY: f64 = 9.80665;

// --- Shot envelope ---

/// Shallowest legal launch angle (degrees).
pub const MIN_SHOT_ANGLE: f64 = 1.0;

/// Steepest legal launch angle (degrees). Also the angle of maximum range.
pub const MAX_SHOT_ANGLE: f64 = 45.0;

/// Manual input value that ends the session.
pub const QUIT_ANGLE: f64 = 0.0;

/// Default detonation radius for a hit (meters).
pub const IMPACT_RADIUS: f64 = 20.0;

// --- Scenario sampling ---

/// Slowest muzzle speed (m/s).
pub const MIN_PROJECTILE_SPEED: f64 = 300.0;

/// Fastest muzzle speed (m/s).
pub const MAX_PROJECTILE_SPEED: f64 = 600.0;

/// Slowest target speed (km/h).
pub const MIN_TARGET_SPEED_KPH: f64 = 0.0;

/// Fastest target speed (km/h).
pub const MAX_TARGET_SPEED_KPH: f64 = 60.0;

/// Nearest starting target range as a fraction of max range.
pub const MIN_START_RANGE_FRACTION: f64 = 0.2;

/// Number of discrete steps a sampled value can take inside its bounds.
pub const SAMPLE_STEPS: u32 = 10_000;

// --- Target motion ---

/// Simulated seconds covered by one target tick.
pub const TARGET_TICK_SECS: f64 = 1.0;

/// A status report is emitted every this many target ticks.
pub const TARGET_REPORT_INTERVAL_TICKS: u64 = 10;

/// Speed multiplier used when the computer is shooting.
pub const AUTO_SPEED_MULTIPLIER: f64 = 10.0;

// --- Prediction ---

/// Damping applied to both target speed and previous flight time when
/// leading the next shot.
pub const PREDICTION_DAMPING: f64 = 0.95;

// --- Timeline ---

/// Width of the flight/impact ruler in characters.
pub const RULER_WIDTH: usize = 50;

/// Narrowest ruler that still leaves room for both edge clamps.
pub const MIN_RULER_WIDTH: usize = 10;

/// Leftmost column the shot marker may occupy (1-based).
pub const MIN_SHOT_COLUMN: usize = 4;

/// Leftmost column the target marker may occupy when it is ahead of the shot.
pub const MIN_TARGET_COLUMN: usize = 5;

/// Leftmost column a target behind the shot may occupy.
pub const MIN_OVERTAKEN_TARGET_COLUMN: usize = 2;

/// Number of labelled divisions under the ruler.
pub const RULER_DIVISIONS: u32 = 5;

// --- Units ---

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const FEET_PER_MILE: f64 = 5280.0;
pub const FEET_PER_METER: f64 = 3.28084;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
