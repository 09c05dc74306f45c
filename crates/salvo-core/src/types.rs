//! Value types produced and consumed by the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SHOT_ANGLE, MIN_SHOT_ANGLE};
use crate::enums::TargetState;

/// Inclusive range of legal launch angles (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for AngleBounds {
    fn default() -> Self {
        Self {
            min: MIN_SHOT_ANGLE,
            max: MAX_SHOT_ANGLE,
        }
    }
}

impl AngleBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }

    /// Clamp an angle into the legal range.
    pub fn clamp(&self, angle: f64) -> f64 {
        angle.max(self.min).min(self.max)
    }
}

/// A single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// 1-based shot number within the session.
    pub number: u32,
    /// Launch angle (degrees).
    pub angle: f64,
    /// Horizontal distance traveled (meters).
    pub range: f64,
    /// Time of flight (seconds).
    pub flight_time: f64,
    /// Target range at impact minus shot range. Positive = undershot.
    pub miss_delta: f64,
}

impl Shot {
    pub fn undershot(&self) -> bool {
        self.miss_delta > 0.0
    }
}

/// One rendering of the flight/impact timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub flight_line: String,
    pub impact_line: String,
    /// 1-based ruler column of the shot's landing point.
    pub shot_index: usize,
    /// 1-based ruler column of the target.
    pub target_index: usize,
    pub hit: bool,
}

/// Point-in-time view of the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetSnapshot {
    /// Remaining distance to the origin (meters).
    pub range: f64,
    /// Simulated seconds of target motion so far.
    pub elapsed_secs: f64,
    /// Background ticks processed.
    pub ticks: u64,
    pub state: TargetState,
}
