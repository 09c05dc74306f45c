//! Session configuration and the sampled scenario it is built from.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ShotMode, TargetMotion};
use crate::error::ConfigError;
use crate::types::AngleBounds;

/// Immutable configuration for one duel. Built once at startup and shared by
/// reference between the target simulator and the battle controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Projectile muzzle speed (m/s).
    pub muzzle_speed: f64,
    /// Target closing speed (m/s).
    pub target_speed: f64,
    /// Range reached at the steepest legal angle (meters).
    pub max_range: f64,
    /// Maximum miss distance still counted as a hit (meters).
    pub tolerance: f64,
    pub angle_bounds: AngleBounds,
    /// Simulated seconds per wall-clock second for background target motion.
    pub speed_multiplier: f64,
    pub target_motion: TargetMotion,
    pub shot_mode: ShotMode,
    /// Timeline width in characters.
    pub ruler_width: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            muzzle_speed: MIN_PROJECTILE_SPEED,
            target_speed: 0.0,
            max_range: MIN_PROJECTILE_SPEED * MIN_PROJECTILE_SPEED / GRAVITY,
            tolerance: IMPACT_RADIUS,
            angle_bounds: AngleBounds::default(),
            speed_multiplier: 1.0,
            target_motion: TargetMotion::default(),
            shot_mode: ShotMode::default(),
            ruler_width: RULER_WIDTH,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations a session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance > 0.0) {
            return Err(ConfigError::NonPositiveTolerance(self.tolerance));
        }
        let AngleBounds { min, max } = self.angle_bounds;
        if !(min > 0.0 && min <= max && max < 90.0) {
            return Err(ConfigError::InvalidAngleBounds { min, max });
        }
        if !(self.speed_multiplier > 0.0) {
            return Err(ConfigError::NonPositiveMultiplier(self.speed_multiplier));
        }
        if !(self.muzzle_speed > 0.0) {
            return Err(ConfigError::NonPositiveMuzzleSpeed(self.muzzle_speed));
        }
        if self.target_speed < 0.0 {
            return Err(ConfigError::NegativeTargetSpeed(self.target_speed));
        }
        if self.ruler_width < MIN_RULER_WIDTH {
            return Err(ConfigError::RulerTooNarrow {
                width: self.ruler_width,
                min: MIN_RULER_WIDTH,
            });
        }
        Ok(())
    }

    /// Wall-clock period of one target tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(TARGET_TICK_SECS / self.speed_multiplier)
    }

    /// Wall-clock time a shot of the given flight time stays in the air.
    pub fn flight_wait(&self, flight_time: f64) -> Duration {
        Duration::from_secs_f64(flight_time.max(0.0) / self.speed_multiplier)
    }

    /// Angle used for the first automatic shot.
    pub fn opening_angle(&self) -> f64 {
        self.angle_bounds.clamp(self.angle_bounds.max / 2.0)
    }
}

/// Bounds the random scenario is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBounds {
    /// Muzzle speed range (m/s).
    pub muzzle_speed: (f64, f64),
    /// Target speed range (km/h).
    pub target_speed_kph: (f64, f64),
    /// Nearest starting range as a fraction of max range.
    pub min_start_fraction: f64,
}

impl Default for ScenarioBounds {
    fn default() -> Self {
        Self {
            muzzle_speed: (MIN_PROJECTILE_SPEED, MAX_PROJECTILE_SPEED),
            target_speed_kph: (MIN_TARGET_SPEED_KPH, MAX_TARGET_SPEED_KPH),
            min_start_fraction: MIN_START_RANGE_FRACTION,
        }
    }
}

/// Randomly drawn starting conditions for one duel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub muzzle_speed: f64,
    pub target_speed_kph: f64,
    /// Same speed in m/s.
    pub target_speed: f64,
    pub max_range: f64,
    pub start_range: f64,
}

/// Convert km/h to m/s.
pub fn kph_to_mps(kph: f64) -> f64 {
    kph * METERS_PER_KILOMETER / SECONDS_PER_HOUR
}
