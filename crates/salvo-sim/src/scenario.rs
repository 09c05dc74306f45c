//! Scenario sampling and mode resolution.
//!
//! Turns a seed and the player's options into the starting conditions and
//! the immutable `SimulationConfig` for one duel.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use salvo_core::config::{kph_to_mps, Scenario, ScenarioBounds, SimulationConfig};
use salvo_core::constants::{AUTO_SPEED_MULTIPLIER, IMPACT_RADIUS, RULER_WIDTH, SAMPLE_STEPS};
use salvo_core::enums::{ShotMode, TargetMotion};
use salvo_core::types::AngleBounds;

use crate::trajectory::max_range;

/// Deterministic RNG for a given seed. Same seed = same scenario.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform draw from `SAMPLE_STEPS` evenly spaced values in `[min, max)`.
pub fn sample_between(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    let step = rng.gen_range(0..SAMPLE_STEPS) as f64;
    min + step * (max - min) / SAMPLE_STEPS as f64
}

/// Draw muzzle speed, target speed, and starting range.
pub fn sample_scenario(
    bounds: &ScenarioBounds,
    angle_bounds: &AngleBounds,
    rng: &mut impl Rng,
) -> Scenario {
    let muzzle_speed = sample_between(rng, bounds.muzzle_speed.0, bounds.muzzle_speed.1);
    let target_speed_kph =
        sample_between(rng, bounds.target_speed_kph.0, bounds.target_speed_kph.1);
    let max_range = max_range(angle_bounds, muzzle_speed);
    let start_range = sample_between(rng, max_range * bounds.min_start_fraction, max_range);

    Scenario {
        muzzle_speed,
        target_speed_kph,
        target_speed: kph_to_mps(target_speed_kph),
        max_range,
        start_range,
    }
}

/// Player-selected modes before they are resolved against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuelOptions {
    pub shot_mode: ShotMode,
    /// Realtime target motion requested (manual mode only).
    pub realtime: bool,
    pub tolerance: f64,
    pub angle_bounds: AngleBounds,
    /// Explicit speed multiplier; mode default when `None`.
    pub speed_multiplier: Option<f64>,
}

impl Default for DuelOptions {
    fn default() -> Self {
        Self {
            shot_mode: ShotMode::Manual,
            realtime: false,
            tolerance: IMPACT_RADIUS,
            angle_bounds: AngleBounds::default(),
            speed_multiplier: None,
        }
    }
}

impl DuelOptions {
    /// Target motion and speed multiplier implied by the options.
    ///
    /// Automatic fire always runs against a moving target at
    /// `AUTO_SPEED_MULTIPLIER`; manual fire runs at real time.
    pub fn resolve_modes(&self) -> (TargetMotion, f64) {
        let (motion, default_multiplier) = match self.shot_mode {
            ShotMode::Auto => (TargetMotion::Realtime, AUTO_SPEED_MULTIPLIER),
            ShotMode::Manual if self.realtime => (TargetMotion::Realtime, 1.0),
            ShotMode::Manual => (TargetMotion::Paused, 1.0),
        };
        (motion, self.speed_multiplier.unwrap_or(default_multiplier))
    }

    /// Build the session configuration for a sampled scenario.
    pub fn build_config(&self, scenario: &Scenario) -> SimulationConfig {
        let (target_motion, speed_multiplier) = self.resolve_modes();
        SimulationConfig {
            muzzle_speed: scenario.muzzle_speed,
            target_speed: scenario.target_speed,
            max_range: scenario.max_range,
            tolerance: self.tolerance,
            angle_bounds: self.angle_bounds,
            speed_multiplier,
            target_motion,
            shot_mode: self.shot_mode,
            ruler_width: RULER_WIDTH,
        }
    }
}
