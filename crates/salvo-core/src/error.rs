//! Error types for input validation and configuration.

use thiserror::Error;

/// A manual angle entry that could not be used. Recovered by re-prompting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleInputError {
    #[error("not a number: `{0}`")]
    NotANumber(String),

    #[error("{value} is outside {min:.1} to {max:.1} degrees")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// A configuration that cannot drive a session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tolerance radius must be positive, got {0}")]
    NonPositiveTolerance(f64),

    #[error("angle bounds must satisfy 0 < min <= max < 90, got {min} to {max}")]
    InvalidAngleBounds { min: f64, max: f64 },

    #[error("speed multiplier must be positive, got {0}")]
    NonPositiveMultiplier(f64),

    #[error("muzzle speed must be positive, got {0}")]
    NonPositiveMuzzleSpeed(f64),

    #[error("target speed must not be negative, got {0}")]
    NegativeTargetSpeed(f64),

    #[error("ruler must be at least {min} columns wide, got {width}")]
    RulerTooNarrow { width: usize, min: usize },
}
