//! Player input delivered to the battle controller.
//!
//! Raw text is validated here so that only legal angles or the quit
//! sentinel ever reach the controller.

use serde::{Deserialize, Serialize};

use crate::constants::QUIT_ANGLE;
use crate::error::AngleInputError;
use crate::types::AngleBounds;

/// Next action chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShotInput {
    /// Fire at this angle (degrees, already within bounds).
    Angle { degrees: f64 },
    /// Leave the game.
    Quit,
}

/// Parse one line of manual input.
///
/// `0` is the quit sentinel; anything else must fall inside `bounds`.
pub fn parse_angle(input: &str, bounds: &AngleBounds) -> Result<ShotInput, AngleInputError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AngleInputError::NotANumber(trimmed.to_string()))?;

    if value == QUIT_ANGLE {
        return Ok(ShotInput::Quit);
    }
    if !bounds.contains(value) {
        return Err(AngleInputError::OutOfRange {
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(ShotInput::Angle { degrees: value })
}
