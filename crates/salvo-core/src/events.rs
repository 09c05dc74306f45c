//! Status events emitted by the simulation for display.
//!
//! Events carry raw SI values; turning them into feet/meters or
//! miles/kilometers is the display layer's job.

use serde::{Deserialize, Serialize};

use crate::enums::SessionEnd;
use crate::types::{AngleBounds, Shot, TimelineFrame};

/// Situation summary printed before every shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub muzzle_speed: f64,
    pub max_range: f64,
    /// Target speed (m/s).
    pub target_speed: f64,
    pub target_range: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Start of a shot cycle.
    Header(HeaderView),
    /// Manual mode is waiting for the next angle.
    AwaitingAngle { bounds: AngleBounds },
    /// Shot leaves the barrel.
    ShotFired {
        number: u32,
        angle: f64,
        flight_time: f64,
    },
    /// Shot lands; `shot.miss_delta` is measured against `target_range`.
    ShotLanded { shot: Shot, target_range: f64 },
    /// The shot missed by more than the tolerance.
    Missed { shot: Shot },
    /// Direct hit.
    Hit { shot: Shot },
    Timeline(TimelineFrame),
    /// Periodic progress of the moving target.
    TargetReport {
        range: f64,
        elapsed_secs: f64,
        speed_multiplier: f64,
    },
    /// The target closed to within the tolerance radius of the origin.
    TargetReachedOrigin { range: f64 },
    /// Session over.
    Finished { end: SessionEnd },
}
