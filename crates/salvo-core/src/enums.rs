//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// How the target behaves while a shot is being decided and flown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMotion {
    /// Target pauses while the player aims; the flight time is fast-forwarded
    /// in one step once the shot is fired.
    #[default]
    Paused,
    /// Target keeps moving on a background tick; the controller waits out
    /// each flight in wall-clock time.
    Realtime,
}

/// Who picks the launch angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotMode {
    /// Angles come from an external input source.
    #[default]
    Manual,
    /// Angles come from the shot predictor.
    Auto,
}

/// Result of evaluating a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Impact within the tolerance radius of the target.
    Hit,
    /// The target closed to within the tolerance radius of the origin.
    TargetReachedOrigin,
    /// Neither; another shot follows.
    Miss,
}

/// Target simulator lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetState {
    #[default]
    Running,
    /// Target reached the origin; no further motion.
    Stopped,
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    Hit { shots: u32 },
    TargetReachedOrigin { shots: u32 },
    /// Player entered the quit sentinel.
    Quit { shots: u32 },
}

impl SessionEnd {
    /// Number of shots fired before the session ended.
    pub fn shots(&self) -> u32 {
        match *self {
            SessionEnd::Hit { shots }
            | SessionEnd::TargetReachedOrigin { shots }
            | SessionEnd::Quit { shots } => shots,
        }
    }
}
