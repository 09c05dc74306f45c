//! Battle controller: the shot loop and owner of the session lifecycle.
//!
//! `AwaitingAngle → ShotInFlight → Evaluating → (loop | Hit | GameOver)`.
//!
//! The controller is the only unit that declares how a session ends. The
//! target thread is started for it and stopped by it; a target reaching the
//! origin arrives as a message in the controller's inbox and preempts both
//! the wait for manual input and the wait for a realtime flight.

use std::collections::VecDeque;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use log::{debug, info, warn};

use salvo_core::commands::ShotInput;
use salvo_core::config::SimulationConfig;
use salvo_core::enums::{Outcome, SessionEnd, ShotMode, TargetMotion, TargetState};
use salvo_core::events::{HeaderView, SessionEvent};
use salvo_core::types::{Shot, TargetSnapshot};

use crate::error::SessionError;
use crate::predictor::predict_next_angle;
use crate::target::TargetHandle;
use crate::timeline::render_timeline;
use crate::trajectory::range_and_time;

/// Messages delivered to the controller's inbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerMessage {
    /// Manual player input.
    Input(ShotInput),
    /// Sent once by the target thread when the target stops at the origin.
    TargetReachedOrigin(TargetSnapshot),
}

/// Classify a landed shot.
///
/// A hit is checked before the target reaching the origin, so a shot that
/// lands on a target already inside the radius still counts as a hit. This
/// only applies to shots that land: a realtime flight cut short by the
/// target reaching the origin is never evaluated.
pub fn evaluate(target_range: f64, shot_range: f64, tolerance: f64) -> Outcome {
    let miss_delta = target_range - shot_range;
    if miss_delta.abs() <= tolerance {
        Outcome::Hit
    } else if target_range <= tolerance {
        Outcome::TargetReachedOrigin
    } else {
        Outcome::Miss
    }
}

/// Where the next angle came from.
enum NextAngle {
    Fire(f64),
    Quit,
    TargetReachedOrigin(TargetSnapshot),
}

pub struct BattleController {
    config: Arc<SimulationConfig>,
    target: TargetHandle,
    inbox: mpsc::Receiver<ControllerMessage>,
    /// Inputs that arrived while a shot was in the air.
    pending_inputs: VecDeque<ShotInput>,
    events: mpsc::Sender<SessionEvent>,
    shots: u32,
    /// Angle for the next automatic shot.
    predicted_angle: f64,
}

impl BattleController {
    pub fn new(
        config: Arc<SimulationConfig>,
        target: TargetHandle,
        inbox: mpsc::Receiver<ControllerMessage>,
        events: mpsc::Sender<SessionEvent>,
    ) -> Self {
        let predicted_angle = config.opening_angle();
        Self {
            config,
            target,
            inbox,
            pending_inputs: VecDeque::new(),
            events,
            shots: 0,
            predicted_angle,
        }
    }

    /// Play the session to the end, then stop the target thread.
    ///
    /// If the target reaches the origin while a realtime shot is still in
    /// the air, the session ends there and the shot is not scored, even one
    /// that would have landed within the tolerance.
    pub fn run(mut self) -> Result<SessionEnd, SessionError> {
        let end = self.shot_loop()?;
        info!("session ended: {:?}", end);

        let Self { target, events, .. } = self;
        target.shutdown()?;
        let _ = events.send(SessionEvent::Finished { end });
        Ok(end)
    }

    fn shot_loop(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            let snapshot = self.target.snapshot()?;
            if snapshot.state == TargetState::Stopped {
                return Ok(self.game_over(snapshot));
            }
            self.emit(SessionEvent::Header(HeaderView {
                muzzle_speed: self.config.muzzle_speed,
                max_range: self.config.max_range,
                target_speed: self.config.target_speed,
                target_range: snapshot.range,
            }));

            // 1. Awaiting angle
            let angle = match self.next_angle()? {
                NextAngle::Fire(angle) => angle,
                NextAngle::Quit => return Ok(SessionEnd::Quit { shots: self.shots }),
                NextAngle::TargetReachedOrigin(snapshot) => return Ok(self.game_over(snapshot)),
            };

            // 2. Shot in flight
            self.shots += 1;
            let (range, flight_time) = range_and_time(angle, self.config.muzzle_speed);
            self.emit(SessionEvent::ShotFired {
                number: self.shots,
                angle,
                flight_time,
            });

            let at_impact = match self.config.target_motion {
                TargetMotion::Realtime => {
                    if let Some(snapshot) = self.wait_for_flight(flight_time) {
                        return Ok(self.game_over(snapshot));
                    }
                    self.target.snapshot()?
                }
                TargetMotion::Paused => self.target.advance(flight_time)?,
            };

            // 3. Evaluating
            let shot = Shot {
                number: self.shots,
                angle,
                range,
                flight_time,
                miss_delta: at_impact.range - range,
            };
            self.emit(SessionEvent::ShotLanded {
                shot,
                target_range: at_impact.range,
            });

            match evaluate(at_impact.range, range, self.config.tolerance) {
                Outcome::Hit => {
                    self.emit_timeline(&shot, at_impact.range, true);
                    self.emit(SessionEvent::Hit { shot });
                    return Ok(SessionEnd::Hit { shots: self.shots });
                }
                Outcome::TargetReachedOrigin => return Ok(self.game_over(at_impact)),
                Outcome::Miss => {
                    self.emit(SessionEvent::Missed { shot });
                    self.emit_timeline(&shot, at_impact.range, false);
                    if self.config.shot_mode == ShotMode::Auto {
                        self.predicted_angle = predict_next_angle(
                            shot.range,
                            shot.flight_time,
                            shot.miss_delta,
                            self.config.target_speed,
                            self.config.muzzle_speed,
                            &self.config.angle_bounds,
                        );
                        debug!("next predicted angle {:.2}", self.predicted_angle);
                    }
                }
            }
        }
    }

    fn next_angle(&mut self) -> Result<NextAngle, SessionError> {
        if self.config.shot_mode == ShotMode::Auto {
            return Ok(NextAngle::Fire(self.predicted_angle));
        }

        self.emit(SessionEvent::AwaitingAngle {
            bounds: self.config.angle_bounds,
        });
        loop {
            let input = match self.pending_inputs.pop_front() {
                Some(input) => input,
                None => match self.inbox.recv() {
                    Ok(ControllerMessage::Input(input)) => input,
                    Ok(ControllerMessage::TargetReachedOrigin(snapshot)) => {
                        return Ok(NextAngle::TargetReachedOrigin(snapshot));
                    }
                    // Every input source is gone.
                    Err(_) => return Ok(NextAngle::Quit),
                },
            };

            match input {
                ShotInput::Quit => return Ok(NextAngle::Quit),
                ShotInput::Angle { degrees } if self.config.angle_bounds.contains(degrees) => {
                    return Ok(NextAngle::Fire(degrees));
                }
                ShotInput::Angle { degrees } => {
                    warn!("ignoring out-of-range angle {}", degrees);
                }
            }
        }
    }

    /// Sleep through a realtime flight while the target keeps moving.
    ///
    /// Returns early with the target's final state if it reaches the origin
    /// before the shot lands.
    fn wait_for_flight(&mut self, flight_time: f64) -> Option<TargetSnapshot> {
        let deadline = Instant::now() + self.config.flight_wait(flight_time);
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            match self.inbox.recv_timeout(remaining) {
                Ok(ControllerMessage::Input(input)) => {
                    if self.config.shot_mode == ShotMode::Auto {
                        debug!("auto fire, dropping input {:?}", input);
                    } else {
                        self.pending_inputs.push_back(input);
                    }
                }
                Ok(ControllerMessage::TargetReachedOrigin(snapshot)) => return Some(snapshot),
                Err(RecvTimeoutError::Timeout) => return None,
                Err(RecvTimeoutError::Disconnected) => {
                    thread::sleep(remaining);
                    return None;
                }
            }
        }
    }

    fn game_over(&self, snapshot: TargetSnapshot) -> SessionEnd {
        self.emit(SessionEvent::TargetReachedOrigin {
            range: snapshot.range,
        });
        SessionEnd::TargetReachedOrigin { shots: self.shots }
    }

    fn emit_timeline(&self, shot: &Shot, target_range: f64, hit: bool) {
        // Keep both distances on the ruler even when the target started
        // beyond the steepest shot's reach.
        let scale = self.config.max_range.max(shot.range).max(target_range);
        let frame = render_timeline(
            shot.range,
            target_range.max(0.0),
            scale,
            self.config.ruler_width,
            hit,
        );
        self.emit(SessionEvent::Timeline(frame));
    }

    fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }
}
