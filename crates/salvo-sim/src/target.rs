//! Target motion: the simulator state machine and the thread that owns it.
//!
//! The target range has exactly one owner, the target thread. The battle
//! controller reads it through `Snapshot` requests and fast-forwards it with
//! `Advance`; it never touches the value directly.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, info};

use salvo_core::config::SimulationConfig;
use salvo_core::constants::{TARGET_REPORT_INTERVAL_TICKS, TARGET_TICK_SECS};
use salvo_core::enums::{TargetMotion, TargetState};
use salvo_core::events::SessionEvent;
use salvo_core::types::TargetSnapshot;

use crate::battle::ControllerMessage;
use crate::error::SessionError;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A periodic status report is due.
    pub report_due: bool,
    /// The target crossed into the tolerance radius on this tick.
    pub reached_origin: bool,
}

/// The target's remaining range and its motion bookkeeping.
#[derive(Debug, Clone)]
pub struct TargetSimulator {
    config: Arc<SimulationConfig>,
    range: f64,
    elapsed_secs: f64,
    ticks: u64,
    state: TargetState,
}

impl TargetSimulator {
    pub fn new(config: Arc<SimulationConfig>, start_range: f64) -> Self {
        let mut sim = Self {
            config,
            range: start_range,
            elapsed_secs: 0.0,
            ticks: 0,
            state: TargetState::Running,
        };
        sim.check_origin();
        sim
    }

    /// Advance by one background tick.
    pub fn tick(&mut self) -> TickReport {
        if self.state == TargetState::Stopped {
            return TickReport::default();
        }
        self.ticks += 1;
        self.move_for(TARGET_TICK_SECS);
        TickReport {
            report_due: self.ticks % TARGET_REPORT_INTERVAL_TICKS == 0,
            reached_origin: self.check_origin(),
        }
    }

    /// Fast-forward by `secs` of simulated time in one step.
    ///
    /// Returns true if this crossed into the tolerance radius.
    pub fn advance(&mut self, secs: f64) -> bool {
        if self.state == TargetState::Stopped {
            return false;
        }
        self.move_for(secs);
        self.check_origin()
    }

    pub fn snapshot(&self) -> TargetSnapshot {
        TargetSnapshot {
            range: self.range,
            elapsed_secs: self.elapsed_secs,
            ticks: self.ticks,
            state: self.state,
        }
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    fn move_for(&mut self, secs: f64) {
        let secs = secs.max(0.0);
        self.range -= self.config.target_speed * secs;
        self.elapsed_secs += secs;
    }

    fn check_origin(&mut self) -> bool {
        if self.state == TargetState::Running && self.range <= self.config.tolerance {
            self.state = TargetState::Stopped;
            return true;
        }
        false
    }
}

/// Requests served by the target thread.
#[derive(Debug)]
pub enum TargetCommand {
    /// Move the target `secs` of simulated time and reply with the result.
    Advance {
        secs: f64,
        reply: mpsc::Sender<TargetSnapshot>,
    },
    Snapshot {
        reply: mpsc::Sender<TargetSnapshot>,
    },
    Shutdown,
}

/// Owner-side handle to the target thread. Dropping it stops the thread.
pub struct TargetHandle {
    commands: mpsc::Sender<TargetCommand>,
    thread: Option<JoinHandle<()>>,
}

/// Spawn the target thread.
///
/// In `Realtime` motion the target ticks on its own; in `Paused` motion it
/// only moves on `Advance`. Periodic reports go to `events`; reaching the
/// origin is reported once to the controller through `notify`.
pub fn spawn_target(
    sim: TargetSimulator,
    events: mpsc::Sender<SessionEvent>,
    notify: mpsc::Sender<ControllerMessage>,
) -> Result<TargetHandle, SessionError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<TargetCommand>();

    let thread = thread::Builder::new()
        .name("salvo-target".into())
        .spawn(move || run_target_loop(sim, cmd_rx, events, notify))
        .map_err(|source| SessionError::Spawn {
            name: "target",
            source,
        })?;

    Ok(TargetHandle {
        commands: cmd_tx,
        thread: Some(thread),
    })
}

impl TargetHandle {
    /// Current target state.
    pub fn snapshot(&self) -> Result<TargetSnapshot, SessionError> {
        self.request(|reply| TargetCommand::Snapshot { reply })
    }

    /// Fast-forward the target and return its new state.
    pub fn advance(&self, secs: f64) -> Result<TargetSnapshot, SessionError> {
        self.request(|reply| TargetCommand::Advance { secs, reply })
    }

    /// Stop the thread and wait for it to exit.
    pub fn shutdown(mut self) -> Result<(), SessionError> {
        self.stop()
    }

    fn request(
        &self,
        command: impl FnOnce(mpsc::Sender<TargetSnapshot>) -> TargetCommand,
    ) -> Result<TargetSnapshot, SessionError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.commands
            .send(command(reply_tx))
            .map_err(|_| SessionError::TargetDisconnected)?;
        reply_rx.recv().map_err(|_| SessionError::TargetDisconnected)
    }

    fn stop(&mut self) -> Result<(), SessionError> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        // The thread may already be gone; joining tells us how it ended.
        let _ = self.commands.send(TargetCommand::Shutdown);
        thread.join().map_err(|_| SessionError::Panicked("target"))
    }
}

impl Drop for TargetHandle {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// The target loop. Runs until Shutdown or until the handle is dropped.
fn run_target_loop(
    mut sim: TargetSimulator,
    cmd_rx: mpsc::Receiver<TargetCommand>,
    events: mpsc::Sender<SessionEvent>,
    notify: mpsc::Sender<ControllerMessage>,
) {
    let config = Arc::clone(&sim.config);
    let ticking = config.target_motion == TargetMotion::Realtime;
    let interval = config.tick_interval();
    let mut next_tick_time = Instant::now() + interval;

    info!(
        "target simulator started: range {:.1} m, speed {:.2} m/s, {:?}",
        sim.range(),
        config.target_speed,
        config.target_motion
    );

    loop {
        // 1. Wait for a command, or for the next tick while the target moves
        let received = if ticking && sim.state() == TargetState::Running {
            let timeout = next_tick_time.saturating_duration_since(Instant::now());
            cmd_rx.recv_timeout(timeout)
        } else {
            cmd_rx.recv().map_err(|_| RecvTimeoutError::Disconnected)
        };

        match received {
            Ok(TargetCommand::Advance { secs, reply }) => {
                if sim.advance(secs) {
                    info!("target reached origin after fast-forward");
                }
                let _ = reply.send(sim.snapshot());
            }
            Ok(TargetCommand::Snapshot { reply }) => {
                let _ = reply.send(sim.snapshot());
            }
            Ok(TargetCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                // 2. Tick
                let report = sim.tick();
                debug!("target tick {}: range {:.1} m", sim.ticks, sim.range());

                if report.report_due {
                    let _ = events.send(SessionEvent::TargetReport {
                        range: sim.range(),
                        elapsed_secs: sim.elapsed_secs,
                        speed_multiplier: config.speed_multiplier,
                    });
                }
                if report.reached_origin {
                    info!("target reached origin at tick {}", sim.ticks);
                    let _ = notify.send(ControllerMessage::TargetReachedOrigin(sim.snapshot()));
                }

                // 3. Schedule the next tick
                next_tick_time += interval;
                let now = Instant::now();
                if now > next_tick_time && now - next_tick_time > interval * 2 {
                    // Too far behind, reset to avoid a catch-up spiral
                    next_tick_time = now;
                }
            }
        }
    }

    info!("target simulator stopped after {} ticks", sim.ticks);
}
