//! Session wiring: spawns the target thread and the battle controller and
//! hands the caller an input sender and an event stream.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use salvo_core::commands::ShotInput;
use salvo_core::config::SimulationConfig;
use salvo_core::enums::SessionEnd;
use salvo_core::events::SessionEvent;

use crate::battle::{BattleController, ControllerMessage};
use crate::error::SessionError;
use crate::target::{spawn_target, TargetSimulator};

/// Feeds manual input to a running session. Cheap to clone.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: mpsc::Sender<ControllerMessage>,
}

impl InputSender {
    /// Deliver one input. Returns false once the session has finished.
    pub fn send(&self, input: ShotInput) -> bool {
        self.tx.send(ControllerMessage::Input(input)).is_ok()
    }

    pub fn fire(&self, degrees: f64) -> bool {
        self.send(ShotInput::Angle { degrees })
    }

    pub fn quit(&self) -> bool {
        self.send(ShotInput::Quit)
    }
}

/// A running session.
///
/// The event stream ends once the controller and the target thread have
/// both exited.
pub struct SessionHandle {
    input: InputSender,
    events: mpsc::Receiver<SessionEvent>,
    controller: JoinHandle<Result<SessionEnd, SessionError>>,
}

impl SessionHandle {
    pub fn input(&self) -> InputSender {
        self.input.clone()
    }

    pub fn events(&self) -> &mpsc::Receiver<SessionEvent> {
        &self.events
    }

    /// Wait for the controller, which itself waits for the target thread.
    pub fn join(self) -> Result<SessionEnd, SessionError> {
        self.controller
            .join()
            .map_err(|_| SessionError::Panicked("battle"))?
    }

    /// Drain every event, then wait for the session to end.
    pub fn collect(self) -> (Vec<SessionEvent>, Result<SessionEnd, SessionError>) {
        let events: Vec<SessionEvent> = self.events.iter().collect();
        (events, self.join())
    }
}

/// Validate `config` and start a session with the target at `start_range`.
pub fn spawn_session(
    config: SimulationConfig,
    start_range: f64,
) -> Result<SessionHandle, SessionError> {
    config.validate()?;
    let config = Arc::new(config);

    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>();
    let (inbox_tx, inbox_rx) = mpsc::channel::<ControllerMessage>();

    let sim = TargetSimulator::new(Arc::clone(&config), start_range);
    let target = spawn_target(sim, event_tx.clone(), inbox_tx.clone())?;
    let controller = BattleController::new(config, target, inbox_rx, event_tx);

    let controller = thread::Builder::new()
        .name("salvo-battle".into())
        .spawn(move || controller.run())
        .map_err(|source| SessionError::Spawn {
            name: "battle",
            source,
        })?;

    Ok(SessionHandle {
        input: InputSender { tx: inbox_tx },
        events: event_rx,
        controller,
    })
}
