//! Simulation engine for SALVO.
//!
//! Trajectory physics, the timeline renderer, the shot predictor, the
//! target thread, and the battle controller that ties them together.
//! Headless: callers talk to a session through an input sender and an
//! event channel.

pub mod battle;
pub mod error;
pub mod predictor;
pub mod scenario;
pub mod session;
pub mod target;
pub mod timeline;
pub mod trajectory;

pub use error::SessionError;
pub use salvo_core as core;
pub use session::{spawn_session, InputSender, SessionHandle};
