//! SALVO terminal front end.
//!
//! Formats session events for the terminal and feeds typed angles into a
//! running session. The binary in `main.rs` wires these to the simulation.

pub mod display;
pub mod input;

pub use salvo_core as core;
pub use salvo_sim as sim;
