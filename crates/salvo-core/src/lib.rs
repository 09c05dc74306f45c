//! Core types and definitions for the SALVO artillery duel.
//!
//! This crate defines the vocabulary shared across the other crates:
//! configuration, commands, value types, events, errors, and constants.
//! It has no threads and performs no I/O.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod types;

#[cfg(test)]
mod tests;
