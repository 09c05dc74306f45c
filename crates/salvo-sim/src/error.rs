//! Session infrastructure errors.
//!
//! Shot computations cannot fail; these only cover thread and channel
//! plumbing plus configurations rejected before a session starts.

use thiserror::Error;

use salvo_core::error::ConfigError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn {name} thread: {source}")]
    Spawn {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("target simulator stopped responding")]
    TargetDisconnected,

    #[error("{0} thread panicked")]
    Panicked(&'static str),
}
