use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures talking to the engine process.
#[derive(Debug, Error)]
pub enum UciClientError {
    #[error("failed to start engine {path:?}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("engine I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("engine did not send {expected} within {waited:?}")]
    Timeout {
        expected: &'static str,
        waited: Duration,
    },
    #[error("engine closed its output")]
    Closed,
    #[error("malformed engine reply: {0:?}")]
    Protocol(String),
}

/// Asking for a move where none exists.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SuggestError {
    #[error("no legal moves to choose from")]
    NoLegalMoves,
}
