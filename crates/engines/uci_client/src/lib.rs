//! External UCI engine client
//!
//! Drives a third-party engine process (Stockfish by default) over the UCI
//! text protocol and turns its `bestmove` answers into moves from the legal
//! list. [`Suggester`] wraps the client with a uniform-random fallback so a
//! missing or misbehaving engine never stalls a game.

mod config;
mod engine;
mod error;
mod process;
mod suggester;

pub use config::UciEngineConfig;
pub use engine::UciEngine;
pub use error::{SuggestError, UciClientError};
pub use process::UciProcess;
pub use suggester::Suggester;
