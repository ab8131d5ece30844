pub mod board;
pub mod checks;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use checks::*;
pub use fen::FenError;
pub use movegen::*;
pub use notation::{MoveLog, notation};
pub use perft::perft;
pub use types::*;
pub use uci::*;

use std::time::Duration;

/// How long a suggester may think about one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub move_time: Duration,
}

impl SearchLimits {
    pub fn move_time(move_time: Duration) -> Self {
        Self { move_time }
    }
}
