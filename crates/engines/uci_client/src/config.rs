use std::path::PathBuf;
use std::time::Duration;

use chess_rules::SearchLimits;
use serde::Deserialize;

/// How to launch and drive the external engine.
///
/// Every field has a default, so an empty `[engine]` table (or none at all)
/// means "stockfish from `PATH`, skill 10, half a second per move".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UciEngineConfig {
    /// Executable tried first
    pub path: PathBuf,
    /// Further locations tried in order when `path` cannot be started
    pub candidates: Vec<PathBuf>,
    /// Extra command line arguments
    pub args: Vec<String>,
    /// Value for the `Skill Level` option (0-20)
    pub skill_level: u8,
    pub threads: u32,
    /// Thinking time per move
    pub move_time_ms: u64,
    /// Optional depth cap sent alongside the move time
    pub depth: Option<u32>,
    /// Budget for `uciok`/`readyok` and the grace added on top of the move time
    pub handshake_timeout_ms: u64,
}

impl Default for UciEngineConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("stockfish"),
            candidates: vec![
                PathBuf::from("/usr/games/stockfish"),
                PathBuf::from("/usr/local/bin/stockfish"),
                PathBuf::from("/opt/homebrew/bin/stockfish"),
            ],
            args: Vec::new(),
            skill_level: 10,
            threads: 4,
            move_time_ms: 500,
            depth: None,
            handshake_timeout_ms: 5_000,
        }
    }
}

impl UciEngineConfig {
    /// Executables in the order they are tried.
    pub fn executables(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.path).chain(self.candidates.iter())
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits::move_time(Duration::from_millis(self.move_time_ms))
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_millis(self.handshake_timeout_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
