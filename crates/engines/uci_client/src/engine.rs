use chess_rules::{parse_uci_move, Move, Position, SearchLimits};
use tracing::warn;

use crate::config::UciEngineConfig;
use crate::error::UciClientError;
use crate::process::UciProcess;

/// An external UCI engine ready to answer move requests.
pub struct UciEngine {
    process: UciProcess,
    config: UciEngineConfig,
}

impl UciEngine {
    /// Spawn the engine and complete the handshake.
    pub fn start(config: UciEngineConfig) -> Result<Self, UciClientError> {
        let process = UciProcess::spawn(&config)?;
        Ok(Self { process, config })
    }

    /// Engine name for display.
    pub fn name(&self) -> &str {
        self.process.name()
    }

    /// Raw `bestmove` token for `pos`.
    pub fn request(
        &mut self,
        pos: &Position,
        limits: SearchLimits,
    ) -> Result<String, UciClientError> {
        let grace = self.config.handshake_timeout();
        self.process
            .go(&pos.to_fen(), limits.move_time, self.config.depth, grace)
    }

    /// Suggested move resolved against `legal`; `None` alongside the raw answer
    /// when it does not name one of them.
    pub fn suggest(
        &mut self,
        pos: &Position,
        legal: &[Move],
        limits: SearchLimits,
    ) -> Result<(String, Option<Move>), UciClientError> {
        let raw = self.request(pos, limits)?;
        let mv = match parse_uci_move(legal, &raw) {
            Ok(mv) => Some(mv),
            Err(e) => {
                warn!(raw = %raw, error = %e, "engine suggestion does not match a legal move");
                None
            }
        };
        Ok((raw, mv))
    }

    /// Tell the engine a new game starts and wait until it is ready again.
    pub fn new_game(&mut self) -> Result<(), UciClientError> {
        let timeout = self.config.handshake_timeout();
        self.process.send("ucinewgame")?;
        self.process.sync(timeout)
    }
}
