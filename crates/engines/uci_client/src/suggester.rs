//! Move suggestions with a random fallback

use chess_rules::{Move, Position};
use random_engine::RandomEngine;
use tracing::{debug, info, warn};

use crate::config::UciEngineConfig;
use crate::engine::UciEngine;
use crate::error::SuggestError;

enum EngineSlot {
    /// Not started yet; started on the first request
    Pending,
    Ready(UciEngine),
    /// Failed to start or broke mid-game; only the fallback is used from here
    Unavailable,
}

/// Picks the computer's move.
///
/// The external engine is started lazily. Any failure (missing binary,
/// timeout, closed pipe, or an answer that is not a legal move) falls back
/// to a uniform-random choice among the legal moves. A process-level
/// failure disables the engine for the rest of the session.
pub struct Suggester {
    config: UciEngineConfig,
    slot: EngineSlot,
    fallback: RandomEngine,
}

impl Suggester {
    pub fn new(config: UciEngineConfig) -> Self {
        Self {
            config,
            slot: EngineSlot::Pending,
            fallback: RandomEngine::new(),
        }
    }

    /// Never consults an external engine.
    pub fn random_only() -> Self {
        Self {
            config: UciEngineConfig::default(),
            slot: EngineSlot::Unavailable,
            fallback: RandomEngine::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: RandomEngine) -> Self {
        self.fallback = fallback;
        self
    }

    /// Name of the running external engine, if one is up.
    pub fn engine_name(&self) -> Option<&str> {
        match &self.slot {
            EngineSlot::Ready(engine) => Some(engine.name()),
            _ => None,
        }
    }

    /// True once the engine has failed and only random moves are played.
    pub fn is_fallback_only(&self) -> bool {
        matches!(self.slot, EngineSlot::Unavailable)
    }

    /// Best move for the side to move in `pos`, always an element of `legal`.
    pub fn best_move(&mut self, pos: &Position, legal: &[Move]) -> Result<Move, SuggestError> {
        if legal.is_empty() {
            return Err(SuggestError::NoLegalMoves);
        }
        if let Some(mv) = self.ask_engine(pos, legal) {
            return Ok(mv);
        }
        let mv = self.fallback.pick(legal).ok_or(SuggestError::NoLegalMoves)?;
        debug!(mv = %chess_rules::move_to_uci(mv), "random fallback move");
        Ok(mv)
    }

    /// Forget the previous game on the engine side.
    pub fn new_game(&mut self) {
        let failed = match &mut self.slot {
            EngineSlot::Ready(engine) => engine.new_game().err(),
            _ => None,
        };
        if let Some(e) = failed {
            warn!(error = %e, "external engine failed on new game, disabling it");
            self.slot = EngineSlot::Unavailable;
        }
    }

    fn engine(&mut self) -> Option<&mut UciEngine> {
        if matches!(self.slot, EngineSlot::Pending) {
            self.slot = match UciEngine::start(self.config.clone()) {
                Ok(engine) => {
                    info!(engine = engine.name(), "external engine ready");
                    EngineSlot::Ready(engine)
                }
                Err(e) => {
                    warn!(error = %e, "external engine unavailable, playing random moves");
                    EngineSlot::Unavailable
                }
            };
        }
        match &mut self.slot {
            EngineSlot::Ready(engine) => Some(engine),
            _ => None,
        }
    }

    fn ask_engine(&mut self, pos: &Position, legal: &[Move]) -> Option<Move> {
        let limits = self.config.limits();
        let engine = self.engine()?;
        match engine.suggest(pos, legal, limits) {
            Ok((raw, mv)) => {
                debug!(raw = %raw, "engine suggestion");
                mv
            }
            Err(e) => {
                warn!(error = %e, "external engine failed, disabling it");
                self.slot = EngineSlot::Unavailable;
                None
            }
        }
    }
}
