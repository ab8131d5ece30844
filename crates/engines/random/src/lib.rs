//! Random Move Chess Engine
//!
//! Selects a move uniformly at random from the legal moves it is handed.
//! Serves as the fallback whenever the external engine is unavailable or
//! answers with something that does not match a legal move.

use chess_rules::Move;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A chess engine that plays random legal moves.
///
/// It never builds moves of its own: the answer is always an element of the
/// legal list passed to [`RandomEngine::pick`].
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of picks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice among `legal`; `None` only when the list is empty.
    pub fn pick(&mut self, legal: &[Move]) -> Option<Move> {
        legal.choose(&mut self.rng).copied()
    }
}
