//! Game configuration.
//!
//! A game is configured once at startup:
//! - `seed`: drives the dice, so a game is reproducible from it
//! - `board`: the topology (only the standard board exists)
//! - `record_history`: whether accepted inputs are kept for replay

use crate::board::Board;

/// Complete game configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Seed for the dice RNG.
    pub seed: u64,

    /// Board topology.
    pub board: Board,

    /// Keep an [`ActionRecord`](super::ActionRecord) for every accepted input.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameConfig {
    /// Create a configuration for the standard board.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            board: Board::standard(),
            record_history: true,
        }
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable action history.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}
