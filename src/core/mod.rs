//! Core game types: players, pieces, dice, RNG, configuration, actions and
//! state.
//!
//! This module holds plain data. Rules live in `rules`, topology in `board`.

pub mod action;
pub mod config;
pub mod dice;
pub mod piece;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::GameConfig;
pub use dice::DiceValue;
pub use piece::{PieceId, PieceIndex, PIECES_PER_PLAYER};
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PendingBonus, Phase, PieceSet, TurnState};
