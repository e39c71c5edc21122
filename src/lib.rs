//! # ludo-engine
//!
//! Rules engine for two-player Ludo.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `LudoEngine` owns the game state and is the only
//!    code that changes it. Inputs are processed one at a time to completion.
//!
//! 2. **Effects, not side effects**: every operation returns the
//!    presentation effects it caused. Nothing is drawn as a by-product of
//!    assigning a field.
//!
//! 3. **Discrete steps**: a move is a sequence of single successor steps
//!    driven by the caller, so animation timing stays out of the rules.
//!
//! 4. **Deterministic**: dice come from a seeded ChaCha8 stream and every
//!    accepted input is recorded, so a game can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: players, pieces, dice, RNG, configuration, actions, state
//! - `board`: positions, topology, successor function, safe squares
//! - `presentation`: effects and the presentation port
//! - `rules`: the engine
//!
//! ## Example
//!
//! ```
//! use ludo_engine::core::{DiceValue, GameConfig, Phase, Player};
//! use ludo_engine::rules::LudoEngine;
//!
//! let mut engine = LudoEngine::new(GameConfig::new(7));
//!
//! // Only a six releases a piece.
//! engine.request_roll_value(DiceValue::SIX).unwrap();
//! engine.request_select_piece(Player::P1, 0).unwrap();
//!
//! // Release does not pass the turn.
//! assert_eq!(engine.current_player(), Player::P1);
//! assert_eq!(engine.phase(), Phase::AwaitingRoll);
//! ```

pub mod board;
pub mod core;
pub mod presentation;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, DiceValue, GameConfig, GameRng, GameRngState, GameState, PendingBonus,
    Phase, PieceId, PieceIndex, Player, PlayerMap, TurnState,
};

pub use crate::board::{Board, Position};

pub use crate::presentation::{Effect, EffectBatch, PresentationPort, RecordingPort};

pub use crate::rules::{InputRejected, LudoEngine, MoveKind, Movement};
