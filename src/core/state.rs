//! Game state: piece positions and turn state.
//!
//! ## GameState
//!
//! Everything the rules need to decide the next transition:
//! - Positions of all eight pieces
//! - Whose turn it is, the current die, the phase
//! - A pending home-entry bonus, if one was armed
//!
//! The state is plain data. Only the rules engine moves it between phases;
//! tests and tools may build a position directly with [`GameState::place`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::dice::DiceValue;
use super::piece::{PieceId, PieceIndex, PIECES_PER_PLAYER};
use super::player::{Player, PlayerMap};
use crate::board::Position;

/// Up to four piece indices, without heap allocation.
pub type PieceSet = SmallVec<[PieceIndex; PIECES_PER_PLAYER]>;

/// Where the turn is in its roll / select / move cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to roll.
    #[default]
    AwaitingRoll,
    /// The die is rolled (or a bonus is pending) and a piece must be chosen.
    AwaitingPieceSelection,
    /// A piece is being advanced step by step.
    Animating,
}

/// A home-entry bonus waiting for its owner to choose a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingBonus {
    pub player: Player,
}

/// Turn-level state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player to act.
    pub player: Player,

    /// Face of the last roll this turn, unset after a reset.
    pub dice: Option<DiceValue>,

    /// Current phase.
    pub phase: Phase,

    /// Armed home-entry bonus.
    pub pending_bonus: Option<PendingBonus>,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            player: Player::P1,
            dice: None,
            phase: Phase::AwaitingRoll,
            pending_bonus: None,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    positions: PlayerMap<[Position; PIECES_PER_PLAYER]>,

    /// Turn state.
    pub turn: TurnState,

    /// Turn number (starts at 1, bumps whenever the turn passes).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// All pieces in base, `P1` to roll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: PlayerMap::with_value([Position::Base; PIECES_PER_PLAYER]),
            turn: TurnState::default(),
            turn_number: 1,
            action_sequence: 0,
        }
    }

    // === Positions ===

    /// Current position of a piece.
    #[must_use]
    pub fn position(&self, piece: PieceId) -> Position {
        self.positions[piece.player][piece.index.as_usize()]
    }

    /// Put a piece somewhere. Used by the engine for every move and by
    /// tools that set up a position.
    pub fn place(&mut self, piece: PieceId, position: Position) {
        self.positions[piece.player][piece.index.as_usize()] = position;
    }

    /// All four positions of a player, by piece index.
    #[must_use]
    pub fn positions_of(&self, player: Player) -> &[Position; PIECES_PER_PLAYER] {
        &self.positions[player]
    }

    /// Pieces of `player` matching a predicate on their position.
    pub fn pieces_where(&self, player: Player, pred: impl Fn(Position) -> bool) -> PieceSet {
        PieceIndex::ALL
            .into_iter()
            .filter(|index| pred(self.positions[player][index.as_usize()]))
            .collect()
    }

    /// Pieces outside base and not yet home.
    #[must_use]
    pub fn pieces_in_play(&self, player: Player) -> PieceSet {
        self.pieces_where(player, Position::is_in_play)
    }

    /// Whether all four of the player's pieces are home.
    #[must_use]
    pub fn all_home(&self, player: Player) -> bool {
        self.positions[player].iter().all(|p| p.is_home())
    }

    // === Turn Advancement ===

    /// Advance to next turn.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}
