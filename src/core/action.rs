//! Accepted inputs, as recorded in the game history.
//!
//! Every input the engine accepts is stored as an `ActionRecord`. A roll is
//! recorded with the face that came up, so replaying a history does not
//! need the RNG.

use serde::{Deserialize, Serialize};

use super::dice::DiceValue;
use super::piece::PieceId;
use super::player::Player;

/// An input the engine accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The die was rolled and showed this face.
    Roll(DiceValue),
    /// A piece was chosen, for a dice move, a release or a bonus.
    SelectPiece(PieceId),
    /// The board was reset.
    Reset,
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Determinism checks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
