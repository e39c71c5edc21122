//! In-flight piece movement.
//!
//! A movement is a piece plus a count of steps left. The engine consumes it
//! one step at a time; what happens when the count runs out depends on why
//! the piece was moving.

use serde::{Deserialize, Serialize};

use crate::core::{DiceValue, PieceId};

/// Steps granted to another piece when one piece reaches home.
pub const HOME_BONUS_STEPS: u8 = 10;

/// Steps granted to a piece that captured.
pub const CAPTURE_BONUS_STEPS: u8 = 20;

/// Why a piece is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// An ordinary move by the rolled face.
    Dice(DiceValue),
    /// The home-entry bonus.
    HomeBonus,
    /// The capture bonus. Renews when its last step captures again.
    CaptureBonus,
}

impl MoveKind {
    /// Whether the mover keeps the turn once the move is over, absent any
    /// capture or bonus. Only a dice move of less than six gives it up.
    #[must_use]
    pub const fn keeps_turn(self) -> bool {
        match self {
            MoveKind::Dice(value) => value.is_six(),
            MoveKind::HomeBonus | MoveKind::CaptureBonus => true,
        }
    }
}

/// A piece partway through a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub piece: PieceId,
    pub remaining: u8,
    pub kind: MoveKind,
}

impl Movement {
    #[must_use]
    pub fn dice(piece: PieceId, value: DiceValue) -> Self {
        Self {
            piece,
            remaining: value.get(),
            kind: MoveKind::Dice(value),
        }
    }

    #[must_use]
    pub fn home_bonus(piece: PieceId) -> Self {
        Self {
            piece,
            remaining: HOME_BONUS_STEPS,
            kind: MoveKind::HomeBonus,
        }
    }

    #[must_use]
    pub fn capture_bonus(piece: PieceId) -> Self {
        Self {
            piece,
            remaining: CAPTURE_BONUS_STEPS,
            kind: MoveKind::CaptureBonus,
        }
    }
}
