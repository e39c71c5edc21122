//! Rejected inputs.
//!
//! An input that does not fit the current state is refused without touching
//! the state and without producing any effect. Callers that treat refusal as
//! a silent no-op can simply drop the error.

use thiserror::Error;

use crate::core::{PieceId, Player};

pub type Result<T, E = InputRejected> = std::result::Result<T, E>;

/// Why an input was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputRejected {
    #[error("a roll is only accepted while awaiting a roll")]
    NotAwaitingRoll,

    #[error("no piece selection is pending")]
    NotAwaitingSelection,

    #[error("it is {current}'s turn, not {requested}'s")]
    NotYourTurn { current: Player, requested: Player },

    #[error("piece {0} cannot be selected now")]
    PieceNotEligible(PieceId),

    #[error("piece index {0} out of range")]
    InvalidPieceIndex(u8),

    #[error("a piece is still moving")]
    Animating,

    #[error("no piece is moving")]
    NotAnimating,
}
