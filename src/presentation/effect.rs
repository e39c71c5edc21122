//! Presentation effects.
//!
//! Every engine operation returns the effects it produced, in order. An
//! effect is a single write to the presentation layer; the engine never
//! reads anything back.

use serde::{Deserialize, Serialize};

use super::port::PresentationPort;
use crate::board::Position;
use crate::core::{DiceValue, PieceId, PieceSet, Player};

/// A single presentation update.
///
/// ## Turn and dice
///
/// - `SetDiceValue`: show the rolled face, or clear it after a reset
/// - `SetTurn`: show whose turn it is
/// - `EnableRollInput` / `DisableRollInput`: gate the roll control
///
/// ## Pieces
///
/// - `SetPiecePosition`: draw a piece at a new position (one per step)
/// - `HighlightEligiblePieces` / `ClearHighlights`: selection hints
///
/// ## Notifications
///
/// - `NotifyBonusAvailable`: a home-entry bonus awaits a piece choice
/// - `AnnounceWinner`: the game is over
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    SetDiceValue(Option<DiceValue>),
    SetTurn(Player),
    SetPiecePosition {
        piece: PieceId,
        position: Position,
    },
    HighlightEligiblePieces {
        player: Player,
        pieces: PieceSet,
    },
    ClearHighlights,
    EnableRollInput,
    DisableRollInput,
    NotifyBonusAvailable(String),
    AnnounceWinner(Player),
}

impl Effect {
    /// Forward this effect to a presentation port.
    pub fn apply<P: PresentationPort + ?Sized>(&self, port: &mut P) {
        match self {
            Effect::SetDiceValue(value) => port.set_dice_value(*value),
            Effect::SetTurn(player) => port.set_turn(*player),
            Effect::SetPiecePosition { piece, position } => {
                port.set_piece_position(*piece, *position)
            }
            Effect::HighlightEligiblePieces { player, pieces } => {
                port.highlight_eligible_pieces(*player, pieces)
            }
            Effect::ClearHighlights => port.clear_highlights(),
            Effect::EnableRollInput => port.enable_roll_input(),
            Effect::DisableRollInput => port.disable_roll_input(),
            Effect::NotifyBonusAvailable(message) => port.notify_bonus_available(message),
            Effect::AnnounceWinner(player) => port.announce_winner(*player),
        }
    }

    /// Whether this effect moves a piece.
    #[must_use]
    pub fn is_piece_move(&self) -> bool {
        matches!(self, Effect::SetPiecePosition { .. })
    }
}

/// Ordered effects produced by one engine operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBatch {
    effects: Vec<Effect>,
}

impl EffectBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect.
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Append every effect of another batch.
    pub fn extend(&mut self, other: EffectBatch) {
        self.effects.extend(other.effects);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    /// Whether any effect in the batch equals `effect`.
    #[must_use]
    pub fn contains(&self, effect: &Effect) -> bool {
        self.effects.contains(effect)
    }

    /// Forward every effect, in order, to a presentation port.
    pub fn apply_to<P: PresentationPort + ?Sized>(&self, port: &mut P) {
        for effect in &self.effects {
            effect.apply(port);
        }
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl<'a> IntoIterator for &'a EffectBatch {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}
