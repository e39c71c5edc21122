//! The presentation port and a recording implementation.

use rustc_hash::FxHashMap;

use super::effect::Effect;
use crate::board::Position;
use crate::core::{DiceValue, PieceId, PieceIndex, PieceSet, Player};

/// Write-only interface to whatever draws the game.
///
/// Implementations render the board, the die and notifications. They may
/// stagger piece moves in real time; the engine does not care.
pub trait PresentationPort {
    fn set_dice_value(&mut self, value: Option<DiceValue>);

    fn set_turn(&mut self, player: Player);

    fn set_piece_position(&mut self, piece: PieceId, position: Position);

    fn highlight_eligible_pieces(&mut self, player: Player, pieces: &[PieceIndex]);

    fn clear_highlights(&mut self);

    fn enable_roll_input(&mut self);

    fn disable_roll_input(&mut self);

    fn notify_bonus_available(&mut self, message: &str);

    fn announce_winner(&mut self, player: Player);
}

/// Port that records every call and keeps the resulting view.
///
/// Useful for headless front-ends and for asserting on what a player
/// would see.
#[derive(Clone, Debug, Default)]
pub struct RecordingPort {
    calls: Vec<Effect>,
    dice: Option<DiceValue>,
    turn: Option<Player>,
    pieces: FxHashMap<PieceId, Position>,
    highlighted: Option<(Player, PieceSet)>,
    roll_enabled: bool,
    notifications: Vec<String>,
    winners: Vec<Player>,
}

impl RecordingPort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received, in order.
    #[must_use]
    pub fn calls(&self) -> &[Effect] {
        &self.calls
    }

    #[must_use]
    pub fn dice_value(&self) -> Option<DiceValue> {
        self.dice
    }

    #[must_use]
    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    /// Last drawn position of a piece, if it was ever drawn.
    #[must_use]
    pub fn piece_position(&self, piece: PieceId) -> Option<Position> {
        self.pieces.get(&piece).copied()
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&(Player, PieceSet)> {
        self.highlighted.as_ref()
    }

    #[must_use]
    pub fn roll_enabled(&self) -> bool {
        self.roll_enabled
    }

    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    #[must_use]
    pub fn winners(&self) -> &[Player] {
        &self.winners
    }

    /// Forget recorded calls but keep the current view.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl PresentationPort for RecordingPort {
    fn set_dice_value(&mut self, value: Option<DiceValue>) {
        self.calls.push(Effect::SetDiceValue(value));
        self.dice = value;
    }

    fn set_turn(&mut self, player: Player) {
        self.calls.push(Effect::SetTurn(player));
        self.turn = Some(player);
    }

    fn set_piece_position(&mut self, piece: PieceId, position: Position) {
        self.calls.push(Effect::SetPiecePosition { piece, position });
        self.pieces.insert(piece, position);
    }

    fn highlight_eligible_pieces(&mut self, player: Player, pieces: &[PieceIndex]) {
        let pieces = PieceSet::from_slice(pieces);
        self.calls.push(Effect::HighlightEligiblePieces {
            player,
            pieces: pieces.clone(),
        });
        self.highlighted = Some((player, pieces));
    }

    fn clear_highlights(&mut self) {
        self.calls.push(Effect::ClearHighlights);
        self.highlighted = None;
    }

    fn enable_roll_input(&mut self) {
        self.calls.push(Effect::EnableRollInput);
        self.roll_enabled = true;
    }

    fn disable_roll_input(&mut self) {
        self.calls.push(Effect::DisableRollInput);
        self.roll_enabled = false;
    }

    fn notify_bonus_available(&mut self, message: &str) {
        self.calls.push(Effect::NotifyBonusAvailable(message.to_string()));
        self.notifications.push(message.to_string());
    }

    fn announce_winner(&mut self, player: Player) {
        self.calls.push(Effect::AnnounceWinner(player));
        self.winners.push(player);
    }
}
