//! The rules engine.
//!
//! `LudoEngine` owns the game state and is the only thing that changes it.
//! Inputs arrive one at a time through the `request_*` methods; each either
//! is refused (state untouched, no effects) or returns the presentation
//! effects it caused.
//!
//! ## Turn cycle
//!
//! ```text
//! AwaitingRoll --roll--> AwaitingPieceSelection --select--> Animating
//!      ^                        |  (nothing eligible:               |
//!      |                        |   turn passes)                    |
//!      +------------------------+-----------------------------------+
//!                       (six, release, bonus: same player)
//! ```
//!
//! A home entry may instead leave the engine in `AwaitingPieceSelection`
//! with a pending bonus, which the same player resolves by choosing a piece.
//!
//! ## Steps
//!
//! Selecting a piece on the board does not move it. The engine enters
//! `Animating` and the caller drives the move with [`LudoEngine::advance_one_step`]
//! (one successor step per call, e.g. from a timer) or finishes it at once
//! with [`LudoEngine::settle`]. Rolls and selections are refused until the
//! move is over.

use im::Vector;
use tracing::{debug, info, trace};

use super::error::{InputRejected, Result};
use super::movement::{MoveKind, Movement, HOME_BONUS_STEPS};
use crate::board::{Board, Position};
use crate::core::{
    Action, ActionRecord, DiceValue, GameConfig, GameRng, GameRngState, GameState, PendingBonus,
    Phase, PieceId, PieceIndex, PieceSet, Player,
};
use crate::presentation::{Effect, EffectBatch};

/// Two-player Ludo rules engine.
#[derive(Clone, Debug)]
pub struct LudoEngine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    /// Pieces the current player may select.
    eligible: PieceSet,
    movement: Option<Movement>,
    history: Vector<ActionRecord>,
    last_winner: Option<Player>,
}

impl LudoEngine {
    /// A fresh game: all pieces in base, `P1` to roll.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(config, GameState::new())
    }

    /// Continue from a prepared state with dice drawn fresh from the
    /// config's seed.
    ///
    /// To continue a saved game with the dice it would have rolled, use
    /// [`LudoEngine::resume`].
    ///
    /// # Panics
    ///
    /// Panics if the state is mid-move (`Animating`), if a position is out of
    /// range, if a bonus is pending for the wrong player or outside a
    /// selection, or if a selection is pending with nothing to select.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, state, rng)
    }

    /// Continue a saved game, dice stream included.
    ///
    /// Pair with [`LudoEngine::state`] and [`LudoEngine::rng_state`] taken
    /// from the engine being saved.
    ///
    /// # Panics
    ///
    /// Same conditions as [`LudoEngine::from_state`].
    #[must_use]
    pub fn resume(config: GameConfig, state: GameState, rng: &GameRngState) -> Self {
        Self::with_rng(config, state, GameRng::from_state(rng))
    }

    fn with_rng(config: GameConfig, state: GameState, rng: GameRng) -> Self {
        assert!(
            state.turn.phase != Phase::Animating,
            "cannot resume a game in the middle of a move"
        );
        for player in Player::ALL {
            for position in state.positions_of(player) {
                assert!(config.board.is_valid(*position), "invalid position {position:?}");
            }
        }
        if let Some(bonus) = state.turn.pending_bonus {
            assert_eq!(
                bonus.player, state.turn.player,
                "bonus pending for a player not on turn"
            );
            assert_eq!(
                state.turn.phase,
                Phase::AwaitingPieceSelection,
                "bonus pending outside a piece selection"
            );
        }

        let mut engine = Self {
            config,
            state,
            rng,
            eligible: PieceSet::new(),
            movement: None,
            history: Vector::new(),
            last_winner: None,
        };

        if engine.state.turn.phase == Phase::AwaitingPieceSelection {
            let player = engine.state.turn.player;
            engine.eligible = match (engine.state.turn.pending_bonus, engine.state.turn.dice) {
                (Some(_), _) => engine.bonus_eligible_pieces(player),
                (None, Some(dice)) => engine.eligible_pieces(player, dice),
                (None, None) => panic!("selection pending without a die or bonus"),
            };
            assert!(
                !engine.eligible.is_empty(),
                "selection pending with no selectable piece"
            );
        }

        engine
    }

    /// Effects that draw the current state from scratch.
    #[must_use]
    pub fn start(&self) -> EffectBatch {
        let mut effects = EffectBatch::new();
        for player in Player::ALL {
            for piece in PieceId::all_of(player) {
                effects.push(Effect::SetPiecePosition {
                    piece,
                    position: self.state.position(piece),
                });
            }
        }
        effects.push(Effect::SetDiceValue(self.state.turn.dice));
        effects.push(Effect::SetTurn(self.state.turn.player));

        match self.state.turn.phase {
            Phase::AwaitingRoll => {
                effects.push(Effect::EnableRollInput);
                effects.push(Effect::ClearHighlights);
            }
            Phase::AwaitingPieceSelection | Phase::Animating => {
                effects.push(Effect::DisableRollInput);
                if self.state.turn.pending_bonus.is_some() {
                    effects.push(Effect::NotifyBonusAvailable(bonus_message(
                        self.state.turn.player,
                    )));
                }
                if !self.eligible.is_empty() {
                    effects.push(Effect::HighlightEligiblePieces {
                        player: self.state.turn.player,
                        pieces: self.eligible.clone(),
                    });
                }
            }
        }

        effects
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.config.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.turn.phase
    }

    /// Player to act.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.turn.player
    }

    /// Pieces the current player may select right now.
    #[must_use]
    pub fn legal_selections(&self) -> &[PieceIndex] {
        match self.state.turn.phase {
            Phase::AwaitingPieceSelection => self.eligible.as_slice(),
            Phase::AwaitingRoll | Phase::Animating => &[],
        }
    }

    /// The move in progress, if any.
    #[must_use]
    pub fn movement(&self) -> Option<&Movement> {
        self.movement.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.movement.is_some()
    }

    /// Winner of the most recently finished game.
    ///
    /// The board is wiped as soon as a game is won, so this is the only
    /// trace of the result left in the engine.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.last_winner
    }

    /// Position of the dice stream, for saving alongside [`LudoEngine::state`].
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Accepted inputs, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Rules queries ===

    /// Pieces of `player` that may move by `dice`.
    ///
    /// A piece qualifies unless it is home, it is in base and the die is not
    /// a six, or it is in its home lane and the die would overshoot home.
    #[must_use]
    pub fn eligible_pieces(&self, player: Player, dice: DiceValue) -> PieceSet {
        self.state.pieces_where(player, |position| match position {
            Position::Home => false,
            Position::Base => dice.is_six(),
            Position::HomeLane(_) => position
                .steps_to_home_in_lane()
                .is_some_and(|left| dice.get() <= left),
            Position::Track(_) => true,
        })
    }

    /// Pieces that may take a home-entry bonus: outside base and not home.
    #[must_use]
    pub fn bonus_eligible_pieces(&self, player: Player) -> PieceSet {
        self.state.pieces_in_play(player)
    }

    // === Input port ===

    /// Roll the die with the engine's RNG.
    pub fn request_roll(&mut self) -> Result<EffectBatch> {
        self.check_can_roll()?;
        let value = self.rng.roll_die();
        Ok(self.apply_roll(value))
    }

    /// Roll with a face decided outside the engine (a physical die, a
    /// replay).
    pub fn request_roll_value(&mut self, value: DiceValue) -> Result<EffectBatch> {
        self.check_can_roll()?;
        Ok(self.apply_roll(value))
    }

    /// Choose a piece for the pending roll or bonus.
    pub fn request_select_piece(&mut self, player: Player, index: u8) -> Result<EffectBatch> {
        if self.movement.is_some() {
            return Err(InputRejected::Animating);
        }
        if self.state.turn.phase != Phase::AwaitingPieceSelection {
            return Err(InputRejected::NotAwaitingSelection);
        }
        let current = self.state.turn.player;
        if player != current {
            return Err(InputRejected::NotYourTurn {
                current,
                requested: player,
            });
        }
        let index = PieceIndex::new(index).ok_or(InputRejected::InvalidPieceIndex(index))?;
        let piece = PieceId::new(player, index);
        if !self.eligible.contains(&index) {
            return Err(InputRejected::PieceNotEligible(piece));
        }

        self.record(Action::SelectPiece(piece));
        self.eligible.clear();

        let mut effects = EffectBatch::new();
        effects.push(Effect::ClearHighlights);

        if self.state.turn.pending_bonus.take().is_some() {
            debug!(%piece, steps = HOME_BONUS_STEPS, "home bonus taken");
            self.begin_movement(Movement::home_bonus(piece));
            return Ok(effects);
        }

        if self.state.position(piece).is_base() {
            let start = self.config.board.start_square(player);
            debug!(%piece, %start, "released from base");
            self.state.place(piece, start);
            effects.push(Effect::SetPiecePosition {
                piece,
                position: start,
            });
            self.await_roll(&mut effects);
            return Ok(effects);
        }

        let dice = self
            .state
            .turn
            .dice
            .unwrap_or_else(|| unreachable!("piece selection without a die"));
        debug!(%piece, %dice, "moving");
        self.begin_movement(Movement::dice(piece, dice));
        Ok(effects)
    }

    /// Start over: every piece to base, `P1` to roll, die cleared.
    pub fn request_reset(&mut self) -> Result<EffectBatch> {
        if self.movement.is_some() {
            return Err(InputRejected::Animating);
        }
        self.record(Action::Reset);

        let mut effects = EffectBatch::new();
        self.reset_game(&mut effects);
        Ok(effects)
    }

    /// Advance the moving piece by one step and resolve whatever that step
    /// ends.
    pub fn advance_one_step(&mut self) -> Result<EffectBatch> {
        let movement = self.movement.take().ok_or(InputRejected::NotAnimating)?;
        Ok(self.step(movement))
    }

    /// Run the move in progress to its end. A no-op when nothing moves.
    pub fn settle(&mut self) -> EffectBatch {
        let mut effects = EffectBatch::new();
        while let Some(movement) = self.movement.take() {
            effects.extend(self.step(movement));
        }
        effects
    }

    /// Rebuild an engine by re-applying recorded inputs to a fresh game.
    ///
    /// Rolls are replayed by face, so the engine's own RNG is not consumed.
    pub fn replay(config: GameConfig, records: &[ActionRecord]) -> Result<Self> {
        let mut engine = Self::new(config);
        for record in records {
            match record.action {
                Action::Roll(value) => {
                    engine.request_roll_value(value)?;
                }
                Action::SelectPiece(piece) => {
                    engine.request_select_piece(piece.player, piece.index.get())?;
                    engine.settle();
                }
                Action::Reset => {
                    engine.request_reset()?;
                }
            }
        }
        Ok(engine)
    }

    // === Transitions ===

    fn check_can_roll(&self) -> Result<()> {
        if self.movement.is_some() {
            return Err(InputRejected::Animating);
        }
        if self.state.turn.phase != Phase::AwaitingRoll {
            return Err(InputRejected::NotAwaitingRoll);
        }
        Ok(())
    }

    fn apply_roll(&mut self, value: DiceValue) -> EffectBatch {
        self.record(Action::Roll(value));

        let player = self.state.turn.player;
        let mut effects = EffectBatch::new();

        self.state.turn.dice = Some(value);
        self.state.turn.phase = Phase::AwaitingPieceSelection;
        effects.push(Effect::SetDiceValue(Some(value)));
        effects.push(Effect::DisableRollInput);

        let eligible = self.eligible_pieces(player, value);
        debug!(%player, dice = %value, eligible = eligible.len(), "rolled");

        if eligible.is_empty() {
            self.pass_turn(&mut effects);
        } else {
            effects.push(Effect::HighlightEligiblePieces {
                player,
                pieces: eligible.clone(),
            });
            self.eligible = eligible;
        }

        effects
    }

    fn begin_movement(&mut self, movement: Movement) {
        self.state.turn.phase = Phase::Animating;
        self.movement = Some(movement);
    }

    fn step(&mut self, mut movement: Movement) -> EffectBatch {
        let mut effects = EffectBatch::new();
        let piece = movement.piece;

        let next = self
            .config
            .board
            .successor(piece.player, self.state.position(piece));
        self.state.place(piece, next);
        effects.push(Effect::SetPiecePosition {
            piece,
            position: next,
        });
        movement.remaining -= 1;
        trace!(%piece, position = %next, remaining = movement.remaining, "step");

        if next.is_home() {
            self.resolve_home_entry(piece, movement.kind, &mut effects);
            return effects;
        }

        if movement.remaining > 0 {
            self.movement = Some(movement);
            return effects;
        }

        let captured = self.capture_check(piece, &mut effects);
        match (movement.kind, captured) {
            (MoveKind::CaptureBonus, true) => {
                debug!(%piece, "capture bonus renewed");
                self.movement = Some(Movement::capture_bonus(piece));
            }
            (_, true) => {
                debug!(%piece, "capture bonus granted");
                self.movement = Some(Movement::capture_bonus(piece));
            }
            (kind, false) if kind.keeps_turn() => self.await_roll(&mut effects),
            (_, false) => self.pass_turn(&mut effects),
        }

        effects
    }

    /// The moving piece just reached home; any steps left are dropped.
    fn resolve_home_entry(&mut self, piece: PieceId, kind: MoveKind, effects: &mut EffectBatch) {
        let player = piece.player;

        if self.state.all_home(player) {
            info!(%player, "game won");
            effects.push(Effect::AnnounceWinner(player));
            self.last_winner = Some(player);
            self.reset_game(effects);
            return;
        }

        let in_play = self.bonus_eligible_pieces(player);
        if !in_play.is_empty() {
            debug!(%piece, candidates = in_play.len(), "home bonus armed");
            self.state.turn.pending_bonus = Some(PendingBonus { player });
            self.state.turn.phase = Phase::AwaitingPieceSelection;
            effects.push(Effect::NotifyBonusAvailable(bonus_message(player)));
            effects.push(Effect::HighlightEligiblePieces {
                player,
                pieces: in_play.clone(),
            });
            self.eligible = in_play;
            return;
        }

        if kind.keeps_turn() {
            self.await_roll(effects);
        } else {
            self.pass_turn(effects);
        }
    }

    /// Send opponent pieces sharing the piece's square back to base, unless
    /// the square is safe. Returns whether anything was captured.
    fn capture_check(&mut self, piece: PieceId, effects: &mut EffectBatch) -> bool {
        let position = self.state.position(piece);
        if !matches!(position, Position::Track(_)) || self.config.board.is_safe(position) {
            return false;
        }

        let opponent = piece.player.opponent();
        let victims = self.state.pieces_where(opponent, |p| p == position);
        for index in &victims {
            let victim = PieceId::new(opponent, *index);
            self.state.place(victim, Position::Base);
            effects.push(Effect::SetPiecePosition {
                piece: victim,
                position: Position::Base,
            });
        }

        if !victims.is_empty() {
            debug!(%piece, %position, captured = victims.len(), "capture");
        }
        !victims.is_empty()
    }

    /// Same player rolls next.
    fn await_roll(&mut self, effects: &mut EffectBatch) {
        self.state.turn.phase = Phase::AwaitingRoll;
        self.eligible.clear();
        effects.push(Effect::EnableRollInput);
        effects.push(Effect::ClearHighlights);
    }

    /// The opponent rolls next.
    fn pass_turn(&mut self, effects: &mut EffectBatch) {
        let next = self.state.turn.player.opponent();
        debug!(from = %self.state.turn.player, to = %next, "turn passes");
        self.state.turn.player = next;
        self.state.advance_turn();
        effects.push(Effect::SetTurn(next));
        self.await_roll(effects);
    }

    fn reset_game(&mut self, effects: &mut EffectBatch) {
        self.state = GameState::new();
        self.eligible.clear();
        self.movement = None;

        for player in Player::ALL {
            for piece in PieceId::all_of(player) {
                effects.push(Effect::SetPiecePosition {
                    piece,
                    position: Position::Base,
                });
            }
        }
        effects.push(Effect::SetDiceValue(None));
        effects.push(Effect::SetTurn(Player::P1));
        self.await_roll(effects);
    }

    fn record(&mut self, action: Action) {
        let sequence = self.state.next_sequence();
        if self.config.record_history {
            self.history.push_back(ActionRecord::new(
                self.state.turn.player,
                action,
                self.state.turn_number,
                sequence,
            ));
        }
    }
}

fn bonus_message(player: Player) -> String {
    format!("{player} reached home: choose a piece to advance {HOME_BONUS_STEPS} squares")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(player: Player, index: u8) -> PieceId {
        PieceId::new(player, PieceIndex::new(index).unwrap())
    }

    fn dice(value: u8) -> DiceValue {
        DiceValue::new(value).unwrap()
    }

    fn engine_with(turn: Player, placements: &[(Player, u8, Position)]) -> LudoEngine {
        let mut state = GameState::new();
        state.turn.player = turn;
        for &(player, index, position) in placements {
            state.place(piece(player, index), position);
        }
        LudoEngine::from_state(GameConfig::new(1), state)
    }

    fn indices(set: &[PieceIndex]) -> Vec<u8> {
        set.iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_eligible_base_needs_six() {
        let engine = LudoEngine::new(GameConfig::new(1));

        for value in 1..6 {
            assert!(engine.eligible_pieces(Player::P1, dice(value)).is_empty());
        }
        assert_eq!(indices(&engine.eligible_pieces(Player::P1, DiceValue::SIX)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_eligible_excludes_home_and_overshoot() {
        let engine = engine_with(
            Player::P1,
            &[
                (Player::P1, 0, Position::Home),
                (Player::P1, 1, Position::HomeLane(3)),
                (Player::P1, 2, Position::Track(40)),
            ],
        );

        // Lane 3 is two steps from home.
        assert_eq!(indices(&engine.eligible_pieces(Player::P1, dice(2))), vec![1, 2]);
        assert_eq!(indices(&engine.eligible_pieces(Player::P1, dice(3))), vec![2]);
        assert_eq!(indices(&engine.eligible_pieces(Player::P1, DiceValue::SIX)), vec![2, 3]);
    }

    #[test]
    fn test_roll_with_nothing_eligible_passes_turn() {
        let mut engine = LudoEngine::new(GameConfig::new(1));

        let effects = engine.request_roll_value(dice(3)).unwrap();

        assert_eq!(engine.current_player(), Player::P2);
        assert_eq!(engine.phase(), Phase::AwaitingRoll);
        assert!(effects.contains(&Effect::SetTurn(Player::P2)));
        assert!(effects.contains(&Effect::EnableRollInput));
        assert_eq!(engine.state().turn.dice, Some(dice(3)));
    }

    #[test]
    fn test_roll_rejected_while_selecting() {
        let mut engine = LudoEngine::new(GameConfig::new(1));
        engine.request_roll_value(DiceValue::SIX).unwrap();
        let before = engine.state().clone();

        assert_eq!(engine.request_roll(), Err(InputRejected::NotAwaitingRoll));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_select_before_roll_rejected() {
        let mut engine = LudoEngine::new(GameConfig::new(1));
        assert_eq!(
            engine.request_select_piece(Player::P1, 0),
            Err(InputRejected::NotAwaitingSelection)
        );
    }

    #[test]
    fn test_select_rejections() {
        let mut engine = engine_with(Player::P1, &[(Player::P1, 1, Position::Track(5))]);
        engine.request_roll_value(dice(2)).unwrap();

        assert_eq!(
            engine.request_select_piece(Player::P2, 1),
            Err(InputRejected::NotYourTurn {
                current: Player::P1,
                requested: Player::P2
            })
        );
        assert_eq!(
            engine.request_select_piece(Player::P1, 7),
            Err(InputRejected::InvalidPieceIndex(7))
        );
        assert_eq!(
            engine.request_select_piece(Player::P1, 0),
            Err(InputRejected::PieceNotEligible(piece(Player::P1, 0)))
        );
        assert_eq!(engine.phase(), Phase::AwaitingPieceSelection);
        assert_eq!(indices(engine.legal_selections()), vec![1]);
    }

    #[test]
    fn test_inputs_rejected_while_animating() {
        let mut engine = engine_with(Player::P1, &[(Player::P1, 0, Position::Track(5))]);
        engine.request_roll_value(dice(4)).unwrap();
        engine.request_select_piece(Player::P1, 0).unwrap();

        assert!(engine.is_animating());
        assert_eq!(engine.phase(), Phase::Animating);
        assert_eq!(engine.request_roll(), Err(InputRejected::Animating));
        assert_eq!(engine.request_select_piece(Player::P1, 0), Err(InputRejected::Animating));
        assert_eq!(engine.request_reset(), Err(InputRejected::Animating));
        assert!(engine.legal_selections().is_empty());
    }

    #[test]
    fn test_step_by_step_movement() {
        let mut engine = engine_with(Player::P1, &[(Player::P1, 0, Position::Track(5))]);
        engine.request_roll_value(dice(3)).unwrap();
        engine.request_select_piece(Player::P1, 0).unwrap();

        let first = engine.advance_one_step().unwrap();
        assert_eq!(
            first.iter().next(),
            Some(&Effect::SetPiecePosition {
                piece: piece(Player::P1, 0),
                position: Position::Track(6)
            })
        );
        assert_eq!(engine.movement().map(|m| m.remaining), Some(2));

        engine.advance_one_step().unwrap();
        engine.advance_one_step().unwrap();

        assert_eq!(engine.state().position(piece(Player::P1, 0)), Position::Track(8));
        assert!(!engine.is_animating());
        assert_eq!(engine.current_player(), Player::P2);
        assert_eq!(engine.advance_one_step(), Err(InputRejected::NotAnimating));
    }

    #[test]
    fn test_capture_sends_all_victims_home() {
        let mut engine = engine_with(
            Player::P1,
            &[
                (Player::P1, 0, Position::Track(5)),
                (Player::P2, 0, Position::Track(7)),
                (Player::P2, 1, Position::Track(7)),
            ],
        );
        let mut effects = EffectBatch::new();
        engine.state.place(piece(Player::P1, 0), Position::Track(7));

        assert!(engine.capture_check(piece(Player::P1, 0), &mut effects));
        assert_eq!(engine.state().position(piece(Player::P2, 0)), Position::Base);
        assert_eq!(engine.state().position(piece(Player::P2, 1)), Position::Base);
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn test_no_capture_on_safe_square() {
        let mut engine = engine_with(
            Player::P1,
            &[
                (Player::P1, 0, Position::Track(8)),
                (Player::P2, 2, Position::Track(8)),
            ],
        );
        let mut effects = EffectBatch::new();

        assert!(!engine.capture_check(piece(Player::P1, 0), &mut effects));
        assert_eq!(engine.state().position(piece(Player::P2, 2)), Position::Track(8));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_own_pieces_never_captured() {
        let mut engine = engine_with(
            Player::P1,
            &[
                (Player::P1, 0, Position::Track(9)),
                (Player::P1, 1, Position::Track(9)),
            ],
        );
        let mut effects = EffectBatch::new();

        assert!(!engine.capture_check(piece(Player::P1, 0), &mut effects));
        assert_eq!(engine.state().position(piece(Player::P1, 1)), Position::Track(9));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = engine_with(Player::P2, &[(Player::P2, 3, Position::Track(30))]);
        engine.request_roll_value(dice(2)).unwrap();

        let effects = engine.request_reset().unwrap();

        assert_eq!(engine.state(), &GameState::new());
        assert!(effects.contains(&Effect::SetDiceValue(None)));
        assert!(effects.contains(&Effect::SetTurn(Player::P1)));
        assert_eq!(effects.iter().filter(|e| e.is_piece_move()).count(), 8);
    }

    #[test]
    fn test_start_draws_whole_board() {
        let engine = LudoEngine::new(GameConfig::new(1));
        let effects = engine.start();

        assert_eq!(effects.iter().filter(|e| e.is_piece_move()).count(), 8);
        assert!(effects.contains(&Effect::EnableRollInput));
        assert!(effects.contains(&Effect::SetTurn(Player::P1)));
    }

    #[test]
    fn test_from_state_restores_selection() {
        let mut state = GameState::new();
        state.place(piece(Player::P2, 2), Position::Track(40));
        state.turn.player = Player::P2;
        state.turn.dice = Some(dice(4));
        state.turn.phase = Phase::AwaitingPieceSelection;

        let engine = LudoEngine::from_state(GameConfig::new(1), state);
        assert_eq!(indices(engine.legal_selections()), vec![2]);
    }

    #[test]
    #[should_panic(expected = "cannot resume a game in the middle of a move")]
    fn test_from_state_rejects_animating() {
        let mut state = GameState::new();
        state.turn.phase = Phase::Animating;
        let _ = LudoEngine::from_state(GameConfig::new(1), state);
    }

    #[test]
    fn test_reset_during_pending_bonus() {
        let mut engine = engine_with(
            Player::P1,
            &[
                (Player::P1, 0, Position::HomeLane(4)),
                (Player::P1, 1, Position::Track(12)),
            ],
        );
        engine.request_roll_value(dice(1)).unwrap();
        engine.request_select_piece(Player::P1, 0).unwrap();
        engine.settle();
        assert!(engine.state().turn.pending_bonus.is_some());

        let effects = engine.request_reset().unwrap();

        assert_eq!(engine.state().turn.pending_bonus, None);
        assert_eq!(engine.phase(), Phase::AwaitingRoll);
        assert!(engine.legal_selections().is_empty());
        assert_eq!(engine.state(), &GameState::new());
        assert!(effects.contains(&Effect::ClearHighlights));
        assert!(effects.contains(&Effect::EnableRollInput));

        engine.request_roll_value(dice(2)).unwrap();
        assert_eq!(engine.current_player(), Player::P2);
    }

    #[test]
    fn test_resume_continues_dice_stream() {
        let mut engine = LudoEngine::new(GameConfig::new(5));
        for _ in 0..10 {
            engine.request_roll_value(dice(1)).unwrap();
        }
        engine.rng.roll_die();
        engine.rng.roll_die();

        let rng = engine.rng_state();
        assert_ne!(rng, GameRng::new(5).state());
        let mut resumed = LudoEngine::resume(GameConfig::new(5), engine.state().clone(), &rng);

        let original_rolls: Vec<_> = (0..5).map(|_| engine.rng.roll_die()).collect();
        let resumed_rolls: Vec<_> = (0..5).map(|_| resumed.rng.roll_die()).collect();

        assert_eq!(original_rolls, resumed_rolls);
        assert_eq!(resumed.state(), engine.state());
        assert_eq!(resumed.rng_state(), engine.rng_state());
    }

    #[test]
    #[should_panic(expected = "selection pending with no selectable piece")]
    fn test_from_state_rejects_bonus_without_pieces_in_play() {
        let mut state = GameState::new();
        state.turn.pending_bonus = Some(PendingBonus { player: Player::P1 });
        state.turn.phase = Phase::AwaitingPieceSelection;
        let _ = LudoEngine::from_state(GameConfig::new(1), state);
    }

    #[test]
    #[should_panic(expected = "selection pending with no selectable piece")]
    fn test_from_state_rejects_selection_with_nothing_eligible() {
        let mut state = GameState::new();
        state.turn.dice = Some(dice(3));
        state.turn.phase = Phase::AwaitingPieceSelection;
        let _ = LudoEngine::from_state(GameConfig::new(1), state);
    }

    #[test]
    #[should_panic(expected = "bonus pending for a player not on turn")]
    fn test_from_state_rejects_bonus_for_other_player() {
        let mut state = GameState::new();
        state.place(piece(Player::P2, 0), Position::Track(30));
        state.turn.pending_bonus = Some(PendingBonus { player: Player::P2 });
        state.turn.phase = Phase::AwaitingPieceSelection;
        let _ = LudoEngine::from_state(GameConfig::new(1), state);
    }

    #[test]
    fn test_history_disabled() {
        let mut engine = LudoEngine::new(GameConfig::new(1).with_history(false));
        engine.request_roll().unwrap();
        assert!(engine.history().is_empty());
    }
}
