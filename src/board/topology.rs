//! Fixed board topology: start squares, turning points, safe squares and
//! the successor function.
//!
//! ## Layout
//!
//! | | P1 | P2 |
//! |---|---|---|
//! | start square | 0 | 26 |
//! | turning point | 50 | 24 |
//!
//! Both players walk the same 52-square loop. On reaching its turning point
//! a piece leaves the loop for its private five-square home lane, and the
//! step after the last lane square is home.
//!
//! ## Square ids
//!
//! Presentation layers address cells by number: track squares are `0..=51`,
//! base slots `500..=503` (P1) and `600..=603` (P2), home lanes `100..=104`
//! and `200..=204`, home `105` and `205`.

use rustc_hash::FxHashSet;

use super::position::{Position, HOME_LANE_LEN, TRACK_LEN};
use crate::core::{PieceId, Player, PlayerMap};

const STANDARD_SAFE_SQUARES: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// The board every game is played on.
#[derive(Clone, Debug)]
pub struct Board {
    start_squares: PlayerMap<u8>,
    turning_points: PlayerMap<u8>,
    safe_squares: FxHashSet<u8>,
    base_ids: PlayerMap<u16>,
    lane_ids: PlayerMap<u16>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// The standard two-player board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            start_squares: PlayerMap::new(|p| match p {
                Player::P1 => 0,
                Player::P2 => 26,
            }),
            turning_points: PlayerMap::new(|p| match p {
                Player::P1 => 50,
                Player::P2 => 24,
            }),
            safe_squares: STANDARD_SAFE_SQUARES.into_iter().collect(),
            base_ids: PlayerMap::new(|p| match p {
                Player::P1 => 500,
                Player::P2 => 600,
            }),
            lane_ids: PlayerMap::new(|p| match p {
                Player::P1 => 100,
                Player::P2 => 200,
            }),
        }
    }

    /// Square a piece released from base lands on.
    #[must_use]
    pub fn start_square(&self, player: Player) -> Position {
        Position::track(self.start_squares[player])
    }

    /// Last shared square before the player's home lane.
    #[must_use]
    pub fn turning_point(&self, player: Player) -> u8 {
        self.turning_points[player]
    }

    /// Whether captures are forbidden at this position.
    ///
    /// Only track squares can be safe; home lanes are private, so the
    /// question never arises there.
    #[must_use]
    pub fn is_safe(&self, position: Position) -> bool {
        match position {
            Position::Track(square) => self.safe_squares.contains(&square),
            _ => false,
        }
    }

    /// The safe squares, in ascending order.
    #[must_use]
    pub fn safe_squares(&self) -> Vec<u8> {
        let mut squares: Vec<_> = self.safe_squares.iter().copied().collect();
        squares.sort_unstable();
        squares
    }

    /// Position one step further along the player's route.
    ///
    /// # Panics
    ///
    /// Pieces in base or at home never step; calling this for them is an
    /// invariant violation.
    #[must_use]
    pub fn successor(&self, player: Player, position: Position) -> Position {
        match position {
            Position::Track(square) if square == self.turning_points[player] => {
                Position::HomeLane(0)
            }
            Position::Track(square) if square == TRACK_LEN - 1 => Position::Track(0),
            Position::Track(square) => Position::track(square + 1),
            Position::HomeLane(step) if step + 1 == HOME_LANE_LEN => Position::Home,
            Position::HomeLane(step) => Position::home_lane(step + 1),
            Position::Base | Position::Home => {
                unreachable!("successor of {position} for {player}")
            }
        }
    }

    /// Total successor steps from `position` to home, or `None` for base.
    #[must_use]
    pub fn distance_to_home(&self, player: Player, position: Position) -> Option<u32> {
        match position {
            Position::Base => None,
            Position::Track(square) => {
                let to_turn = (i32::from(self.turning_points[player]) - i32::from(square))
                    .rem_euclid(i32::from(TRACK_LEN)) as u32;
                Some(to_turn + 1 + u32::from(HOME_LANE_LEN))
            }
            Position::HomeLane(step) => Some(u32::from(HOME_LANE_LEN - step)),
            Position::Home => Some(0),
        }
    }

    /// Whether the position's payload is in range.
    #[must_use]
    pub fn is_valid(&self, position: Position) -> bool {
        match position {
            Position::Base | Position::Home => true,
            Position::Track(square) => square < TRACK_LEN,
            Position::HomeLane(step) => step < HOME_LANE_LEN,
        }
    }

    /// Numeric cell id for a piece at a position.
    #[must_use]
    pub fn square_id(&self, piece: PieceId, position: Position) -> u16 {
        match position {
            Position::Base => self.base_ids[piece.player] + u16::from(piece.index.get()),
            Position::Track(square) => u16::from(square),
            Position::HomeLane(step) => self.lane_ids[piece.player] + u16::from(step),
            Position::Home => self.lane_ids[piece.player] + u16::from(HOME_LANE_LEN),
        }
    }

    /// Inverse of [`Board::square_id`]. Returns `None` for cells the piece
    /// can never occupy (another slot's base, the opponent's lane).
    #[must_use]
    pub fn position_from_square_id(&self, piece: PieceId, id: u16) -> Option<Position> {
        let base = self.base_ids[piece.player];
        let lane = self.lane_ids[piece.player];

        if id < u16::from(TRACK_LEN) {
            Some(Position::track(id as u8))
        } else if id == base + u16::from(piece.index.get()) {
            Some(Position::Base)
        } else if (lane..lane + u16::from(HOME_LANE_LEN)).contains(&id) {
            Some(Position::home_lane((id - lane) as u8))
        } else if id == lane + u16::from(HOME_LANE_LEN) {
            Some(Position::Home)
        } else {
            None
        }
    }
}
