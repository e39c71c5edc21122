//! Piece positions.

use serde::{Deserialize, Serialize};

/// Number of shared track squares (`0..52`, circular).
pub const TRACK_LEN: u8 = 52;

/// Number of private home-lane squares before the home position.
pub const HOME_LANE_LEN: u8 = 5;

/// Where a piece is.
///
/// These four variants are the only legal categories; a piece moves between
/// them only through the movement rules. Payloads are range-checked by the
/// constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// The piece's own base slot, off the track.
    Base,
    /// A shared track square in `0..TRACK_LEN`.
    Track(u8),
    /// A private home-lane square in `0..HOME_LANE_LEN`.
    HomeLane(u8),
    /// Terminal square. The piece is out of play.
    Home,
}

impl Position {
    /// A shared track square.
    ///
    /// # Panics
    ///
    /// Panics if `square >= TRACK_LEN`.
    #[must_use]
    pub fn track(square: u8) -> Self {
        assert!(square < TRACK_LEN, "track square {square} out of range");
        Position::Track(square)
    }

    /// A home-lane square.
    ///
    /// # Panics
    ///
    /// Panics if `step >= HOME_LANE_LEN`.
    #[must_use]
    pub fn home_lane(step: u8) -> Self {
        assert!(step < HOME_LANE_LEN, "home lane step {step} out of range");
        Position::HomeLane(step)
    }

    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Position::Base)
    }

    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    /// On the track or in the home lane.
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        matches!(self, Position::Track(_) | Position::HomeLane(_))
    }

    /// Steps left to the home position, if the piece is in its home lane
    /// (or already home).
    #[must_use]
    pub const fn steps_to_home_in_lane(self) -> Option<u8> {
        match self {
            Position::HomeLane(step) => Some(HOME_LANE_LEN - step),
            Position::Home => Some(0),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Base => write!(f, "base"),
            Position::Track(square) => write!(f, "track {square}"),
            Position::HomeLane(step) => write!(f, "lane {step}"),
            Position::Home => write!(f, "home"),
        }
    }
}
