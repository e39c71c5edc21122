//! Piece identification.
//!
//! Every player owns four pieces, addressed by `(player, index)` with the
//! index in `0..4`. Piece `i` always returns to base slot `i` of its owner.
//!
//! ```
//! use ludo_engine::core::{PieceId, PieceIndex, Player};
//!
//! let piece = PieceId::new(Player::P2, PieceIndex::new(3).unwrap());
//! assert_eq!(piece.player, Player::P2);
//! assert_eq!(piece.index.get(), 3);
//!
//! assert!(PieceIndex::new(4).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::Player;

/// Number of pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 4;

/// Index of a piece within its owner's set, always in `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PieceIndex(u8);

impl PieceIndex {
    /// All four indices in order.
    pub const ALL: [PieceIndex; PIECES_PER_PLAYER] =
        [PieceIndex(0), PieceIndex(1), PieceIndex(2), PieceIndex(3)];

    /// Create a piece index. Returns `None` outside `0..4`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PIECES_PER_PLAYER {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into per-piece arrays.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for PieceIndex {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PieceIndex::new(index).ok_or_else(|| format!("piece index {index} out of range"))
    }
}

impl From<PieceIndex> for u8 {
    fn from(index: PieceIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for PieceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A specific piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub player: Player,
    pub index: PieceIndex,
}

impl PieceId {
    #[must_use]
    pub const fn new(player: Player, index: PieceIndex) -> Self {
        Self { player, index }
    }

    /// All four pieces of a player.
    pub fn all_of(player: Player) -> impl Iterator<Item = PieceId> {
        PieceIndex::ALL.into_iter().map(move |index| PieceId { player, index })
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.player, self.index)
    }
}
