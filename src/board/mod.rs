//! Board topology and piece positions.
//!
//! The board is fixed: a 52-square shared loop, a start square and a
//! turning point per player, five private home-lane squares and a home
//! position. Nothing here mutates game state; the rules engine asks the
//! board where a piece goes next and whether a square is safe.

mod position;
mod topology;

pub use position::{Position, HOME_LANE_LEN, TRACK_LEN};
pub use topology::Board;
