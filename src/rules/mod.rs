//! The Ludo rules engine.
//!
//! - `engine`: [`LudoEngine`], the turn state machine and movement rules
//! - `movement`: in-flight moves and bonus step counts
//! - `error`: why an input was refused

pub mod engine;
pub mod error;
pub mod movement;

pub use engine::LudoEngine;
pub use error::{InputRejected, Result};
pub use movement::{MoveKind, Movement, CAPTURE_BONUS_STEPS, HOME_BONUS_STEPS};
