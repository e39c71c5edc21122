//! Presentation port.
//!
//! The engine describes what changed as a batch of [`Effect`]s. A front-end
//! applies the batch to its [`PresentationPort`]; rendering, dice pips and
//! step animation timing all live on that side.
//!
//! ## Example Usage
//!
//! ```
//! use ludo_engine::core::GameConfig;
//! use ludo_engine::presentation::RecordingPort;
//! use ludo_engine::rules::LudoEngine;
//!
//! let mut engine = LudoEngine::new(GameConfig::new(42));
//! let mut port = RecordingPort::new();
//!
//! engine.start().apply_to(&mut port);
//! assert!(port.roll_enabled());
//!
//! let effects = engine.request_roll().expect("roll accepted");
//! effects.apply_to(&mut port);
//! assert!(port.dice_value().is_some());
//! ```

mod effect;
mod port;

pub use effect::{Effect, EffectBatch};
pub use port::{PresentationPort, RecordingPort};
