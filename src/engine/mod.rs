//! Guess resolution engine.
//!
//! `BattleController` is the single entry point for a presentation layer:
//! explicit commands in (`submit_guess`, `reset`), plain outcome values out.
//! No callbacks, no UI handles.

pub mod controller;
pub mod error;
pub mod outcome;
pub mod phase;

pub use controller::{BattleBuilder, BattleController};
pub use error::GuessError;
pub use outcome::{BattleSnapshot, GuessOutcome, SessionSnapshot};
pub use phase::Phase;
