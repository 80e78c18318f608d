//! # number-battle
//!
//! A turn-based number-guessing battle engine.
//!
//! The player guesses a secret integer in `[1, range]`. A correct guess
//! damages the enemy; an incorrect one damages the player. Every defeated
//! enemy heals the player, pays a score bonus, and grows the range by one,
//! so runs get harder the longer they last. The battle ends when the
//! player's health reaches zero.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The core exposes explicit commands (`submit_guess`,
//!    `reset`) that return plain outcome values. Presentation layers render
//!    from those values and from derived `ViewCue` lists; the core never
//!    touches widgets.
//!
//! 2. **Deterministic When Asked**: Targets come from a seedable ChaCha8
//!    RNG. Tests inject fixed seeds; normal play seeds from entropy.
//!
//! 3. **Synchronous Resolution**: Each accepted guess mutates state exactly
//!    once and resolves completely before returning. Pacing delays are
//!    presentation data (`ViewCue::Pause`), not core behavior.
//!
//! ## Modules
//!
//! - `core`: health counters, session progression, RNG, configuration
//! - `engine`: the battle controller, phases, outcomes, errors
//! - `view`: presentation cues derived from outcomes

pub mod core;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use crate::core::{BattleConfig, GameRng, GameRngState, Health, Session, MAX_HEALTH};

pub use crate::engine::{
    BattleBuilder, BattleController, BattleSnapshot, GuessError, GuessOutcome, Phase,
    SessionSnapshot,
};

pub use crate::view::{cue_for_rejection, cues_for_outcome, cues_for_reset, Cues, Tone, ViewCue};
