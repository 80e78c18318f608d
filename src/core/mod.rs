//! Core state holders: health counters, session progression, RNG,
//! configuration.
//!
//! These types carry no knowledge of presentation or input handling; the
//! `engine` module sequences them.

pub mod config;
pub mod health;
pub mod rng;
pub mod session;

pub use config::BattleConfig;
pub use health::{Health, MAX_HEALTH};
pub use rng::{GameRng, GameRngState};
pub use session::Session;
