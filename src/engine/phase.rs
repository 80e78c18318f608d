//! Guess-resolution phases.
//!
//! Resolution itself is synchronous, so the transient states of the guess
//! state machine (resolving, enemy defeated, player miss) never persist
//! between commands; they surface as fields on `GuessOutcome`. Only two
//! phases are observable between commands:
//!
//! - `AwaitingGuess`: the controller accepts guesses
//! - `GameOver`: the player is dead; guesses are rejected until reset

use serde::{Deserialize, Serialize};

/// Persistent phase of the battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting guesses.
    #[default]
    AwaitingGuess,
    /// Player health reached zero; only reset is accepted.
    GameOver,
}

impl Phase {
    /// Check whether the battle has ended.
    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingGuess => write!(f, "awaiting guess"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}
