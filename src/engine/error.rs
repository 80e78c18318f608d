//! Guess submission errors.
//!
//! The only failable operation in the core is submitting a guess. Both
//! error cases are recovered locally by the caller and mutate no state.

use thiserror::Error;

/// A rejected guess submission.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    /// Input did not parse as an integer, or fell outside the guessable
    /// interval. The message doubles as the user-facing re-entry prompt.
    #[error("Enter a number between 1-{range}")]
    InvalidInput {
        /// Current range upper bound, for the prompt.
        range: i64,
    },

    /// The player is dead; guesses are rejected until reset.
    #[error("You're out of HP! Game Over!")]
    GameOver,
}
