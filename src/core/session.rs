//! Session progression: guessing range, secret target, score keeping.
//!
//! A `Session` owns the difficulty state of one play-through:
//!
//! - `range`: upper bound of the guessable interval `[1, range]`, grows by
//!   one step per defeated enemy and never shrinks within a run
//! - `target`: the secret integer, re-drawn after each defeat and on reset
//! - `score` / `high_score`: current score and the running maximum over all
//!   history; `high_score` survives `reset`

use tracing::debug;

use super::config::BattleConfig;
use super::rng::GameRng;

/// Difficulty and scoring state for one play-through.
#[derive(Clone, Debug)]
pub struct Session {
    range: i64,
    target: i64,
    score: i64,
    high_score: i64,
    rng: GameRng,
}

impl Session {
    /// Create a session at the configured starting range and draw the first
    /// target.
    #[must_use]
    pub fn new(config: &BattleConfig, rng: GameRng) -> Self {
        let mut session = Self {
            range: config.starting_range,
            target: 0,
            score: 0,
            high_score: 0,
            rng,
        };
        session.generate_target();
        session
    }

    /// Upper bound of the current guessing interval `[1, range]`.
    #[must_use]
    pub fn range(&self) -> i64 {
        self.range
    }

    /// The secret target. Exposed so tests and debug tooling can drive
    /// deterministic scenarios; a presentation layer has no business reading it.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Highest score reached over all history, including previous runs.
    #[must_use]
    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    /// Draw a new target uniformly from `[1, range]`.
    pub fn generate_target(&mut self) {
        self.target = self.rng.gen_range(1..=self.range);
        debug!(target: "number_battle.session", range = self.range, "new target drawn");
    }

    /// Check a guess against the secret target. Does not mutate state.
    #[must_use]
    pub fn check_guess(&self, guess: i64) -> bool {
        guess == self.target
    }

    /// Check whether a guess lies inside the guessable interval.
    #[must_use]
    pub fn in_range(&self, guess: i64) -> bool {
        (1..=self.range).contains(&guess)
    }

    /// Grow the range by one step after an enemy defeat.
    pub fn increase_range(&mut self, step: i64) {
        self.range += step;
    }

    /// Add points to the score, refreshing the high score.
    ///
    /// The high score is the maximum of the score over all history, so it is
    /// refreshed on every addition, bonus points included.
    pub fn add_score(&mut self, points: i64) {
        self.score += points;
        self.high_score = self.high_score.max(self.score);
    }

    /// Reset range and score to their starting values and draw a fresh
    /// target. The high score is left untouched.
    pub fn reset(&mut self, config: &BattleConfig) {
        self.range = config.starting_range;
        self.score = 0;
        self.generate_target();
    }
}
