//! Battle controller: command dispatch over the core state holders.
//!
//! The controller owns the player and enemy health counters and the session,
//! and sequences one guess at a time:
//!
//! 1. Reject if the battle is over.
//! 2. Parse and range-check the raw input; rejection mutates nothing.
//! 3. Hit: damage the enemy, award score. A defeated enemy pays a bonus,
//!    heals the player, respawns at full health, and grows the range with a
//!    freshly drawn target.
//! 4. Miss: damage the player.
//! 5. A dead player moves the battle to `Phase::GameOver`.
//!
//! Each accepted guess mutates state exactly once and returns a complete
//! `GuessOutcome` for the presentation layer.

use tracing::info;

use crate::core::{BattleConfig, GameRng, Health, Session};

use super::error::GuessError;
use super::outcome::{BattleSnapshot, GuessOutcome, SessionSnapshot};
use super::phase::Phase;

/// Coordinates player, enemy, and session state for one battle.
#[derive(Clone, Debug)]
pub struct BattleController {
    config: BattleConfig,
    player: Health,
    enemy: Health,
    session: Session,
    phase: Phase,
}

/// Builder for creating a `BattleController`.
pub struct BattleBuilder {
    config: BattleConfig,
}

impl Default for BattleBuilder {
    fn default() -> Self {
        Self {
            config: BattleConfig::default(),
        }
    }
}

impl BattleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration instead of the classic rules.
    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a controller with a deterministic target sequence.
    pub fn build(self, seed: u64) -> BattleController {
        self.config.validate();
        BattleController::new(self.config, GameRng::new(seed))
    }

    /// Build a controller seeded from OS entropy.
    pub fn build_from_entropy(self) -> BattleController {
        self.config.validate();
        BattleController::new(self.config, GameRng::from_entropy())
    }
}

impl BattleController {
    /// Create a controller with an explicit RNG.
    #[must_use]
    pub fn new(config: BattleConfig, rng: GameRng) -> Self {
        Self {
            config,
            player: Health::full(),
            enemy: Health::full(),
            session: Session::new(&config, rng),
            phase: Phase::AwaitingGuess,
        }
    }

    /// The configuration this battle runs under.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The secret target, for deterministic test scenarios.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.session.target()
    }

    /// Submit a raw guess for resolution.
    ///
    /// Rejected submissions (malformed input, out-of-range input, or any
    /// guess after game over) leave all state untouched.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.phase.is_game_over() {
            return Err(GuessError::GameOver);
        }

        let guess: i64 = raw.trim().parse().map_err(|_| GuessError::InvalidInput {
            range: self.session.range(),
        })?;
        if !self.session.in_range(guess) {
            return Err(GuessError::InvalidInput {
                range: self.session.range(),
            });
        }

        Ok(self.resolve_guess(guess))
    }

    fn resolve_guess(&mut self, guess: i64) -> GuessOutcome {
        let hit = self.session.check_guess(guess);
        let mut enemy_defeated = false;
        let mut damage_to_enemy = 0;
        let mut damage_to_player = 0;
        let mut healed = 0;

        if hit {
            damage_to_enemy = self.config.hit_damage;
            self.enemy.take_damage(damage_to_enemy);
            self.session.add_score(self.config.hit_score);

            if self.enemy.is_dead() {
                enemy_defeated = true;
                self.session.add_score(self.config.defeat_bonus);

                healed = self.config.defeat_heal;
                self.player.heal(healed);

                self.enemy.reset();
                self.session.increase_range(self.config.range_step);
                self.session.generate_target();
                info!(
                    target: "number_battle.engine",
                    range = self.session.range(),
                    score = self.session.score(),
                    "enemy defeated"
                );
            }
        } else {
            damage_to_player = self.config.miss_damage;
            self.player.take_damage(damage_to_player);
        }

        let player_dead = self.player.is_dead();
        if player_dead {
            self.phase = Phase::GameOver;
            info!(
                target: "number_battle.engine",
                score = self.session.score(),
                high_score = self.session.high_score(),
                "player defeated, game over"
            );
        }

        GuessOutcome {
            guess,
            hit,
            enemy_defeated,
            player_dead,
            range: self.session.range(),
            score: self.session.score(),
            high_score: self.session.high_score(),
            player_health: self.player.value(),
            enemy_health: self.enemy.value(),
            damage_to_enemy,
            damage_to_player,
            healed,
        }
    }

    /// Reset the battle to its initial state.
    ///
    /// Player and enemy return to full health, the range and score to their
    /// starting values, and a fresh target is drawn. The high score survives.
    pub fn reset(&mut self) -> SessionSnapshot {
        self.player.reset();
        self.enemy.reset();
        self.session.reset(&self.config);
        self.phase = Phase::AwaitingGuess;
        info!(
            target: "number_battle.engine",
            range = self.session.range(),
            "battle reset"
        );
        SessionSnapshot {
            range: self.session.range(),
        }
    }

    /// Capture the full observable state.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            player_health: self.player.value(),
            enemy_health: self.enemy.value(),
            range: self.session.range(),
            score: self.session.score(),
            high_score: self.session.high_score(),
            phase: self.phase,
        }
    }
}
