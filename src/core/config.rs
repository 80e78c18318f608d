//! Battle configuration.
//!
//! All tunable numbers live in `BattleConfig`. The defaults reproduce the
//! classic rules exactly: two hits defeat an enemy, a miss costs 10 HP, a
//! defeat heals 20 HP and grows the guessing range by one.

use serde::{Deserialize, Serialize};

use super::health::MAX_HEALTH;

/// Tunable battle parameters.
///
/// ## Example
///
/// ```
/// use number_battle::core::BattleConfig;
///
/// let config = BattleConfig::default();
/// assert_eq!(config.hits_to_defeat(), 2);
///
/// let brutal = BattleConfig::default().with_miss_damage(25);
/// assert_eq!(brutal.miss_damage, 25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Damage dealt to the enemy on a correct guess.
    pub hit_damage: i64,
    /// Damage dealt to the player on an incorrect guess.
    pub miss_damage: i64,
    /// Score awarded for a correct guess.
    pub hit_score: i64,
    /// Bonus score awarded when an enemy is defeated.
    pub defeat_bonus: i64,
    /// Health restored to the player when an enemy is defeated.
    pub defeat_heal: i64,
    /// Upper bound of the guessing range at session start. At least 2.
    pub starting_range: i64,
    /// Range growth per defeated enemy.
    pub range_step: i64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            hit_damage: 50,
            miss_damage: 10,
            hit_score: 10,
            defeat_bonus: 50,
            defeat_heal: 20,
            starting_range: 2,
            range_step: 1,
        }
    }
}

impl BattleConfig {
    /// Set the damage dealt to the enemy per hit.
    #[must_use]
    pub fn with_hit_damage(mut self, damage: i64) -> Self {
        self.hit_damage = damage;
        self
    }

    /// Set the damage dealt to the player per miss.
    #[must_use]
    pub fn with_miss_damage(mut self, damage: i64) -> Self {
        self.miss_damage = damage;
        self
    }

    /// Set the starting range upper bound.
    #[must_use]
    pub fn with_starting_range(mut self, range: i64) -> Self {
        self.starting_range = range;
        self
    }

    /// Number of hits required to defeat a full-health enemy.
    #[must_use]
    pub fn hits_to_defeat(&self) -> i64 {
        (MAX_HEALTH + self.hit_damage - 1) / self.hit_damage
    }

    /// Check configuration invariants.
    ///
    /// Panics on nonsensical values. Called by the builder before a
    /// controller is constructed.
    pub fn validate(&self) {
        assert!(self.hit_damage > 0, "hit damage must be positive");
        assert!(self.miss_damage > 0, "miss damage must be positive");
        assert!(self.hit_score >= 0, "hit score must be non-negative");
        assert!(self.defeat_bonus >= 0, "defeat bonus must be non-negative");
        assert!(self.defeat_heal >= 0, "defeat heal must be non-negative");
        assert!(self.starting_range >= 2, "starting range must be at least 2");
        assert!(self.range_step >= 1, "range step must be at least 1");
    }
}
