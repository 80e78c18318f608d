//! Clamped health counters.
//!
//! Both combatants carry a `Health` value bounded to `[0, MAX_HEALTH]`.
//! All mutation goes through `take_damage` / `heal` / `reset`, which keep the
//! bound; there is no way to construct or reach an out-of-range value.
//!
//! State values are `i64` throughout the crate.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full health for any combatant. Death is reaching 0.
pub const MAX_HEALTH: i64 = 100;

/// A health counter clamped to `[0, MAX_HEALTH]`.
///
/// Pure value semantics: no side effects beyond the stored number.
///
/// ## Example
///
/// ```
/// use number_battle::core::{Health, MAX_HEALTH};
///
/// let mut hp = Health::full();
/// hp.take_damage(50);
/// assert_eq!(hp.value(), 50);
///
/// hp.heal(75);
/// assert_eq!(hp.value(), MAX_HEALTH); // clamped
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Health(i64);

impl Health {
    /// Create a counter at full health.
    #[must_use]
    pub const fn full() -> Self {
        Self(MAX_HEALTH)
    }

    /// Current health value, always in `[0, MAX_HEALTH]`.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Reduce health by `amount`, clamping at 0.
    pub fn take_damage(&mut self, amount: i64) {
        self.0 = (self.0 - amount).clamp(0, MAX_HEALTH);
        debug!(target: "number_battle.health", health = self.0, amount, "damage taken");
    }

    /// Increase health by `amount`, clamping at `MAX_HEALTH`.
    pub fn heal(&mut self, amount: i64) {
        self.0 = (self.0 + amount).clamp(0, MAX_HEALTH);
        debug!(target: "number_battle.health", health = self.0, amount, "healed");
    }

    /// Check whether health has run out.
    #[must_use]
    pub const fn is_dead(self) -> bool {
        self.0 <= 0
    }

    /// Restore to full health.
    pub fn reset(&mut self) {
        self.0 = MAX_HEALTH;
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, MAX_HEALTH)
    }
}
