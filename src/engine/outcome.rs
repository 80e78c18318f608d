//! View-model values emitted by the controller.
//!
//! The presentation layer consumes these as plain data and re-renders; the
//! core never reaches into UI state. Outcomes carry everything a view needs
//! (post-resolution health, applied amounts, score) so no follow-up queries
//! are required to repaint after a guess.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Result of resolving one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// The parsed guess that was resolved.
    pub guess: i64,
    /// Whether the guess matched the target.
    pub hit: bool,
    /// Whether this guess finished off the enemy.
    pub enemy_defeated: bool,
    /// Whether the player died on this guess.
    pub player_dead: bool,
    /// Range upper bound after resolution (grown if the enemy was defeated).
    pub range: i64,
    /// Score after resolution.
    pub score: i64,
    /// High score after resolution.
    pub high_score: i64,
    /// Player health after resolution.
    pub player_health: i64,
    /// Enemy health after resolution. 100 again if the enemy was defeated
    /// and replaced.
    pub enemy_health: i64,
    /// Damage applied to the enemy (0 on a miss).
    pub damage_to_enemy: i64,
    /// Damage applied to the player (0 on a hit).
    pub damage_to_player: i64,
    /// Heal granted to the player (0 unless the enemy was defeated).
    /// Health itself clamps at 100, so less may have been applied.
    pub healed: i64,
}

/// Session summary returned by `reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Range upper bound of the fresh session.
    pub range: i64,
}

/// Full observable state of the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    /// Player health in `[0, 100]`.
    pub player_health: i64,
    /// Enemy health in `[0, 100]`.
    pub enemy_health: i64,
    /// Current range upper bound.
    pub range: i64,
    /// Current score.
    pub score: i64,
    /// High score over all history.
    pub high_score: i64,
    /// Current phase.
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        let outcome = GuessOutcome {
            guess: 1,
            hit: true,
            enemy_defeated: false,
            player_dead: false,
            range: 2,
            score: 10,
            high_score: 10,
            player_health: 100,
            enemy_health: 50,
            damage_to_enemy: 50,
            damage_to_player: 0,
            healed: 0,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: GuessOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = BattleSnapshot {
            player_health: 70,
            enemy_health: 50,
            range: 4,
            score: 130,
            high_score: 200,
            phase: Phase::AwaitingGuess,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: BattleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
