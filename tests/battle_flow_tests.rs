//! End-to-end battle flow tests.
//!
//! These drive the controller through complete scenarios: defeating enemies,
//! losing the battle, and resetting, verifying the observable state after
//! each command.

use number_battle::{BattleBuilder, BattleController, GuessError, Phase};

fn battle(seed: u64) -> BattleController {
    BattleBuilder::new().build(seed)
}

/// An in-range guess guaranteed to miss. The range never drops below 2, so
/// one of 1 and 2 is always a wrong in-range guess.
fn wrong_guess(battle: &BattleController) -> String {
    if battle.target() == 1 {
        "2".to_string()
    } else {
        "1".to_string()
    }
}

fn hit(battle: &mut BattleController) -> number_battle::GuessOutcome {
    let target = battle.target().to_string();
    battle.submit_guess(&target).unwrap()
}

fn miss(battle: &mut BattleController) -> number_battle::GuessOutcome {
    let guess = wrong_guess(battle);
    battle.submit_guess(&guess).unwrap()
}

/// Two correct guesses defeat the enemy exactly: 100 -> 50 -> 0, then the
/// enemy respawns, the range grows, and the score totals 10 + 10 + 50.
#[test]
fn test_two_hits_defeat_enemy() {
    let mut battle = battle(42);

    let first = hit(&mut battle);
    assert!(first.hit);
    assert!(!first.enemy_defeated);
    assert_eq!(first.enemy_health, 50);
    assert_eq!(first.score, 10);
    assert_eq!(first.range, 2);

    let second = hit(&mut battle);
    assert!(second.hit);
    assert!(second.enemy_defeated);
    assert_eq!(second.enemy_health, 100, "defeated enemy respawns at full health");
    assert_eq!(second.score, 70, "10 + 10 + 50 defeat bonus");
    assert_eq!(second.high_score, 70);
    assert_eq!(second.range, 3);
    assert_eq!(second.healed, 20);
    assert_eq!(second.player_health, 100, "heal is capped at full health");
    assert!((1..=3).contains(&battle.target()), "new target drawn from grown range");
}

/// The defeat heal restores real health when the player is hurt.
#[test]
fn test_defeat_heal_restores_lost_health() {
    let mut battle = battle(42);

    miss(&mut battle);
    miss(&mut battle);
    assert_eq!(battle.snapshot().player_health, 80);

    hit(&mut battle);
    let defeat = hit(&mut battle);
    assert!(defeat.enemy_defeated);
    assert_eq!(defeat.player_health, 100, "80 + 20 heal");
}

/// Ten consecutive misses drain the player from 100 to 0 and end the game;
/// an eleventh guess is rejected without touching state.
#[test]
fn test_ten_misses_end_the_game() {
    let mut battle = battle(42);

    for round in 1..=10 {
        let outcome = miss(&mut battle);
        assert_eq!(outcome.player_health, 100 - 10 * round);
    }

    let snapshot = battle.snapshot();
    assert_eq!(snapshot.player_health, 0);
    assert_eq!(snapshot.phase, Phase::GameOver);

    let guess = battle.target().to_string();
    assert_eq!(battle.submit_guess(&guess), Err(GuessError::GameOver));
    assert_eq!(battle.snapshot(), snapshot, "rejected guess is a no-op");
}

/// The fatal miss itself reports the death.
#[test]
fn test_fatal_miss_outcome() {
    let mut battle = battle(42);
    for _ in 0..9 {
        miss(&mut battle);
    }

    let fatal = miss(&mut battle);
    assert!(fatal.player_dead);
    assert_eq!(fatal.player_health, 0);
    assert_eq!(battle.phase(), Phase::GameOver);
}

/// Reset from any state restores the starting snapshot, except the high
/// score, which survives across runs.
#[test]
fn test_reset_restores_initial_state() {
    let mut battle = battle(42);

    hit(&mut battle);
    hit(&mut battle);
    miss(&mut battle);
    let high_score = battle.snapshot().high_score;
    assert_eq!(high_score, 70);

    let session = battle.reset();
    assert_eq!(session.range, 2);

    let snapshot = battle.snapshot();
    assert_eq!(snapshot.player_health, 100);
    assert_eq!(snapshot.enemy_health, 100);
    assert_eq!(snapshot.range, 2);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.high_score, high_score);
    assert_eq!(snapshot.phase, Phase::AwaitingGuess);
    assert!((1..=2).contains(&battle.target()));
}

/// Reset is the way out of game over.
#[test]
fn test_reset_after_game_over() {
    let mut battle = battle(42);
    for _ in 0..10 {
        miss(&mut battle);
    }
    assert_eq!(battle.phase(), Phase::GameOver);

    battle.reset();
    assert_eq!(battle.phase(), Phase::AwaitingGuess);

    let outcome = hit(&mut battle);
    assert!(outcome.hit);
}

/// The high score never decreases over any sequence of guesses and resets.
#[test]
fn test_high_score_is_monotone() {
    let mut battle = battle(7);
    let mut best = 0;

    for round in 0..3 {
        // A run of varying length, then a reset.
        for _ in 0..(round + 1) * 2 {
            let outcome = hit(&mut battle);
            assert!(outcome.high_score >= best);
            best = outcome.high_score;
        }
        battle.reset();
        assert_eq!(battle.snapshot().high_score, best);
    }
}

/// Range grows by exactly one per defeat, and every fresh target respects
/// the grown range.
#[test]
fn test_range_progression_over_defeats() {
    let mut battle = battle(123);

    for defeats in 1..=5 {
        hit(&mut battle);
        let outcome = hit(&mut battle);
        assert!(outcome.enemy_defeated);
        assert_eq!(outcome.range, 2 + defeats);
        assert!((1..=outcome.range).contains(&battle.target()));
    }
}

/// Identical seeds replay identically.
#[test]
fn test_seeded_battles_replay() {
    let mut a = battle(99);
    let mut b = battle(99);

    for _ in 0..10 {
        assert_eq!(a.target(), b.target());
        let guess = a.target().to_string();
        assert_eq!(a.submit_guess(&guess), b.submit_guess(&guess));
    }
}
