//! Presentation cues derived from outcomes.
//!
//! The core never touches widgets. Instead, each outcome can be turned into
//! an ordered list of `ViewCue` values — log lines, floating popups, an
//! attack flash, a pacing pause — that any presentation layer replays in
//! order. A terminal front end might print the log lines and ignore the
//! rest; a graphical one can animate all of them.
//!
//! The pause cue is where the fixed ~0.5 s beat between the strike and the
//! defeat consequences lives. It is presentation data only; the core has
//! already resolved everything by the time cues are derived.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::engine::{GuessError, GuessOutcome, SessionSnapshot};

/// Suggested pacing pause before defeat consequences are rendered.
pub const DEFEAT_PAUSE_MS: u64 = 500;

/// Visual tone of a floating popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    /// Something bad happened to the player (red in the classic skin).
    Damage,
    /// Something good happened to the player (lime in the classic skin).
    Heal,
}

/// One presentation step. Cues are replayed in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCue {
    /// Append a line to the battle log.
    Log(String),
    /// Show a floating popup near the player.
    Popup { text: String, tone: Tone },
    /// Flash the player's attack sprite.
    AttackFlash,
    /// Hold for `DEFEAT_PAUSE_MS` before the next cue.
    Pause,
}

/// Cue list for one outcome. Defeat outcomes produce the most cues (five).
pub type Cues = SmallVec<[ViewCue; 5]>;

/// Derive the presentation cues for a resolved guess.
#[must_use]
pub fn cues_for_outcome(outcome: &GuessOutcome) -> Cues {
    let mut cues = Cues::new();

    if outcome.hit {
        cues.push(ViewCue::AttackFlash);
        cues.push(ViewCue::Log(format!(
            "Hit! The enemy lost {} HP.",
            outcome.damage_to_enemy
        )));
        if outcome.enemy_defeated {
            cues.push(ViewCue::Pause);
            cues.push(ViewCue::Popup {
                text: format!("+{} HP", outcome.healed),
                tone: Tone::Heal,
            });
            cues.push(ViewCue::Log(format!(
                "Enemy defeated! New range: 1-{}",
                outcome.range
            )));
        }
    } else {
        cues.push(ViewCue::Popup {
            text: format!("-{} HP", outcome.damage_to_player),
            tone: Tone::Damage,
        });
        cues.push(ViewCue::Log(format!(
            "Miss! You lost {} HP.",
            outcome.damage_to_player
        )));
    }

    if outcome.player_dead {
        cues.push(ViewCue::Log("You're out of HP! Game Over!".to_string()));
    }

    cues
}

/// Derive the presentation cues for a fresh battle.
#[must_use]
pub fn cues_for_reset(snapshot: &SessionSnapshot) -> Cues {
    let mut cues = Cues::new();
    cues.push(ViewCue::Log(format!("New game! Range: 1-{}", snapshot.range)));
    cues
}

/// Derive the re-entry prompt for a rejected guess.
#[must_use]
pub fn cue_for_rejection(error: &GuessError) -> ViewCue {
    ViewCue::Log(error.to_string())
}
