//! Match configuration and fixed rule constants.
//!
//! Rule constants are fixed per game. Each game copies the ones it needs
//! into its own rules value at construction, so no game reads shared
//! mutable state.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Wins needed to become grand winner in Tic-Tac-Toe.
pub const TIC_TAC_TOE_GOAL: u32 = 5;

/// Wins needed to become grand winner in Twenty-One.
pub const TWENTY_ONE_GOAL: u32 = 5;

/// Wins needed to become grand winner in Rock-Paper-Scissors-Lizard-Spock.
pub const RPSLS_GOAL: u32 = 3;

/// A hand scoring above this is bust.
pub const BUST_THRESHOLD: u32 = 21;

/// The dealer stands once its hand scores at least this much.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// Cards dealt to each hand at the start of a Twenty-One round.
pub const INITIAL_DEAL: usize = 2;

/// When the match asks whether to keep playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayPrompt {
    /// Ask after every round that does not produce a grand winner.
    #[default]
    BetweenRounds,
    /// Play rounds back to back; ask only once a grand winner is reached,
    /// and start a fresh match on "yes".
    AfterMatch,
}

/// Configuration of the match state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round wins needed to become grand winner.
    pub goal: u32,

    /// When to ask for a replay decision.
    pub replay: ReplayPrompt,
}

impl MatchConfig {
    /// Create a config with the given goal, asking between rounds.
    pub fn new(goal: u32) -> Self {
        assert!(goal > 0, "Goal must be at least 1 win");
        Self {
            goal,
            replay: ReplayPrompt::default(),
        }
    }

    /// Set the replay prompt style.
    #[must_use]
    pub fn with_replay(mut self, replay: ReplayPrompt) -> Self {
        self.replay = replay;
        self
    }

    /// Tic-Tac-Toe: first to five, ask between rounds.
    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::new(TIC_TAC_TOE_GOAL)
    }

    /// Twenty-One: first to five, ask between rounds.
    #[must_use]
    pub fn twenty_one() -> Self {
        Self::new(TWENTY_ONE_GOAL)
    }

    /// RPSLS: first to three, ask only after a grand winner.
    #[must_use]
    pub fn rpsls() -> Self {
        Self::new(RPSLS_GOAL).with_replay(ReplayPrompt::AfterMatch)
    }
}

/// Who opens each Tic-Tac-Toe round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstMover {
    Human,
    Opponent,
    /// Ask the human once, before the match starts.
    #[default]
    Choose,
}

impl FirstMover {
    /// The fixed side, if already decided.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            FirstMover::Human => Some(Side::Human),
            FirstMover::Opponent => Some(Side::Opponent),
            FirstMover::Choose => None,
        }
    }
}

/// Pre-match player choices. `None` fields are asked interactively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub human_name: Option<String>,
    pub computer_name: Option<String>,
    pub human_marker: Option<char>,
    pub first_mover: FirstMover,
}

impl PlayerSetup {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.human_marker = Some(marker);
        self
    }

    #[must_use]
    pub fn with_first_mover(mut self, first: FirstMover) -> Self {
        self.first_mover = first;
        self
    }
}
