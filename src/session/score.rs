//! Per-match win counts.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};
use crate::rules::RoundOutcome;

/// Round wins per side. Lives for one match; ties count for nobody.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    wins: SideMap<u32>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            wins: SideMap::with_value(0),
        }
    }

    #[must_use]
    pub fn get(&self, side: Side) -> u32 {
        self.wins[side]
    }

    /// Count a finished round. Returns the side that scored, if any.
    pub fn record(&mut self, outcome: RoundOutcome) -> Option<Side> {
        let winner = outcome.winner()?;
        self.wins[winner] += 1;
        Some(winner)
    }

    /// The side that has reached `goal` wins.
    ///
    /// Scores grow by one per round, so at most one side can get there
    /// first and the match stops as soon as it does.
    #[must_use]
    pub fn grand_winner(&self, goal: u32) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| self.wins[side] >= goal)
    }

    /// Total rounds won by either side.
    #[must_use]
    pub fn decided_rounds(&self) -> u32 {
        self.wins.iter().map(|(_, wins)| wins).sum()
    }

    /// Both counts, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, u32)> + '_ {
        self.wins.iter().map(|(side, &wins)| (side, wins))
    }
}
