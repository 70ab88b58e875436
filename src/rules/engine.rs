//! Round engine trait for game implementations.
//!
//! Each game implements `RoundEngine` to define how one round is played:
//! - Whose turn it is and which moves are legal
//! - How the opponent's heuristic picks a move
//! - When the round is over and who won
//!
//! The match state machine calls into `RoundEngine` but never interprets
//! game-specific concepts directly.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, PlayerIdentity, RandomSource, Side, SideMap};
use crate::io::{DisplaySink, InputProvider};

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    HumanWin,
    OpponentWin,
    Tie,
}

impl RoundOutcome {
    /// Outcome for a round won by `winner`, or a tie for `None`.
    #[must_use]
    pub fn from_winner(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::Human) => RoundOutcome::HumanWin,
            Some(Side::Opponent) => RoundOutcome::OpponentWin,
            None => RoundOutcome::Tie,
        }
    }

    /// The winning side, `None` for a tie.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::HumanWin => Some(Side::Human),
            RoundOutcome::OpponentWin => Some(Side::Opponent),
            RoundOutcome::Tie => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == Some(side)
    }
}

/// Round engine trait.
///
/// ## Implementation Notes
///
/// - `reset` discards the board, hands or deck; identities survive
/// - `play_round` resets, then drives turns until the round is over
/// - Human moves come only from `input`, through the re-asking adapter
/// - Every state change worth showing goes to `display`
pub trait RoundEngine {
    /// Game title for banners and logs.
    fn title(&self) -> &'static str;

    /// Names (and markers) of both sides.
    fn identities(&self) -> &SideMap<PlayerIdentity>;

    /// Reset per-round state for a fresh round.
    fn reset(&mut self);

    /// Play one round to completion.
    fn play_round<I, D, R>(
        &mut self,
        input: &mut I,
        display: &mut D,
        rng: &mut R,
    ) -> Result<RoundOutcome, EngineError>
    where
        I: InputProvider,
        D: DisplaySink,
        R: RandomSource;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_winner() {
        assert_eq!(RoundOutcome::HumanWin.winner(), Some(Side::Human));
        assert_eq!(RoundOutcome::OpponentWin.winner(), Some(Side::Opponent));
        assert_eq!(RoundOutcome::Tie.winner(), None);
    }

    #[test]
    fn test_round_outcome_from_winner() {
        for outcome in [RoundOutcome::HumanWin, RoundOutcome::OpponentWin, RoundOutcome::Tie] {
            assert_eq!(RoundOutcome::from_winner(outcome.winner()), outcome);
        }
    }

    #[test]
    fn test_round_outcome_is_winner() {
        assert!(RoundOutcome::HumanWin.is_winner(Side::Human));
        assert!(!RoundOutcome::HumanWin.is_winner(Side::Opponent));
        assert!(!RoundOutcome::Tie.is_winner(Side::Human));
    }
}
