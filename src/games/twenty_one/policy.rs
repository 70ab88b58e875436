//! Dealer policy and the human's turn choice.

use serde::{Deserialize, Serialize};

use super::hand::{Hand, TwentyOneRules};

/// What the human asks for on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnChoice {
    Hit,
    Stay,
}

/// What the dealer does next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealerAction {
    Hit,
    Stand,
}

/// Fixed-threshold dealer: draw below the stand threshold, stand at or
/// above it. A bust hand is already above it, so it never draws again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealerPolicy {
    stand_at: u32,
}

impl DealerPolicy {
    #[must_use]
    pub fn new(rules: &TwentyOneRules) -> Self {
        Self {
            stand_at: rules.dealer_stand,
        }
    }

    /// Decide from a normalized score.
    #[must_use]
    pub fn decide(&self, score: u32) -> DealerAction {
        if score < self.stand_at {
            DealerAction::Hit
        } else {
            DealerAction::Stand
        }
    }

    /// Decide for a hand.
    #[must_use]
    pub fn decide_hand(&self, hand: &Hand, rules: &TwentyOneRules) -> DealerAction {
        self.decide(hand.score(rules))
    }
}
