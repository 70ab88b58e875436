//! Hands and the value normalizer.
//!
//! Every rank has a fixed value except the Ace, worth 11 or 1. A hand's
//! score adds up the fixed values first, then settles each Ace greedily:
//! 11 while that keeps the running total at or under the bust threshold,
//! 1 from then on. Once one Ace drops to 1 every later Ace does too, so the
//! order of the Aces never matters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Rank;
use crate::core::{BUST_THRESHOLD, DEALER_STAND_THRESHOLD, INITIAL_DEAL};

/// Value of an Ace counted high.
pub const ACE_HIGH: u32 = 11;

/// Value of an Ace counted low.
pub const ACE_LOW: u32 = 1;

/// Twenty-One rule constants, owned by each table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwentyOneRules {
    /// Scores above this are bust.
    pub bust: u32,
    /// The dealer stands at or above this score.
    pub dealer_stand: u32,
    /// Cards dealt to each hand at round start.
    pub initial_deal: usize,
    values: FxHashMap<Rank, u32>,
}

impl Default for TwentyOneRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl TwentyOneRules {
    /// Bust over 21, dealer stands on 17, two-card deal, face cards 10.
    #[must_use]
    pub fn standard() -> Self {
        let values = Rank::ALL
            .into_iter()
            .filter(|rank| !rank.is_ace())
            .map(|rank| {
                let value = match rank {
                    Rank::Jack | Rank::Queen => 10,
                    pip => pip as u32 + 2,
                };
                (rank, value)
            })
            .collect();

        Self {
            bust: BUST_THRESHOLD,
            dealer_stand: DEALER_STAND_THRESHOLD,
            initial_deal: INITIAL_DEAL,
            values,
        }
    }

    /// Fixed value of a rank; `None` for the Ace.
    #[must_use]
    pub fn value(&self, rank: Rank) -> Option<u32> {
        self.values.get(&rank).copied()
    }

    /// Normalized score of a run of cards.
    #[must_use]
    pub fn score(&self, cards: &[Rank]) -> u32 {
        let (aces, fixed): (Vec<Rank>, Vec<Rank>) = cards.iter().partition(|rank| rank.is_ace());
        let base: u32 = fixed.iter().filter_map(|&rank| self.value(rank)).sum();

        aces.iter().fold(base, |total, _| {
            if total + ACE_HIGH <= self.bust {
                total + ACE_HIGH
            } else {
                total + ACE_LOW
            }
        })
    }
}

/// Cards held by one side during a round. Append-only until the next deal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Rank; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawn card.
    pub fn push(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Cards in the order drawn.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// First card dealt, the one the dealer shows face up.
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    /// Normalized score.
    #[must_use]
    pub fn score(&self, rules: &TwentyOneRules) -> u32 {
        rules.score(&self.cards)
    }

    /// Check if the score is over the bust threshold.
    #[must_use]
    pub fn is_bust(&self, rules: &TwentyOneRules) -> bool {
        self.score(rules) > rules.bust
    }

    /// Drop every card for a fresh deal.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Rank> for Hand {
    fn from_iter<T: IntoIterator<Item = Rank>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
