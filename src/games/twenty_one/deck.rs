//! The shared deck: one rank bucket per suit.
//!
//! Drawing is rejection sampling: pick a suit bucket and a rank uniformly,
//! keep the card if that bucket still holds the rank, otherwise try again.
//! A drawn rank is gone from its bucket until the deck is rebuilt.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use super::card::{Rank, Suit};
use crate::core::{DeckError, RandomSource};

/// A full four-suit deck, reset at every round start.
#[derive(Clone, Debug)]
pub struct Deck {
    buckets: Vec<FxHashSet<Rank>>,
    remaining: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create a full deck.
    #[must_use]
    pub fn new() -> Self {
        let buckets: Vec<FxHashSet<Rank>> = Suit::ALL
            .iter()
            .map(|_| Rank::ALL.into_iter().collect())
            .collect();
        let remaining = buckets.iter().map(FxHashSet::len).sum();
        Self { buckets, remaining }
    }

    /// Refill every bucket.
    pub fn reinitialize(&mut self) {
        *self = Self::new();
    }

    /// Undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Check if at least one card is left to draw.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.remaining > 0
    }

    /// Undrawn cards of one rank across all suits.
    #[must_use]
    pub fn count_of(&self, rank: Rank) -> usize {
        self.buckets.iter().filter(|bucket| bucket.contains(&rank)).count()
    }

    /// Draw one card.
    ///
    /// Fails with `DeckError::Exhausted` on an empty deck instead of
    /// sampling forever.
    pub fn draw_one<R: RandomSource>(&mut self, rng: &mut R) -> Result<Rank, DeckError> {
        if !self.can_draw() {
            return Err(DeckError::Exhausted);
        }

        loop {
            let suit = rng.pick_index(self.buckets.len());
            let rank = Rank::ALL[rng.pick_index(Rank::ALL.len())];
            if self.buckets[suit].remove(&rank) {
                self.remaining -= 1;
                trace!(suit = ?Suit::ALL[suit], %rank, remaining = self.remaining, "card drawn");
                return Ok(rank);
            }
        }
    }

    /// Draw `count` cards. Either all are drawn or, if the deck runs short,
    /// none are.
    pub fn draw<R: RandomSource>(&mut self, count: usize, rng: &mut R) -> Result<SmallVec<[Rank; 4]>, DeckError> {
        if count > self.remaining {
            return Err(DeckError::Exhausted);
        }
        (0..count).map(|_| self.draw_one(rng)).collect()
    }
}
