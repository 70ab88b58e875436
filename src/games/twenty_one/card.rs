//! Card ranks and suits.
//!
//! The deck carries twelve ranks per suit: 2 through 10, Jack, Queen and
//! Ace. There is no King.

use serde::{Deserialize, Serialize};

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    Ace,
}

impl Rank {
    /// Every rank in a suit, in order.
    pub const ALL: [Rank; 12] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::Ace,
    ];

    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Jack => write!(f, "Jack"),
            Rank::Queen => write!(f, "Queen"),
            Rank::Ace => write!(f, "Ace"),
            // Pip cards print their number.
            pip => write!(f, "{}", *pip as u8 + 2),
        }
    }
}

/// Deck suit. Suits only separate the rank buckets; they never score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_display() {
        assert_eq!(Rank::Two.to_string(), "2");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::Queen.to_string(), "Queen");
        assert_eq!(Rank::Ace.to_string(), "Ace");
    }

    #[test]
    fn test_only_ace_is_ace() {
        let aces = Rank::ALL.iter().filter(|r| r.is_ace()).count();
        assert_eq!(aces, 1);
    }
}
