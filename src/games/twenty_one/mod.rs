//! Twenty-One against a fixed-threshold dealer.
//!
//! - Get as close to 21 as possible without going over
//! - 2-10 count face value, Jack and Queen count 10, Ace counts 11 or 1
//! - The dealer draws below 17 and stands from 17 up
//! - First to five round wins is the grand winner

mod card;
mod hand;
mod deck;
mod policy;
mod game;

pub use card::{Rank, Suit};
pub use hand::{Hand, TwentyOneRules, ACE_HIGH, ACE_LOW};
pub use deck::Deck;
pub use policy::{DealerAction, DealerPolicy, TurnChoice};
pub use game::{TablePhase, TwentyOne, DEALER_NAME, PLAYER_NAME};
