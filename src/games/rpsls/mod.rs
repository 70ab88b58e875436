//! Rock, Paper, Scissors, Lizard, Spock against a random computer.
//!
//! Scissors cuts paper, paper covers rock, rock crushes lizard, lizard
//! poisons Spock, Spock smashes scissors, scissors decapitates lizard,
//! lizard eats paper, paper disproves Spock, Spock vaporizes rock, and rock
//! crushes scissors. First to three round wins is the grand winner.

mod gesture;
mod game;

pub use gesture::{BeatsGraph, Gesture};
pub use game::{Rpsls, COMPUTER_NAMES};
