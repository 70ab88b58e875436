//! The three console games.

pub mod tictactoe;
pub mod twenty_one;
pub mod rpsls;
