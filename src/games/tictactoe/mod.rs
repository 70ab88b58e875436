//! Tic-Tac-Toe against a threat-aware computer.
//!
//! - Squares are numbered 1-9, left to right, top to bottom
//! - Three in a row, column or diagonal wins the round
//! - The computer wins if it can, blocks if it must, then likes the center
//! - First to five round wins is the grand winner

mod board;
mod lines;
mod policy;
mod game;

pub use board::{Board, OpenSquares, Square, SQUARE_COUNT};
pub use lines::{GridStatus, Line, WinLines};
pub use policy::{CascadeRule, Decision, ThreatPolicy};
pub use game::{TicTacToe, TurnPhase, COMPUTER_NAME, HUMAN_NAME};
