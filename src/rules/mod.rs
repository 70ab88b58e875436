//! Round engine trait for game implementations.
//!
//! Games implement `RoundEngine` to define:
//! - Legal moves for each state
//! - How the computer side chooses
//! - When a round ends and who won it

pub mod engine;

pub use engine::{RoundEngine, RoundOutcome};
