//! Computer opponent for Tic-Tac-Toe.
//!
//! A one-ply rule cascade, evaluated in strict priority order:
//!
//! 1. **Offense**: complete our own two-in-a-line.
//! 2. **Defense**: block the other side's two-in-a-line.
//! 3. **Center**: take square 5 if it is open.
//! 4. **Random**: any open square, uniformly.
//!
//! This is not a minimax search. A double threat (two lines each one move
//! from completion) cannot be covered in one move and will lose.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, Square};
use super::lines::WinLines;
use crate::core::{RandomSource, Side};

/// Which rule of the cascade produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CascadeRule {
    Offense,
    Defense,
    Center,
    Random,
}

/// A chosen square and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub square: Square,
    pub rule: CascadeRule,
}

/// Threat-aware heuristic policy.
#[derive(Clone, Debug, Default)]
pub struct ThreatPolicy {
    lines: WinLines,
}

impl ThreatPolicy {
    /// Create a policy that scans the given lines.
    #[must_use]
    pub fn new(lines: WinLines) -> Self {
        Self { lines }
    }

    /// Choose a square for `me`.
    ///
    /// Returns `None` only when the board is full.
    pub fn choose<R: RandomSource>(&self, board: &Board, me: Side, rng: &mut R) -> Option<Decision> {
        let decision = if let Some(square) = self.lines.threat(board, me) {
            Decision { square, rule: CascadeRule::Offense }
        } else if let Some(square) = self.lines.threat(board, me.other()) {
            Decision { square, rule: CascadeRule::Defense }
        } else if board.is_open(Square::CENTER) {
            Decision { square: Square::CENTER, rule: CascadeRule::Center }
        } else {
            let open = board.open_squares();
            let square = *rng.choose(&open)?;
            Decision { square, rule: CascadeRule::Random }
        };

        debug!(
            square = decision.square.number(),
            rule = ?decision.rule,
            "computer chose square"
        );
        Some(decision)
    }
}
