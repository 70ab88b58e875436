//! Winning lines and the terminal detector.
//!
//! Lines are scanned in a fixed order: rows top to bottom, columns left to
//! right, then the two diagonals. Wherever more than one line qualifies,
//! the first one in that order is the one reported.

use serde::{Deserialize, Serialize};

use super::board::{Board, Square};
use crate::core::Side;

/// Three squares that win when held by one side.
pub type Line = [Square; 3];

const STANDARD_LINES: [[u8; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// State of a board as seen by the terminal detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridStatus {
    /// At least one square is empty and no line is complete.
    InProgress,
    /// `side` holds every square of `line`.
    Won { side: Side, line: Line },
    /// Board full, no complete line.
    Tie,
}

impl GridStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GridStatus::InProgress)
    }
}

/// The eight winning lines of a 3×3 board, owned by each game instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLines {
    lines: Vec<Line>,
}

impl Default for WinLines {
    fn default() -> Self {
        Self::standard()
    }
}

impl WinLines {
    /// Rows, columns, diagonals.
    #[must_use]
    pub fn standard() -> Self {
        let lines = STANDARD_LINES
            .iter()
            .map(|numbers| numbers.map(|n| Square::new(n).expect("standard lines use squares 1-9")))
            .collect();
        Self { lines }
    }

    /// Lines in scan order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// First line held entirely by one side, with that side.
    #[must_use]
    pub fn winning_line(&self, board: &Board) -> Option<(Side, Line)> {
        self.lines.iter().find_map(|line| {
            let owner = board.get(line[0])?;
            line.iter()
                .all(|&sq| board.get(sq) == Some(owner))
                .then_some((owner, *line))
        })
    }

    /// Classify the board: won, tied, or still in progress.
    #[must_use]
    pub fn status(&self, board: &Board) -> GridStatus {
        if let Some((side, line)) = self.winning_line(board) {
            GridStatus::Won { side, line }
        } else if board.is_full() {
            GridStatus::Tie
        } else {
            GridStatus::InProgress
        }
    }

    /// Empty square of the first line where `side` holds two squares and
    /// the third is empty.
    ///
    /// Taking it wins for `side`; for the other side, taking it blocks.
    #[must_use]
    pub fn threat(&self, board: &Board, side: Side) -> Option<Square> {
        self.lines.iter().find_map(|line| {
            let held = line.iter().filter(|&&sq| board.get(sq) == Some(side)).count();
            let mut open = line.iter().copied().filter(|&sq| board.is_open(sq));
            match (held, open.next(), open.next()) {
                (2, Some(square), None) => Some(square),
                _ => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    #[test]
    fn test_standard_has_eight_lines() {
        let lines = WinLines::standard();
        assert_eq!(lines.lines().len(), 8);
        assert_eq!(lines.lines()[0], [sq(1), sq(2), sq(3)]);
        assert_eq!(lines.lines()[7], [sq(3), sq(5), sq(7)]);
    }

    #[test]
    fn test_each_line_wins() {
        let lines = WinLines::standard();
        for line in lines.lines() {
            let mut board = Board::new();
            for &square in line {
                board.place(square, Side::Opponent).unwrap();
            }
            assert_eq!(
                lines.status(&board),
                GridStatus::Won { side: Side::Opponent, line: *line }
            );
        }
    }

    #[test]
    fn test_tie_on_full_board() {
        // H O H
        // H O O
        // O H H
        let board = Board::from_picture("HOHHOOOHH");
        assert_eq!(WinLines::standard().status(&board), GridStatus::Tie);
    }

    #[test]
    fn test_in_progress() {
        let board = Board::from_picture("HO.......");
        let status = WinLines::standard().status(&board);
        assert_eq!(status, GridStatus::InProgress);
        assert!(!status.is_over());
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        // H H H
        // O O H
        // H O O
        let board = Board::from_picture("HHHOOHHOO");
        assert!(matches!(
            WinLines::standard().status(&board),
            GridStatus::Won { side: Side::Human, .. }
        ));
    }

    #[test]
    fn test_threat_first_line_wins_tie_break() {
        // O O .
        // O . .
        // . . .
        // Row 1 (square 3) comes before column 1 (square 7).
        let board = Board::from_picture("OO.O.....");
        assert_eq!(WinLines::standard().threat(&board, Side::Opponent), Some(sq(3)));
    }

    #[test]
    fn test_threat_ignores_blocked_lines() {
        // O O H
        let board = Board::from_picture("OOH......");
        assert_eq!(WinLines::standard().threat(&board, Side::Opponent), None);
    }

    #[test]
    fn test_threat_needs_two_of_side() {
        let board = Board::from_picture("O........");
        assert_eq!(WinLines::standard().threat(&board, Side::Opponent), None);
        assert_eq!(WinLines::standard().threat(&board, Side::Human), None);
    }
}
