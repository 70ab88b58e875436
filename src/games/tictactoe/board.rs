//! The 3×3 board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MoveError, Side};

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 9;

/// A board square, numbered 1-9 left to right, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// The center square.
    pub const CENTER: Square = Square(5);

    /// Create a square from its 1-based number.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=SQUARE_COUNT as u8).contains(&number).then_some(Square(number))
    }

    /// The 1-based number shown to players.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Storage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All squares in ascending order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=SQUARE_COUNT as u8).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = MoveError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Square::new(number).ok_or(MoveError::OutOfRange(number))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Open squares, in ascending order.
pub type OpenSquares = SmallVec<[Square; SQUARE_COUNT]>;

/// Board state: each square is empty or owned by exactly one side.
///
/// A square, once taken, stays taken until `reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Side>; SQUARE_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of a square, `None` if empty.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Side> {
        self.cells[square.index()]
    }

    /// Check if a square is still empty.
    #[must_use]
    pub fn is_open(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Mark a square for `side`.
    pub fn place(&mut self, square: Square, side: Side) -> Result<(), MoveError> {
        let cell = &mut self.cells[square.index()];
        if cell.is_some() {
            return Err(MoveError::Occupied(square.number()));
        }
        *cell = Some(side);
        Ok(())
    }

    /// Legal moves: every empty square, ascending.
    #[must_use]
    pub fn open_squares(&self) -> OpenSquares {
        Square::all().filter(|&sq| self.is_open(sq)).collect()
    }

    /// Check if no square is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Clear every square.
    pub fn reset(&mut self) {
        self.cells = [None; SQUARE_COUNT];
    }

    /// Build a board from a 9-character picture: `H` human, `O` opponent,
    /// anything else empty. Rows are read left to right, top to bottom.
    ///
    /// ```
    /// use parlor_games::core::Side;
    /// use parlor_games::games::tictactoe::{Board, Square};
    ///
    /// let board = Board::from_picture("HH.OO....");
    /// assert_eq!(board.get(Square::new(1).unwrap()), Some(Side::Human));
    /// assert_eq!(board.get(Square::new(5).unwrap()), Some(Side::Opponent));
    /// assert!(board.is_open(Square::new(3).unwrap()));
    /// ```
    #[must_use]
    pub fn from_picture(picture: &str) -> Self {
        let mut board = Self::new();
        for (cell, ch) in board.cells.iter_mut().zip(picture.chars()) {
            *cell = match ch {
                'H' => Some(Side::Human),
                'O' => Some(Side::Opponent),
                _ => None,
            };
        }
        board
    }
}
