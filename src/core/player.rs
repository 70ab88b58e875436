//! Player identity and per-side data storage.
//!
//! ## Side
//!
//! Every game seats exactly two sides: the human at the console and the
//! computer opponent (the dealer in Twenty-One). How a side picks its move
//! is decided by the side itself: humans answer the input provider, the
//! opponent runs the game's heuristic policy.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for identities and scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player at the console.
    Human,
    /// The computer player or dealer.
    Opponent,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Opponent];

    /// Slot index for `SideMap` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Opponent => 1,
        }
    }

    /// The side across the table.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Grid marker symbol, always an uppercase ASCII letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker(char);

impl Marker {
    /// Marker used by the computer in Tic-Tac-Toe.
    pub const COMPUTER: Marker = Marker('O');

    /// Default human marker.
    pub const HUMAN: Marker = Marker('X');

    /// Build a marker from a letter, uppercasing it.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn new(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| Marker(letter.to_ascii_uppercase()))
    }

    /// The marker letter.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a side is: a display name and, for grid games, a marker.
///
/// Created once per match. Only the human's name and marker are chosen
/// interactively, and only before the first round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub name: String,
    pub marker: Option<Marker>,
}

impl PlayerIdentity {
    /// Identity without a marker (card and gesture games).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: None,
        }
    }

    /// Identity with a grid marker.
    pub fn with_marker(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker: Some(marker),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use parlor_games::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_value(0);
/// wins[Side::Opponent] += 1;
/// assert_eq!(wins[Side::Human], 0);
/// assert_eq!(wins[Side::Opponent], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Human), factory(Side::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
