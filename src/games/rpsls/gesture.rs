//! Gestures and the beats-graph.
//!
//! Each gesture beats exactly two others and loses to the remaining two:
//!
//! | gesture  | beats              |
//! |----------|--------------------|
//! | Rock     | Scissors, Lizard   |
//! | Paper    | Rock, Spock        |
//! | Scissors | Paper, Lizard      |
//! | Lizard   | Paper, Spock       |
//! | Spock    | Rock, Scissors     |

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::RoundOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Gesture {
    pub const ALL: [Gesture; 5] = [
        Gesture::Rock,
        Gesture::Paper,
        Gesture::Scissors,
        Gesture::Lizard,
        Gesture::Spock,
    ];

    /// Name as typed and shown.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
            Gesture::Lizard => "lizard",
            Gesture::Spock => "Spock",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Directed win relation, owned by each game instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeatsGraph {
    edges: FxHashMap<Gesture, [Gesture; 2]>,
}

impl Default for BeatsGraph {
    fn default() -> Self {
        Self::standard()
    }
}

impl BeatsGraph {
    /// The classic five-gesture table.
    #[must_use]
    pub fn standard() -> Self {
        use Gesture::*;

        let edges = [
            (Rock, [Scissors, Lizard]),
            (Paper, [Rock, Spock]),
            (Scissors, [Paper, Lizard]),
            (Lizard, [Paper, Spock]),
            (Spock, [Rock, Scissors]),
        ]
        .into_iter()
        .collect();
        Self { edges }
    }

    /// The two gestures `gesture` defeats.
    #[must_use]
    pub fn victims(&self, gesture: Gesture) -> &[Gesture] {
        self.edges.get(&gesture).map_or(&[], |beaten| beaten.as_slice())
    }

    /// Check if `a` defeats `b`.
    #[must_use]
    pub fn beats(&self, a: Gesture, b: Gesture) -> bool {
        self.victims(a).contains(&b)
    }

    /// Round outcome of `human` against `opponent`.
    #[must_use]
    pub fn versus(&self, human: Gesture, opponent: Gesture) -> RoundOutcome {
        if self.beats(human, opponent) {
            RoundOutcome::HumanWin
        } else if self.beats(opponent, human) {
            RoundOutcome::OpponentWin
        } else {
            RoundOutcome::Tie
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries() {
        let graph = BeatsGraph::standard();
        assert!(graph.beats(Gesture::Rock, Gesture::Lizard));
        assert!(graph.beats(Gesture::Spock, Gesture::Scissors));
        assert!(graph.beats(Gesture::Lizard, Gesture::Spock));
        assert!(!graph.beats(Gesture::Rock, Gesture::Paper));
    }

    #[test]
    fn test_each_node_beats_two_loses_two() {
        let graph = BeatsGraph::standard();
        for a in Gesture::ALL {
            let wins = Gesture::ALL.iter().filter(|&&b| graph.beats(a, b)).count();
            let losses = Gesture::ALL.iter().filter(|&&b| graph.beats(b, a)).count();
            assert_eq!((wins, losses), (2, 2), "{a}");
        }
    }

    #[test]
    fn test_antisymmetric_without_self_loops() {
        let graph = BeatsGraph::standard();
        for a in Gesture::ALL {
            assert!(!graph.beats(a, a));
            assert_eq!(graph.versus(a, a), RoundOutcome::Tie);
            for b in Gesture::ALL.into_iter().filter(|&b| b != a) {
                assert!(graph.beats(a, b) ^ graph.beats(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_versus() {
        let graph = BeatsGraph::standard();
        assert_eq!(graph.versus(Gesture::Paper, Gesture::Spock), RoundOutcome::HumanWin);
        assert_eq!(graph.versus(Gesture::Paper, Gesture::Lizard), RoundOutcome::OpponentWin);
    }

    #[test]
    fn test_graph_covers_every_gesture() {
        let graph = BeatsGraph::default();
        for a in Gesture::ALL {
            assert_eq!(graph.victims(a).len(), 2, "{a}");
            assert!(!graph.victims(a).contains(&a));
        }
    }
}
