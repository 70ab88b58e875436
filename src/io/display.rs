//! Display sink contract.
//!
//! The engines describe what changed as a `RenderEvent`; how it looks on
//! screen is the sink's business. Events own their data so a sink may keep
//! them around.

use crate::core::{PlayerIdentity, Side, SideMap};
use crate::games::rpsls::Gesture;
use crate::games::tictactoe::Board;
use crate::games::twenty_one::Hand;
use crate::rules::RoundOutcome;
use crate::session::{MatchSummary, ScoreBoard};

use super::input::InputRequest;

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    /// Side that went over the bust threshold, if any.
    pub bust: Option<Side>,
    /// Final hand totals for card games.
    pub points: Option<SideMap<u32>>,
}

impl RoundReport {
    /// Report with only an outcome.
    #[must_use]
    pub fn outcome(outcome: RoundOutcome) -> Self {
        Self {
            outcome,
            bust: None,
            points: None,
        }
    }
}

/// A state change the engine wants surfaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    /// Match start banner.
    Welcome { title: &'static str },
    /// Names and markers of both sides, sent once identities are settled.
    Players(SideMap<PlayerIdentity>),
    /// Tic-Tac-Toe board after a move.
    Grid(Board),
    /// Twenty-One hands. The dealer's hole cards stay hidden until
    /// `reveal_dealer`.
    Table {
        human: Hand,
        dealer: Hand,
        reveal_dealer: bool,
    },
    /// Gestures thrown in an RPSLS round.
    Throws { human: Gesture, opponent: Gesture },
    /// A token was rejected for this request.
    Rejected(InputRequest),
    RoundOver(RoundReport),
    Score(ScoreBoard),
    GrandWinner(Side),
    MatchOver(MatchSummary),
}

/// Receiver of render events.
pub trait DisplaySink {
    fn render(&mut self, event: &RenderEvent);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn render(&mut self, _event: &RenderEvent) {}
}

/// Keeps every event, for assertions in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    pub events: Vec<RenderEvent>,
}

impl RecordingDisplay {
    /// Number of rejected tokens shown.
    #[must_use]
    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Rejected(_)))
            .count()
    }

    /// Every round report, in order.
    pub fn round_reports(&self) -> impl Iterator<Item = &RoundReport> {
        self.events.iter().filter_map(|e| match e {
            RenderEvent::RoundOver(report) => Some(report),
            _ => None,
        })
    }

    /// Last board shown.
    #[must_use]
    pub fn last_grid(&self) -> Option<&Board> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Grid(board) => Some(board),
            _ => None,
        })
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, event: &RenderEvent) {
        self.events.push(event.clone());
    }
}
