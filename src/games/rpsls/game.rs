//! RPSLS round controller.

use tracing::{debug, info};

use super::gesture::{BeatsGraph, Gesture};
use crate::core::{EngineError, InputError, PlayerIdentity, RandomSource, Side, SideMap};
use crate::io::{self, tokens, DisplaySink, InputProvider, RenderEvent, RoundReport};
use crate::rules::{RoundEngine, RoundOutcome};

/// Names the computer picks from.
pub const COMPUTER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

/// A Rock-Paper-Scissors-Lizard-Spock table.
#[derive(Clone, Debug)]
pub struct Rpsls {
    graph: BeatsGraph,
    identities: SideMap<PlayerIdentity>,
    last_throws: Option<SideMap<Gesture>>,
}

impl Rpsls {
    /// Create a table with fixed names.
    pub fn new(human: impl Into<String>, computer: impl Into<String>) -> Self {
        let human = PlayerIdentity::named(human);
        let computer = PlayerIdentity::named(computer);
        Self {
            graph: BeatsGraph::standard(),
            identities: SideMap::new(|side| match side {
                Side::Human => human.clone(),
                Side::Opponent => computer.clone(),
            }),
            last_throws: None,
        }
    }

    /// Ask the human's name unless a non-blank one is given, and draw the
    /// computer's.
    pub fn setup<I, D, R>(
        human_name: Option<&str>,
        input: &mut I,
        display: &mut D,
        rng: &mut R,
    ) -> Result<Self, InputError>
    where
        I: InputProvider + ?Sized,
        D: DisplaySink + ?Sized,
        R: RandomSource,
    {
        let human = match human_name.and_then(|name| tokens::parse_name(name, None)) {
            Some(name) => name,
            None => io::ask_name(input, display, None)?,
        };
        let computer = rng.choose(&COMPUTER_NAMES).copied().unwrap_or(COMPUTER_NAMES[0]);
        info!(%human, %computer, "rpsls players set");
        Ok(Self::new(human, computer))
    }

    #[must_use]
    pub fn graph(&self) -> &BeatsGraph {
        &self.graph
    }

    /// Gestures thrown in the last round.
    #[must_use]
    pub fn last_throws(&self) -> Option<&SideMap<Gesture>> {
        self.last_throws.as_ref()
    }

    /// The computer's throw: uniform over the five gestures.
    pub fn computer_throw<R: RandomSource>(&self, rng: &mut R) -> Gesture {
        Gesture::ALL[rng.pick_index(Gesture::ALL.len())]
    }
}

impl RoundEngine for Rpsls {
    fn title(&self) -> &'static str {
        "Rock, Paper, Scissors, Lizard, Spock"
    }

    fn identities(&self) -> &SideMap<PlayerIdentity> {
        &self.identities
    }

    fn reset(&mut self) {
        self.last_throws = None;
    }

    fn play_round<I, D, R>(
        &mut self,
        input: &mut I,
        display: &mut D,
        rng: &mut R,
    ) -> Result<RoundOutcome, EngineError>
    where
        I: InputProvider,
        D: DisplaySink,
        R: RandomSource,
    {
        self.reset();
        let human = io::ask_gesture(input, display)?;
        let opponent = self.computer_throw(rng);
        debug!(%human, %opponent, "gestures thrown");

        self.last_throws = Some(SideMap::new(|side| match side {
            Side::Human => human,
            Side::Opponent => opponent,
        }));
        display.render(&RenderEvent::Throws { human, opponent });

        let outcome = self.graph.versus(human, opponent);
        info!(?outcome, "rpsls round over");
        display.render(&RenderEvent::RoundOver(RoundReport::outcome(outcome)));
        Ok(outcome)
    }
}
