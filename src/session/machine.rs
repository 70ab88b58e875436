//! Match state machine.
//!
//! ## Phases
//!
//! ```text
//! RoundInProgress -> RoundOver -> GrandWinnerReached -> MatchOver
//!                              -> AwaitingReplayDecision -> RoundInProgress | MatchOver
//! ```
//!
//! With `ReplayPrompt::AfterMatch` the replay question is skipped and a
//! round without a grand winner goes straight back to `RoundInProgress`;
//! `play_series` asks once the match is decided instead.
//!
//! ## Score
//!
//! The score board is only written by `on_round_over`, once per finished
//! round. Starting a new round resets the game's board, hands or deck but
//! never the score. A fresh `Match` starts from zero.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::score::ScoreBoard;
use crate::core::{EngineError, MatchConfig, RandomSource, ReplayPrompt, Side};
use crate::io::{self, DisplaySink, InputProvider, InputRequest, RenderEvent};
use crate::rules::{RoundEngine, RoundOutcome};

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    RoundInProgress,
    RoundOver(RoundOutcome),
    GrandWinnerReached(Side),
    AwaitingReplayDecision,
    MatchOver,
}

impl MatchPhase {
    /// Check if no further rounds can be played.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchPhase::GrandWinnerReached(_) | MatchPhase::MatchOver)
    }
}

/// Final state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub scores: ScoreBoard,
    /// `None` when the human stopped before anyone reached the goal.
    pub grand_winner: Option<Side>,
    /// Rounds played, ties included.
    pub rounds: u32,
}

/// One match of a round engine against a goal.
#[derive(Clone, Debug)]
pub struct Match<G: RoundEngine> {
    game: G,
    config: MatchConfig,
    scores: ScoreBoard,
    phase: MatchPhase,
    rounds: u32,
    grand_winner: Option<Side>,
}

impl<G: RoundEngine> Match<G> {
    #[must_use]
    pub fn new(game: G, config: MatchConfig) -> Self {
        Self {
            game,
            config,
            scores: ScoreBoard::new(),
            phase: MatchPhase::RoundInProgress,
            rounds: 0,
            grand_winner: None,
        }
    }

    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Give the game back, e.g. to start a fresh match with the same players.
    pub fn into_game(self) -> G {
        self.game
    }

    /// Record a finished round and move to the next phase.
    ///
    /// Ignored once the match is over, so no score can pass the goal.
    pub fn on_round_over(&mut self, outcome: RoundOutcome) -> MatchPhase {
        if self.phase.is_terminal() {
            return self.phase;
        }

        self.rounds += 1;
        if let Some(side) = self.scores.record(outcome) {
            info!(
                winner = %side,
                human = self.scores.get(Side::Human),
                opponent = self.scores.get(Side::Opponent),
                "score updated"
            );
        }

        self.phase = match self.scores.grand_winner(self.config.goal) {
            Some(side) => {
                info!(winner = %side, rounds = self.rounds, "grand winner reached");
                self.grand_winner = Some(side);
                MatchPhase::GrandWinnerReached(side)
            }
            None => match self.config.replay {
                ReplayPrompt::BetweenRounds => MatchPhase::AwaitingReplayDecision,
                ReplayPrompt::AfterMatch => MatchPhase::RoundInProgress,
            },
        };
        self.phase
    }

    /// Apply the human's answer to "play again?".
    ///
    /// Only meaningful while awaiting the decision; otherwise the phase is
    /// left unchanged.
    pub fn on_replay_decision(&mut self, again: bool) -> MatchPhase {
        if self.phase == MatchPhase::AwaitingReplayDecision {
            self.phase = if again {
                MatchPhase::RoundInProgress
            } else {
                debug!(rounds = self.rounds, "match stopped before a grand winner");
                MatchPhase::MatchOver
            };
        }
        self.phase
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            scores: self.scores.clone(),
            grand_winner: self.grand_winner,
            rounds: self.rounds,
        }
    }

    /// Drive rounds until the match is over.
    ///
    /// Errors only when the input stream closes or a draw hits an empty
    /// deck; rejected tokens are re-asked inside the round.
    pub fn run<I, D, R>(
        &mut self,
        input: &mut I,
        display: &mut D,
        rng: &mut R,
    ) -> Result<MatchSummary, EngineError>
    where
        I: InputProvider,
        D: DisplaySink,
        R: RandomSource,
    {
        info!(game = self.game.title(), goal = self.config.goal, "match started");
        display.render(&RenderEvent::Welcome { title: self.game.title() });
        display.render(&RenderEvent::Players(self.game.identities().clone()));

        loop {
            match self.phase {
                MatchPhase::RoundInProgress => {
                    debug!(round = self.rounds + 1, "round started");
                    let outcome = self.game.play_round(input, display, rng)?;
                    self.phase = MatchPhase::RoundOver(outcome);
                }
                MatchPhase::RoundOver(outcome) => {
                    self.on_round_over(outcome);
                    display.render(&RenderEvent::Score(self.scores.clone()));
                }
                MatchPhase::GrandWinnerReached(side) => {
                    display.render(&RenderEvent::GrandWinner(side));
                    self.phase = MatchPhase::MatchOver;
                }
                MatchPhase::AwaitingReplayDecision => {
                    let again = io::ask_yes_no(input, display, InputRequest::PlayAgain)?;
                    self.on_replay_decision(again);
                }
                MatchPhase::MatchOver => break,
            }
        }

        let summary = self.summary();
        display.render(&RenderEvent::MatchOver(summary.clone()));
        Ok(summary)
    }
}

/// Play matches back to back.
///
/// With `ReplayPrompt::AfterMatch`, each decided match is followed by a
/// "play again?" question and a "yes" starts a fresh match (scores back to
/// zero, same players). Otherwise exactly one match is played.
pub fn play_series<G, I, D, R>(
    game: G,
    config: &MatchConfig,
    input: &mut I,
    display: &mut D,
    rng: &mut R,
) -> Result<Vec<MatchSummary>, EngineError>
where
    G: RoundEngine,
    I: InputProvider,
    D: DisplaySink,
    R: RandomSource,
{
    let mut summaries = Vec::new();
    let mut game = game;

    loop {
        let mut session = Match::new(game, config.clone());
        let summary = session.run(input, display, rng)?;
        game = session.into_game();

        let decided = summary.grand_winner.is_some();
        summaries.push(summary);

        if config.replay != ReplayPrompt::AfterMatch || !decided {
            break;
        }
        if !io::ask_yes_no(input, display, InputRequest::PlayAgain)? {
            break;
        }
        debug!(matches = summaries.len(), "starting a fresh match");
    }

    Ok(summaries)
}
