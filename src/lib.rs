//! # parlor-games
//!
//! Turn-based two-player console games sharing one engine shape.
//!
//! ## Design Principles
//!
//! 1. **Rules Owned by the Game**: Winning lines, card values, the
//!    beats-graph and thresholds are data built at construction and owned by
//!    each game instance. Nothing is process-wide.
//!
//! 2. **Two Sides, Two Strategies**: The human answers an `InputProvider`;
//!    the opponent runs a heuristic policy. A `Side` tag tells them apart.
//!
//! 3. **Validated Input Only**: Tokens are parsed and re-asked at the
//!    boundary. Engines only ever see legal moves.
//!
//! ## Architecture
//!
//! - **Round Controller**: each game implements `RoundEngine::play_round`,
//!   driving turns from a fresh board, hand or deck until the round is over.
//!
//! - **Match State Machine**: `Match` counts round wins, stops at the goal,
//!   and asks whether to keep playing.
//!
//! ## Modules
//!
//! - `core`: Sides, identities, randomness, rule constants, errors
//! - `rules`: `RoundEngine` trait and round outcomes
//! - `io`: Input provider and display sink contracts, token parsers
//! - `games`: Tic-Tac-Toe, Twenty-One, Rock-Paper-Scissors-Lizard-Spock
//! - `session`: Score board and match state machine
//! - `console`: Line-based stdin/stdout front end

pub mod core;
pub mod rules;
pub mod io;
pub mod games;
pub mod session;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap, Marker, PlayerIdentity,
    GameRng, RandomSource, ScriptedRandom,
    MatchConfig, ReplayPrompt, FirstMover, PlayerSetup,
    EngineError, MoveError, DeckError, InputError,
};

pub use crate::rules::{RoundEngine, RoundOutcome};

pub use crate::io::{
    InputProvider, InputRequest, DisplaySink, RenderEvent, RoundReport,
    NullDisplay, RecordingDisplay, ScriptedInput,
};

pub use crate::games::tictactoe::{Board, Square, WinLines, GridStatus, ThreatPolicy, TicTacToe};
pub use crate::games::twenty_one::{Rank, Hand, Deck, TwentyOneRules, DealerPolicy, TwentyOne};
pub use crate::games::rpsls::{Gesture, BeatsGraph, Rpsls};

pub use crate::session::{ScoreBoard, Match, MatchPhase, MatchSummary, play_series};

pub use crate::console::{ConsoleDisplay, LineInput};
