//! Match-level bookkeeping: score board and the match state machine.

mod score;
mod machine;

pub use score::ScoreBoard;
pub use machine::{play_series, Match, MatchPhase, MatchSummary};
