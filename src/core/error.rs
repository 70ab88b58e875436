//! Error kinds for the game engines.
//!
//! Invalid input tokens are not errors: the input adapter re-asks until a
//! token parses. What remains is an exhausted deck, a move the board
//! refuses, and an input stream that has gone away.

use thiserror::Error;

/// A grid move the board refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square {0} is not on the board")]
    OutOfRange(u8),

    #[error("square {0} is already taken")]
    Occupied(u8),

    #[error("no open square left")]
    BoardFull,

    #[error("the round is already over")]
    RoundOver,
}

/// Drawing from the shared deck failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck exhausted: no cards left to draw")]
    Exhausted,
}

/// The input collaborator could not produce a token.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that stops a round or match from completing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("input error: {0}")]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::Occupied(5).to_string(), "square 5 is already taken");
        assert_eq!(
            MoveError::OutOfRange(12).to_string(),
            "square 12 is not on the board"
        );
    }

    #[test]
    fn test_engine_error_from_deck() {
        let err: EngineError = DeckError::Exhausted.into();
        assert_eq!(err.to_string(), "deck exhausted: no cards left to draw");
    }

    #[test]
    fn test_engine_error_from_input() {
        let err: EngineError = InputError::Closed.into();
        assert_eq!(err.to_string(), "input error: input stream closed");
    }
}
