//! Core building blocks shared by every game: sides and identities,
//! randomness, rule constants, and error kinds.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Marker, PlayerIdentity, Side, SideMap};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use config::{
    FirstMover, MatchConfig, PlayerSetup, ReplayPrompt, BUST_THRESHOLD, DEALER_STAND_THRESHOLD,
    INITIAL_DEAL, RPSLS_GOAL, TIC_TAC_TOE_GOAL, TWENTY_ONE_GOAL,
};
pub use error::{DeckError, EngineError, InputError, MoveError};
