//! Boundary with the human: input tokens in, render events out.
//!
//! - `input`: the `InputProvider` contract and the re-asking adapter
//! - `tokens`: parsers for the token vocabulary
//! - `display`: the `DisplaySink` contract and render events
//! - `scripted`: token replay for tests and demos

pub mod input;
pub mod tokens;
pub mod display;
pub mod scripted;

pub use input::{
    ask_computer_name, ask_gesture, ask_marker, ask_name, ask_square, ask_turn_choice, ask_yes_no, prompt_until,
    InputProvider, InputRequest,
};
pub use display::{DisplaySink, NullDisplay, RecordingDisplay, RenderEvent, RoundReport};
pub use scripted::ScriptedInput;
