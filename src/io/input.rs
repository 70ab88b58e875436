//! Input provider contract and the re-asking adapter.
//!
//! The engines never see a raw token that failed validation. Every human
//! decision goes through `prompt_until`, which keeps asking the provider
//! until the parser accepts, showing a rejection notice in between.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::display::{DisplaySink, RenderEvent};
use super::tokens;
use crate::core::{InputError, Marker};
use crate::games::rpsls::Gesture;
use crate::games::tictactoe::{OpenSquares, Square};
use crate::games::twenty_one::TurnChoice;

/// What the engine is asking the human for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputRequest {
    /// A Tic-Tac-Toe square; `open` lists the legal ones.
    Square { open: OpenSquares },
    /// Twenty-One: hit or stay.
    HitOrStay,
    /// Another round (or match)?
    PlayAgain,
    /// Does the human want to open each round?
    PlayFirst,
    /// Does the human want to pick a marker instead of the default?
    ChooseMarker,
    /// A marker letter, any but `taken`.
    Marker { taken: Marker },
    /// A display name. Blank falls back to `default` when there is one.
    Name { default: Option<String> },
    /// A name for the computer. Blank keeps `default`.
    ComputerName { default: String },
    /// One of the five gestures.
    Gesture,
}

/// Source of raw tokens from the human player.
pub trait InputProvider {
    /// Block until the human produces a token for `request`.
    fn request_token(&mut self, request: &InputRequest) -> Result<String, InputError>;
}

/// Ask until `parse` accepts a token.
///
/// Rejected tokens are never returned; each one is followed by a
/// `RenderEvent::Rejected` so the human sees why.
pub fn prompt_until<I, D, T, F>(
    input: &mut I,
    display: &mut D,
    request: &InputRequest,
    mut parse: F,
) -> Result<T, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
    F: FnMut(&str) -> Option<T>,
{
    loop {
        let token = input.request_token(request)?;
        if let Some(value) = parse(&token) {
            return Ok(value);
        }
        debug!(?request, token = %token, "rejected input token");
        display.render(&RenderEvent::Rejected(request.clone()));
    }
}

/// Ask for one of the open squares.
pub fn ask_square<I, D>(input: &mut I, display: &mut D, open: OpenSquares) -> Result<Square, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    let request = InputRequest::Square { open: open.clone() };
    prompt_until(input, display, &request, |token| tokens::parse_square(token, &open))
}

/// Ask hit or stay.
pub fn ask_turn_choice<I, D>(input: &mut I, display: &mut D) -> Result<TurnChoice, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    prompt_until(input, display, &InputRequest::HitOrStay, tokens::parse_turn_choice)
}

/// Ask a yes/no question.
pub fn ask_yes_no<I, D>(input: &mut I, display: &mut D, request: InputRequest) -> Result<bool, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    prompt_until(input, display, &request, tokens::parse_yes_no)
}

/// Ask for a gesture.
pub fn ask_gesture<I, D>(input: &mut I, display: &mut D) -> Result<Gesture, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    prompt_until(input, display, &InputRequest::Gesture, tokens::parse_gesture)
}

/// Ask for a marker letter other than `taken`.
pub fn ask_marker<I, D>(input: &mut I, display: &mut D, taken: Marker) -> Result<Marker, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    prompt_until(input, display, &InputRequest::Marker { taken }, |token| {
        tokens::parse_marker(token, taken)
    })
}

/// Ask for a display name. Blank answers take `default`, or are rejected
/// when there is none.
pub fn ask_name<I, D>(input: &mut I, display: &mut D, default: Option<&str>) -> Result<String, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    let request = InputRequest::Name { default: default.map(str::to_string) };
    prompt_until(input, display, &request, |token| tokens::parse_name(token, default))
}

/// Ask what to call the computer. Blank keeps `default`.
pub fn ask_computer_name<I, D>(input: &mut I, display: &mut D, default: &str) -> Result<String, InputError>
where
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    let request = InputRequest::ComputerName { default: default.to_string() };
    prompt_until(input, display, &request, |token| tokens::parse_name(token, Some(default)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{RecordingDisplay, ScriptedInput};

    #[test]
    fn test_prompt_until_retries() {
        let mut input = ScriptedInput::new(["maybe", "", "Y"]);
        let mut display = RecordingDisplay::default();

        let answer = ask_yes_no(&mut input, &mut display, InputRequest::PlayAgain).unwrap();

        assert!(answer);
        assert_eq!(input.requests().len(), 3);
        assert_eq!(display.rejections(), 2);
    }

    #[test]
    fn test_square_must_be_open() {
        let open: OpenSquares = [2, 7]
            .into_iter()
            .map(|n| Square::new(n).unwrap())
            .collect();
        let mut input = ScriptedInput::new(["5", "abc", "10", "7"]);
        let mut display = RecordingDisplay::default();

        let square = ask_square(&mut input, &mut display, open).unwrap();

        assert_eq!(square.number(), 7);
        assert_eq!(display.rejections(), 3);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = ScriptedInput::new(["nonsense"]);
        let mut display = RecordingDisplay::default();

        let result = ask_turn_choice(&mut input, &mut display);
        assert!(matches!(result, Err(InputError::Closed)));
    }

    #[test]
    fn test_name_default_on_blank() {
        let mut input = ScriptedInput::new(["   "]);
        let mut display = RecordingDisplay::default();

        let name = ask_name(&mut input, &mut display, Some("Human")).unwrap();
        assert_eq!(name, "Human");
    }

    #[test]
    fn test_name_required_without_default() {
        let mut input = ScriptedInput::new(["", "grace hopper"]);
        let mut display = RecordingDisplay::default();

        let name = ask_name(&mut input, &mut display, None).unwrap();
        assert_eq!(name, "Grace Hopper");
        assert_eq!(display.rejections(), 1);
    }

    #[test]
    fn test_computer_name_keeps_default_on_blank() {
        let mut input = ScriptedInput::new(["", "deep thought"]);
        let mut display = RecordingDisplay::default();

        assert_eq!(ask_computer_name(&mut input, &mut display, "Computer").unwrap(), "Computer");
        assert_eq!(ask_computer_name(&mut input, &mut display, "Computer").unwrap(), "Deep Thought");
        assert_eq!(
            input.requests()[0],
            InputRequest::ComputerName { default: "Computer".to_string() }
        );
    }
}
