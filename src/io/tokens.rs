//! Token vocabulary exchanged with the input provider.
//!
//! Matching is case-insensitive and ignores surrounding whitespace. Yes/no
//! and hit/stay accept any word with the right first letter.

use crate::core::Marker;
use crate::games::rpsls::Gesture;
use crate::games::tictactoe::Square;
use crate::games::twenty_one::TurnChoice;

fn first_letter(token: &str) -> Option<char> {
    token.trim().chars().next().map(|c| c.to_ascii_lowercase())
}

/// A square number that is currently open.
#[must_use]
pub fn parse_square(token: &str, open: &[Square]) -> Option<Square> {
    let number: u8 = token.trim().parse().ok()?;
    let square = Square::try_from(number).ok()?;
    open.contains(&square).then_some(square)
}

/// `h...` is hit, `s...` is stay.
#[must_use]
pub fn parse_turn_choice(token: &str) -> Option<TurnChoice> {
    match first_letter(token)? {
        'h' => Some(TurnChoice::Hit),
        's' => Some(TurnChoice::Stay),
        _ => None,
    }
}

/// `y...` is yes, `n...` is no.
#[must_use]
pub fn parse_yes_no(token: &str) -> Option<bool> {
    match first_letter(token)? {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

/// A gesture by its full name.
#[must_use]
pub fn parse_gesture(token: &str) -> Option<Gesture> {
    let token = token.trim();
    Gesture::ALL
        .into_iter()
        .find(|gesture| gesture.name().eq_ignore_ascii_case(token))
}

/// First letter of the token as a marker, unless it collides with `taken`.
#[must_use]
pub fn parse_marker(token: &str, taken: Marker) -> Option<Marker> {
    let marker = Marker::new(token.trim().chars().next()?)?;
    (marker != taken).then_some(marker)
}

/// A display name with each word capitalized. Blank takes `default`.
#[must_use]
pub fn parse_name(token: &str, default: Option<&str>) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return default.map(str::to_string);
    }
    Some(capitalize_words(trimmed))
}

/// Uppercase the first letter of every whitespace-separated word and
/// lowercase the rest.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        let open = [Square::new(3).unwrap(), Square::new(9).unwrap()];
        assert_eq!(parse_square(" 9 ", &open), Square::new(9));
        assert_eq!(parse_square("4", &open), None);
        assert_eq!(parse_square("0", &open), None);
        assert_eq!(parse_square("three", &open), None);
    }

    #[test]
    fn test_parse_turn_choice_prefix() {
        assert_eq!(parse_turn_choice("hit"), Some(TurnChoice::Hit));
        assert_eq!(parse_turn_choice("H"), Some(TurnChoice::Hit));
        assert_eq!(parse_turn_choice("Stay"), Some(TurnChoice::Stay));
        assert_eq!(parse_turn_choice("stand"), Some(TurnChoice::Stay));
        assert_eq!(parse_turn_choice("double"), None);
        assert_eq!(parse_turn_choice(""), None);
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("Nope"), Some(false));
        assert_eq!(parse_yes_no("ok"), None);
    }

    #[test]
    fn test_parse_gesture() {
        assert_eq!(parse_gesture("spock"), Some(Gesture::Spock));
        assert_eq!(parse_gesture("Lizard"), Some(Gesture::Lizard));
        assert_eq!(parse_gesture("sc"), None);
    }

    #[test]
    fn test_parse_marker() {
        assert_eq!(parse_marker("x", Marker::COMPUTER), Some(Marker::HUMAN));
        assert_eq!(parse_marker("o", Marker::COMPUTER), None);
        assert_eq!(parse_marker("Zed", Marker::COMPUTER).map(Marker::symbol), Some('Z'));
        assert_eq!(parse_marker("#", Marker::COMPUTER), None);
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("ada  LOVELACE"), "Ada Lovelace");
        assert_eq!(capitalize_words("x"), "X");
    }
}
