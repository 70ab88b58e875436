//! Line-oriented console front end.
//!
//! `LineInput` prints a prompt for each `InputRequest` and reads one line
//! per token. `ConsoleDisplay` turns render events into plain text. Both
//! are generic over their streams so the binary hands them stdin/stdout and
//! tests hand them in-memory buffers.

use std::io::{BufRead, Write};

use crate::core::{InputError, Marker, PlayerIdentity, Side, SideMap};
use crate::games::rpsls::Gesture;
use crate::games::tictactoe::{Board, Square};
use crate::games::twenty_one::{Hand, TwentyOneRules};
use crate::io::{DisplaySink, InputProvider, InputRequest, RenderEvent, RoundReport};
use crate::session::{MatchSummary, ScoreBoard};

/// Join items as "1, 2, or 3"; two items read "1 or 2".
///
/// ```
/// use parlor_games::console::joinor;
///
/// assert_eq!(joinor(&[1, 2, 3], ", ", "or"), "1, 2, or 3");
/// assert_eq!(joinor(&[1, 2], ", ", "or"), "1 or 2");
/// assert_eq!(joinor(&[7], ", ", "or"), "7");
/// ```
pub fn joinor<T: std::fmt::Display>(items: &[T], separator: &str, last_word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {last_word} {second}"),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}{separator}{last_word} {last}", head.join(separator))
        }
    }
}

/// Prompt text shown before reading a token.
#[must_use]
pub fn prompt_text(request: &InputRequest) -> String {
    match request {
        InputRequest::Square { open } => format!("Choose a square ({}):", joinor(open, ", ", "or")),
        InputRequest::HitOrStay => "Hit or stay? (h/s)".to_string(),
        InputRequest::PlayAgain => "Play again? (y/n)".to_string(),
        InputRequest::PlayFirst => "Would you like to go first? (y/n)".to_string(),
        InputRequest::ChooseMarker => "Would you like to choose your own marker? (y/n)".to_string(),
        InputRequest::Marker { taken } => format!("Pick a single letter other than {taken}:"),
        InputRequest::Name { default: Some(default) } => {
            format!("What's your name? (blank for {default})")
        }
        InputRequest::Name { default: None } => "What's your name?".to_string(),
        InputRequest::ComputerName { default } => {
            format!("Name your opponent? (blank for {default})")
        }
        InputRequest::Gesture => {
            let names: Vec<&str> = Gesture::ALL.iter().map(|g| g.name()).collect();
            format!("Choose one: {}", joinor(&names, ", ", "or"))
        }
    }
}

fn rejection_text(request: &InputRequest) -> &'static str {
    match request {
        InputRequest::Square { .. } => "Sorry, that's not a valid choice.",
        InputRequest::HitOrStay => "Please answer hit or stay.",
        InputRequest::PlayAgain | InputRequest::PlayFirst | InputRequest::ChooseMarker => {
            "Sorry, must be y or n."
        }
        InputRequest::Marker { .. } => "Sorry, that marker is not available.",
        InputRequest::Name { .. } | InputRequest::ComputerName { .. } => "Sorry, must enter a value.",
        InputRequest::Gesture => "Sorry, invalid choice.",
    }
}

/// Reads one token per line from `reader`, prompting on `writer`.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> InputProvider for LineInput<R, W> {
    fn request_token(&mut self, request: &InputRequest) -> Result<String, InputError> {
        writeln!(self.writer, "=> {}", prompt_text(request))?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

/// Plain-text renderer.
///
/// Write failures are dropped: a console that cannot be written to has no
/// one left to tell.
#[derive(Debug)]
pub struct ConsoleDisplay<W> {
    writer: W,
    identities: Option<SideMap<PlayerIdentity>>,
    rules: TwentyOneRules,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            identities: None,
            rules: TwentyOneRules::standard(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn name(&self, side: Side) -> String {
        self.identities
            .as_ref()
            .map_or_else(|| side.to_string(), |ids| ids[side].name.clone())
    }

    fn marker(&self, side: Side) -> char {
        let fallback = match side {
            Side::Human => Marker::HUMAN,
            Side::Opponent => Marker::COMPUTER,
        };
        self.identities
            .as_ref()
            .and_then(|ids| ids[side].marker)
            .unwrap_or(fallback)
            .symbol()
    }

    fn grid_text(&self, board: &Board) -> String {
        let cell = |n: u8| {
            Square::new(n)
                .and_then(|square| board.get(square))
                .map_or(' ', |side| self.marker(side))
        };
        let row = |a: u8| format!("  {}  |  {}  |  {}", cell(a), cell(a + 1), cell(a + 2));
        let blank = "     |     |";
        let rule = "-----+-----+-----";
        [row(1), row(4), row(7)]
            .iter()
            .map(|line| format!("{blank}\n{line}\n{blank}"))
            .collect::<Vec<_>>()
            .join(format!("\n{rule}\n").as_str())
    }

    fn hand_text(&self, hand: &Hand, hidden: bool) -> String {
        if hidden {
            let shown = hand.up_card().map_or_else(String::new, |rank| rank.to_string());
            return format!("{shown} and unknown card");
        }
        let cards: Vec<String> = hand.cards().iter().map(ToString::to_string).collect();
        format!("{} (total {})", joinor(&cards, ", ", "and"), hand.score(&self.rules))
    }

    fn report_text(&self, report: &RoundReport) -> String {
        let mut lines = Vec::new();
        if let Some(side) = report.bust {
            lines.push(format!("{} busted!", self.name(side)));
        }
        if let Some(points) = &report.points {
            for (side, total) in points.iter() {
                lines.push(format!("{} has {total}.", self.name(side)));
            }
        }
        lines.push(match report.outcome.winner() {
            Some(side) => format!("{} won the round!", self.name(side)),
            None => "It's a tie!".to_string(),
        });
        lines.join("\n")
    }

    fn score_text(&self, scores: &ScoreBoard) -> String {
        let parts: Vec<String> = scores
            .iter()
            .map(|(side, wins)| format!("{}: {wins}", self.name(side)))
            .collect();
        format!("Score: {}", parts.join(", "))
    }

    fn summary_text(&self, summary: &MatchSummary) -> String {
        let rounds = match summary.rounds {
            1 => "1 round".to_string(),
            n => format!("{n} rounds"),
        };
        match summary.grand_winner {
            Some(side) => format!("{} took the match after {rounds}.", self.name(side)),
            None => format!("Match stopped after {rounds}. Goodbye, {}!", self.name(Side::Human)),
        }
    }

    fn event_text(&mut self, event: &RenderEvent) -> String {
        match event {
            RenderEvent::Welcome { title } => format!("Welcome to {title}!"),
            RenderEvent::Players(identities) => {
                self.identities = Some(identities.clone());
                let describe = |id: &PlayerIdentity| match id.marker {
                    Some(marker) => format!("{} ({marker})", id.name),
                    None => id.name.clone(),
                };
                format!(
                    "{} vs {}",
                    describe(&identities[Side::Human]),
                    describe(&identities[Side::Opponent])
                )
            }
            RenderEvent::Grid(board) => self.grid_text(board),
            RenderEvent::Table {
                human,
                dealer,
                reveal_dealer,
            } => format!(
                "{}: {}\n{}: {}",
                self.name(Side::Opponent),
                self.hand_text(dealer, !reveal_dealer),
                self.name(Side::Human),
                self.hand_text(human, false),
            ),
            RenderEvent::Throws { human, opponent } => format!(
                "{} chose {human}, {} chose {opponent}.",
                self.name(Side::Human),
                self.name(Side::Opponent)
            ),
            RenderEvent::Rejected(request) => rejection_text(request).to_string(),
            RenderEvent::RoundOver(report) => self.report_text(report),
            RenderEvent::Score(scores) => self.score_text(scores),
            RenderEvent::GrandWinner(side) => format!("{} is the grand winner!", self.name(*side)),
            RenderEvent::MatchOver(summary) => self.summary_text(summary),
        }
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn render(&mut self, event: &RenderEvent) {
        let text = self.event_text(event);
        let _ = writeln!(self.writer, "{text}");
    }
}
