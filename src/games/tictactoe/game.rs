//! Tic-Tac-Toe round controller.

use tracing::{debug, info};

use super::board::{Board, OpenSquares, Square};
use super::lines::{GridStatus, WinLines};
use super::policy::ThreatPolicy;
use crate::core::{
    EngineError, InputError, Marker, MoveError, PlayerIdentity, PlayerSetup, RandomSource, Side,
    SideMap,
};
use crate::io::{self, tokens, DisplaySink, InputProvider, InputRequest, RenderEvent, RoundReport};
use crate::rules::{RoundEngine, RoundOutcome};

/// Default display names.
pub const HUMAN_NAME: &str = "Human";
pub const COMPUTER_NAME: &str = "Computer";

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for `side` to mark a square.
    AwaitingMove(Side),
    RoundOver(RoundOutcome),
}

/// A Tic-Tac-Toe match table: board, detector, policy and the two players.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    board: Board,
    lines: WinLines,
    policy: ThreatPolicy,
    identities: SideMap<PlayerIdentity>,
    first_mover: Side,
    phase: TurnPhase,
}

impl TicTacToe {
    /// Create a table for `human` against the computer (`O`).
    ///
    /// `first_mover` opens every round of the match.
    #[must_use]
    pub fn new(human: PlayerIdentity, first_mover: Side) -> Self {
        let lines = WinLines::standard();
        let computer = PlayerIdentity::with_marker(COMPUTER_NAME, Marker::COMPUTER);
        Self {
            board: Board::new(),
            policy: ThreatPolicy::new(lines.clone()),
            lines,
            identities: SideMap::new(|side| match side {
                Side::Human => human.clone(),
                Side::Opponent => computer.clone(),
            }),
            first_mover,
            phase: TurnPhase::AwaitingMove(first_mover),
        }
    }

    /// Rename the computer player.
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.identities[Side::Opponent].name = name.into();
        self
    }

    /// Settle names, marker and first mover, asking for whatever `setup`
    /// leaves open. Blank preset names count as missing.
    pub fn setup<I, D>(setup: &PlayerSetup, input: &mut I, display: &mut D) -> Result<Self, InputError>
    where
        I: InputProvider + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let preset_name = |name: &Option<String>| {
            name.as_deref().and_then(|name| tokens::parse_name(name, None))
        };
        let name = match preset_name(&setup.human_name) {
            Some(name) => name,
            None => io::ask_name(input, display, Some(HUMAN_NAME))?,
        };
        let computer = match preset_name(&setup.computer_name) {
            Some(name) => name,
            None => io::ask_computer_name(input, display, COMPUTER_NAME)?,
        };

        let preset = setup
            .human_marker
            .and_then(Marker::new)
            .filter(|&marker| marker != Marker::COMPUTER);
        let marker = match preset {
            Some(marker) => marker,
            None if io::ask_yes_no(input, display, InputRequest::ChooseMarker)? => {
                io::ask_marker(input, display, Marker::COMPUTER)?
            }
            None => Marker::HUMAN,
        };

        let first_mover = match setup.first_mover.side() {
            Some(side) => side,
            None if io::ask_yes_no(input, display, InputRequest::PlayFirst)? => Side::Human,
            None => Side::Opponent,
        };

        info!(%name, %computer, %marker, ?first_mover, "tic-tac-toe players set");
        let human = PlayerIdentity::with_marker(name, marker);
        Ok(Self::new(human, first_mover).with_computer_name(computer))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    #[must_use]
    pub fn status(&self) -> GridStatus {
        self.lines.status(&self.board)
    }

    /// Open squares, ascending.
    #[must_use]
    pub fn legal_moves(&self) -> OpenSquares {
        self.board.open_squares()
    }

    /// Mark `square` for the side to move and evaluate the board.
    pub fn apply_move(&mut self, square: Square) -> Result<TurnPhase, MoveError> {
        let TurnPhase::AwaitingMove(side) = self.phase else {
            return Err(MoveError::RoundOver);
        };
        self.board.place(square, side)?;

        self.phase = match self.lines.status(&self.board) {
            GridStatus::InProgress => TurnPhase::AwaitingMove(side.other()),
            GridStatus::Won { side, .. } => TurnPhase::RoundOver(RoundOutcome::from_winner(Some(side))),
            GridStatus::Tie => TurnPhase::RoundOver(RoundOutcome::Tie),
        };
        debug!(square = square.number(), %side, phase = ?self.phase, "square marked");
        Ok(self.phase)
    }

    fn next_square<I, D, R>(&self, side: Side, input: &mut I, display: &mut D, rng: &mut R) -> Result<Square, EngineError>
    where
        I: InputProvider,
        D: DisplaySink,
        R: RandomSource,
    {
        match side {
            Side::Human => Ok(io::ask_square(input, display, self.legal_moves())?),
            Side::Opponent => {
                let decision = self
                    .policy
                    .choose(&self.board, Side::Opponent, rng)
                    .ok_or(MoveError::BoardFull)?;
                Ok(decision.square)
            }
        }
    }
}

impl RoundEngine for TicTacToe {
    fn title(&self) -> &'static str {
        "Tic Tac Toe"
    }

    fn identities(&self) -> &SideMap<PlayerIdentity> {
        &self.identities
    }

    fn reset(&mut self) {
        self.board.reset();
        self.phase = TurnPhase::AwaitingMove(self.first_mover);
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
        display.render(&RenderEvent::Grid(self.board.clone()));

        loop {
            match self.phase {
                TurnPhase::AwaitingMove(side) => {
                    let square = self.next_square(side, input, display, rng)?;
                    self.apply_move(square)?;
                    display.render(&RenderEvent::Grid(self.board.clone()));
                }
                TurnPhase::RoundOver(outcome) => {
                    info!(?outcome, "tic-tac-toe round over");
                    display.render(&RenderEvent::RoundOver(RoundReport::outcome(outcome)));
                    return Ok(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FirstMover, ScriptedRandom};
    use crate::io::{RecordingDisplay, ScriptedInput};

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    fn table(first: Side) -> TicTacToe {
        TicTacToe::new(PlayerIdentity::with_marker(HUMAN_NAME, Marker::HUMAN), first)
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = table(Side::Human);
        assert_eq!(game.apply_move(sq(1)), Ok(TurnPhase::AwaitingMove(Side::Opponent)));
        assert_eq!(game.apply_move(sq(5)), Ok(TurnPhase::AwaitingMove(Side::Human)));
        assert_eq!(game.board().get(sq(5)), Some(Side::Opponent));
    }

    #[test]
    fn test_occupied_square_rejected_without_turn_change() {
        let mut game = table(Side::Human);
        game.apply_move(sq(1)).unwrap();

        assert_eq!(game.apply_move(sq(1)), Err(MoveError::Occupied(1)));
        assert_eq!(game.phase(), TurnPhase::AwaitingMove(Side::Opponent));
    }

    #[test]
    fn test_round_over_on_line() {
        let mut game = table(Side::Human);
        for n in [1, 4, 2, 5] {
            game.apply_move(sq(n)).unwrap();
        }
        assert_eq!(
            game.apply_move(sq(3)),
            Ok(TurnPhase::RoundOver(RoundOutcome::HumanWin))
        );
        assert_eq!(game.apply_move(sq(9)), Err(MoveError::RoundOver));
    }

    #[test]
    fn test_reset_restores_first_mover() {
        let mut game = table(Side::Opponent);
        game.apply_move(sq(5)).unwrap();
        game.reset();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.phase(), TurnPhase::AwaitingMove(Side::Opponent));
    }

    #[test]
    fn test_full_round_with_cascade() {
        // Human 1 -> center 5. Human 2 -> block 3. Human 7 -> block 4.
        // Human 6 -> nothing to win or block, first open square 8.
        // Human 9 fills the board with no line.
        let mut game = table(Side::Human);
        let mut input = ScriptedInput::new(["1", "2", "7", "6", "9"]);
        let mut display = RecordingDisplay::default();
        let mut rng = ScriptedRandom::new(vec![0]);

        let outcome = game.play_round(&mut input, &mut display, &mut rng).unwrap();

        assert_eq!(outcome, RoundOutcome::Tie);
        assert_eq!(display.last_grid(), Some(&Board::from_picture("HHOOOHHOH")));
        assert_eq!(
            display.round_reports().collect::<Vec<_>>(),
            vec![&RoundReport::outcome(RoundOutcome::Tie)]
        );
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_setup_asks_for_missing_choices() {
        let mut input = ScriptedInput::new(["", "", "y", "o", "k", "n"]);
        let mut display = RecordingDisplay::default();

        let game = TicTacToe::setup(&PlayerSetup::new(), &mut input, &mut display).unwrap();

        let human = &game.identities()[Side::Human];
        assert_eq!(human.name, HUMAN_NAME);
        assert_eq!(game.identities()[Side::Opponent].name, COMPUTER_NAME);
        assert_eq!(human.marker.map(Marker::symbol), Some('K'));
        assert_eq!(game.first_mover(), Side::Opponent);
        assert_eq!(display.rejections(), 1); // "o" collides with the computer
    }

    #[test]
    fn test_setup_uses_presets() {
        let setup = PlayerSetup::new()
            .with_name("Ada")
            .with_computer_name("Hal")
            .with_marker('a')
            .with_first_mover(FirstMover::Human);
        let mut input = ScriptedInput::default();
        let mut display = RecordingDisplay::default();

        let game = TicTacToe::setup(&setup, &mut input, &mut display).unwrap();

        assert!(input.requests().is_empty());
        assert_eq!(game.identities()[Side::Opponent].name, "Hal");
        assert_eq!(game.identities()[Side::Human].marker.map(Marker::symbol), Some('A'));
        assert_eq!(game.first_mover(), Side::Human);
    }

    #[test]
    fn test_setup_names_the_computer() {
        let mut input = ScriptedInput::new(["ada", "deep blue"]);
        let mut display = RecordingDisplay::default();
        let setup = PlayerSetup::new()
            .with_marker('x')
            .with_first_mover(FirstMover::Human);

        let game = TicTacToe::setup(&setup, &mut input, &mut display).unwrap();

        assert_eq!(game.identities()[Side::Human].name, "Ada");
        assert_eq!(game.identities()[Side::Opponent].name, "Deep Blue");
        assert_eq!(game.identities()[Side::Opponent].marker, Some(Marker::COMPUTER));
        assert_eq!(
            input.requests()[1],
            InputRequest::ComputerName { default: COMPUTER_NAME.to_string() }
        );
    }

    #[test]
    fn test_blank_preset_name_is_asked_for() {
        let setup = PlayerSetup::new()
            .with_name("   ")
            .with_computer_name("")
            .with_marker('x')
            .with_first_mover(FirstMover::Human);
        let mut input = ScriptedInput::new(["grace", ""]);
        let mut display = RecordingDisplay::default();

        let game = TicTacToe::setup(&setup, &mut input, &mut display).unwrap();

        assert_eq!(input.requests().len(), 2);
        assert_eq!(game.identities()[Side::Human].name, "Grace");
        assert_eq!(game.identities()[Side::Opponent].name, COMPUTER_NAME);
    }
}
