//! Console launcher for the parlor games.
//!
//! Usage: parlor tic-tac-toe --first human --marker z
//!        parlor twenty-one --seed 7
//!        parlor rpsls --name Ada --log-level debug

use std::io;

use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use parlor_games::games::twenty_one::PLAYER_NAME;
use parlor_games::io::tokens;
use parlor_games::{
    play_series, ConsoleDisplay, EngineError, FirstMover, GameRng, InputError, LineInput,
    MatchConfig, PlayerSetup, Rpsls, TicTacToe, TwentyOne,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    TicTacToe,
    TwentyOne,
    Rpsls,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum First {
    Human,
    Computer,
    Choose,
}

impl From<First> for FirstMover {
    fn from(first: First) -> Self {
        match first {
            First::Human => FirstMover::Human,
            First::Computer => FirstMover::Opponent,
            First::Choose => FirstMover::Choose,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Play Tic-Tac-Toe, Twenty-One or Rock-Paper-Scissors-Lizard-Spock")]
struct Args {
    /// Game to play
    #[arg(value_enum)]
    game: GameKind,

    /// Seed for computer moves and card draws (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,

    /// Your display name (asked when omitted, where the game uses one)
    #[arg(short, long)]
    name: Option<String>,

    /// Tic-Tac-Toe computer name (asked when omitted)
    #[arg(long)]
    computer_name: Option<String>,

    /// Tic-Tac-Toe marker letter (asked when omitted)
    #[arg(short, long)]
    marker: Option<char>,

    /// Who opens each Tic-Tac-Toe round
    #[arg(long, value_enum, default_value_t = First::Choose)]
    first: First,
}

impl Args {
    fn player_setup(&self) -> PlayerSetup {
        let mut setup = PlayerSetup::new().with_first_mover(self.first.into());
        if let Some(name) = &self.name {
            setup = setup.with_name(name.clone());
        }
        if let Some(name) = &self.computer_name {
            setup = setup.with_computer_name(name.clone());
        }
        if let Some(marker) = self.marker {
            setup = setup.with_marker(marker);
        }
        setup
    }

    /// Twenty-One never asks, so a missing or blank name seats "Player".
    fn table_name(&self) -> String {
        self.name
            .as_deref()
            .and_then(|name| tokens::parse_name(name, None))
            .unwrap_or_else(|| PLAYER_NAME.to_string())
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => {}
        Err(EngineError::Input(InputError::Closed)) => {
            info!("input closed, leaving");
        }
        Err(err) => {
            eprintln!("parlor failed: {err}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), EngineError> {
    let mut rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), game = ?args.game, "starting");

    let mut input = LineInput::new(io::stdin().lock(), io::stdout());
    let mut display = ConsoleDisplay::new(io::stdout());

    let summaries = match args.game {
        GameKind::TicTacToe => {
            let game = TicTacToe::setup(&args.player_setup(), &mut input, &mut display)?;
            play_series(game, &MatchConfig::tic_tac_toe(), &mut input, &mut display, &mut rng)?
        }
        GameKind::TwentyOne => {
            let game = TwentyOne::new(args.table_name());
            play_series(game, &MatchConfig::twenty_one(), &mut input, &mut display, &mut rng)?
        }
        GameKind::Rpsls => {
            let game = Rpsls::setup(args.name.as_deref(), &mut input, &mut display, &mut rng)?;
            play_series(game, &MatchConfig::rpsls(), &mut input, &mut display, &mut rng)?
        }
    };

    info!(matches = summaries.len(), "finished");
    Ok(())
}
