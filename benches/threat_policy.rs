use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parlor_games::core::{GameRng, Side};
use parlor_games::games::tictactoe::{Board, ThreatPolicy, WinLines};
use parlor_games::games::twenty_one::{Rank, TwentyOneRules};

fn bench_threat_policy(c: &mut Criterion) {
    let policy = ThreatPolicy::default();
    let mut rng = GameRng::new(42);

    let boards = [
        ("offense", Board::from_picture("HH.OO....")),
        ("defense", Board::from_picture("H..HO....")),
        ("center", Board::from_picture("H........")),
        ("fallback", Board::from_picture("H...O...H")),
    ];

    let mut group = c.benchmark_group("threat_policy");
    for (name, board) in &boards {
        group.bench_function(*name, |b| {
            b.iter(|| policy.choose(black_box(board), Side::Opponent, &mut rng))
        });
    }
    group.finish();
}

fn bench_win_detection(c: &mut Criterion) {
    let lines = WinLines::standard();
    let board = Board::from_picture("HOHHOOOHH");

    c.bench_function("win_lines_status", |b| b.iter(|| lines.status(black_box(&board))));
}

fn bench_ace_normalizer(c: &mut Criterion) {
    let rules = TwentyOneRules::standard();
    let hand = [Rank::Ace, Rank::Ace, Rank::Five, Rank::Ace, Rank::Three];

    c.bench_function("ace_normalizer", |b| b.iter(|| rules.score(black_box(&hand))));
}

criterion_group!(benches, bench_threat_policy, bench_win_detection, bench_ace_normalizer);
criterion_main!(benches);
