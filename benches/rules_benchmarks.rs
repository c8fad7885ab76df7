//! Benchmarks for legality scanning and status evaluation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{BoardBuilder, Color, GameState, Piece, Square};
use chess_rules::protocol::parse_move;

/// Italian-style opening, a few pieces developed on each side.
fn middlegame() -> GameState {
    let mut game = GameState::new();
    for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3", "f8c5"] {
        if let Ok((from, to)) = parse_move(text) {
            let _ = game.attempt_move(from, to);
        }
    }
    game
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let mut startpos = GameState::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves()))
    });

    let mut game = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(game.legal_moves()))
    });

    group.bench_function("destinations_queen", |b| {
        b.iter(|| black_box(game.legal_destinations(black_box(Square(7, 3)))))
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let mut board = middlegame().board().clone();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(board.classify(Color::White)))
    });

    let mated = BoardBuilder::new()
        .piece(Square(7, 0), Color::White, Piece::King)
        .piece(Square(6, 1), Color::Black, Piece::Queen)
        .piece(Square(5, 0), Color::Black, Piece::King)
        .build();
    if let Ok(mated) = mated {
        let mut board = mated.board().clone();
        group.bench_function("checkmate", |b| {
            b.iter(|| black_box(board.classify(Color::White)))
        });
    }

    group.finish();
}

fn bench_attempt_move(c: &mut Criterion) {
    let game = middlegame();
    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            let mut game = game.clone();
            black_box(game.attempt_move(Square(6, 2), Square(5, 2)))
        })
    });
}

criterion_group!(benches, bench_legal_moves, bench_classify, bench_attempt_move);
criterion_main!(benches);
