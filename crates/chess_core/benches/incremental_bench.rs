//! Attack Index Benchmarks
//!
//! Performance benchmarks for the incremental update path and the legality
//! filter using Criterion.

use chess_core::api::new_game;
use chess_core::constants::KIWIPETE_FEN;
use chess_core::legality::calculate_legal_moves;
use chess_core::utils::perft;
use chess_core::{Game, SquareId};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn square(name: &str) -> SquareId {
    SquareId::from_algebraic(name).expect("valid square")
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(new_game())));
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let game = new_game();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(calculate_legal_moves(game.position())))
    });
}

fn bench_legal_moves_kiwipete(c: &mut Criterion) {
    let game = Game::from_fen(KIWIPETE_FEN).expect("valid position");

    c.bench_function("legal_moves_kiwipete", |b| {
        b.iter(|| black_box(calculate_legal_moves(game.position())))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let game = new_game();
    let (from, to) = (square("e2"), square("e4"));

    c.bench_function("apply_move_e2e4", |b| {
        b.iter(|| {
            let mut game = game.clone();
            black_box(game.attempt_move(from, to))
        })
    });
}

fn bench_full_rebuild(c: &mut Criterion) {
    let game = Game::from_fen(KIWIPETE_FEN).expect("valid position");

    c.bench_function("rebuild_all_kiwipete", |b| {
        b.iter(|| {
            let mut pos = game.position().clone();
            pos.rebuild_all();
            black_box(pos)
        })
    });
}

fn bench_perft_3(c: &mut Criterion) {
    let game = new_game();

    c.bench_function("perft_3_starting_position", |b| {
        b.iter(|| black_box(perft(&game, 3)))
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves_starting,
    bench_legal_moves_kiwipete,
    bench_apply_move,
    bench_full_rebuild,
    bench_perft_3,
);
criterion_main!(benches);
