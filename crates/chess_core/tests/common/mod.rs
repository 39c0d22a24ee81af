//! Shared helpers for chess_core integration tests

#![allow(dead_code)]

use chess_core::{Game, MoveOutcome, SquareId, SquareSet};

pub fn sq(name: &str) -> SquareId {
    SquareId::from_algebraic(name).unwrap_or_else(|| panic!("bad square {name}"))
}

pub fn squares(names: &[&str]) -> SquareSet {
    names.iter().map(|n| sq(n)).collect()
}

/// Plays UCI moves in order, failing the test on the first rejection.
pub fn play(game: &mut Game, moves: &[&str]) {
    for uci in moves {
        match game.attempt_uci_move(uci) {
            MoveOutcome::Applied { .. } => {}
            MoveOutcome::Rejected(reason) => {
                panic!("move {uci} rejected ({reason:?}) in {}", game.fen())
            }
        }
    }
}

/// Installs a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
