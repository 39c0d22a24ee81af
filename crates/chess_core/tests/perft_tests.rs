//! Perft node counts against published reference figures
//!
//! Every count here walks the legal-move maps produced by the incremental
//! attack index. A single missed block, unblock or castling refresh shows up
//! as a wrong leaf count.

mod common;

use chess_core::constants::{KIWIPETE_FEN, START_FEN};
use chess_core::utils::perft;
use chess_core::Game;

fn perft_from(fen: &str, depth: u32) -> u64 {
    let game = Game::from_fen(fen).expect("reference position parses");
    perft(&game, depth)
}

// ============================================================================
// Initial position
// ============================================================================

#[test]
fn test_start_position_depth_3() {
    //! 8,902 leaves three plies deep from the initial position
    common::init_tracing();
    assert_eq!(perft_from(START_FEN, 1), 20);
    assert_eq!(perft_from(START_FEN, 2), 400);
    assert_eq!(perft_from(START_FEN, 3), 8_902);
}

#[test]
fn test_start_position_depth_4() {
    //! Depth 4 is the first depth with checks and captures on both sides
    assert_eq!(perft_from(START_FEN, 4), 197_281);
}

// ============================================================================
// Kiwipete: castling, pins, en passant and promotions all in play
// ============================================================================

#[test]
fn test_kiwipete_shallow() {
    assert_eq!(perft_from(KIWIPETE_FEN, 1), 48);
    assert_eq!(perft_from(KIWIPETE_FEN, 2), 2_039);
}

#[test]
fn test_kiwipete_depth_3() {
    assert_eq!(perft_from(KIWIPETE_FEN, 3), 97_862);
}

// ============================================================================
// Endgame with rank pins on en passant
// ============================================================================

#[test]
fn test_position_3() {
    //! Sparse rook endgame. Exercises the en-passant rank-pin rule:
    //! lifting both pawns off the fourth or fifth rank may expose a king.
    let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    assert_eq!(perft_from(fen, 1), 14);
    assert_eq!(perft_from(fen, 2), 191);
    assert_eq!(perft_from(fen, 3), 2_812);
    assert_eq!(perft_from(fen, 4), 43_238);
}

// ============================================================================
// Promotions and checks
// ============================================================================

#[test]
fn test_position_4() {
    let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    assert_eq!(perft_from(fen, 1), 6);
    assert_eq!(perft_from(fen, 2), 264);
    assert_eq!(perft_from(fen, 3), 9_467);
}

#[test]
fn test_position_4_mirrored() {
    //! Same tree with colors swapped; must give identical counts
    let fen = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
    assert_eq!(perft_from(fen, 1), 6);
    assert_eq!(perft_from(fen, 2), 264);
    assert_eq!(perft_from(fen, 3), 9_467);
}

#[test]
fn test_position_5() {
    let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
    assert_eq!(perft_from(fen, 1), 44);
    assert_eq!(perft_from(fen, 2), 1_486);
    assert_eq!(perft_from(fen, 3), 62_379);
}

#[test]
fn test_position_6() {
    let fen = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";
    assert_eq!(perft_from(fen, 1), 46);
    assert_eq!(perft_from(fen, 2), 2_079);
}
