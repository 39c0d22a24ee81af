//! Utility functions and helpers
//!
//! Perft (performance test) node counting. Walking every legal move to a fixed
//! depth and comparing the leaf count against published figures exercises
//! every incremental update path: blocks, unblocks, captures, castling, en
//! passant and promotion.

use crate::api::{Game, MoveOutcome};
use crate::board::SquareId;
use crate::types::PieceKind;

/// Leaf count of the legal move tree below `game`, `depth` plies deep.
/// Each promotion counts once per promotion piece.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let Some(legal) = game.legal_moves() else {
        return 0;
    };

    let mut nodes = 0;
    for (id, targets) in legal.iter() {
        let from = game.position().piece(id).square;
        for to in targets {
            let promotions = promotion_choices(game, from, to);
            if depth == 1 {
                nodes += promotions.len() as u64;
                continue;
            }
            for &kind in promotions {
                let mut child = game.clone();
                if child.attempt_move_with_promotion(from, to, kind).is_applied() {
                    nodes += perft(&child, depth - 1);
                }
            }
        }
    }
    nodes
}

/// Per-move leaf counts at the root, keyed by UCI move, sorted.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(String, u64)> {
    let Some(legal) = game.legal_moves() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (id, targets) in legal.iter() {
        let from = game.position().piece(id).square;
        for to in targets {
            for &kind in promotion_choices(game, from, to) {
                let mut child = game.clone();
                if let MoveOutcome::Applied { mv, .. } =
                    child.attempt_move_with_promotion(from, to, kind)
                {
                    let nodes = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
                    out.push((mv.uci(), nodes));
                }
            }
        }
    }
    out.sort();
    out
}

fn promotion_choices(game: &Game, from: SquareId, to: SquareId) -> &'static [PieceKind] {
    match game.position().piece_at(from) {
        Some(piece) if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() => {
            &PieceKind::PROMOTIONS
        }
        _ => &[PieceKind::Queen],
    }
}
