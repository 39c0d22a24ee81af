//! # Move Calculation Dispatcher
//!
//! Routes the three per-type operations (full recompute, block, unblock) to the
//! module for each [`PieceKind`], and owns the resynchronization step that keeps
//! the attack index consistent after a move.
//!
//! ## Resync After a Move
//!
//! When pieces move, only squares whose occupancy changed can alter another
//! piece's reach, and only pieces listed as attackers on those squares care:
//!
//! 1. Every vacated square: each non-moving attacker gets `unblock` there.
//! 2. Every newly occupied square: each non-moving attacker gets `block` there.
//! 3. Both kings' castling categories are refreshed, since a rook may have left
//!    or been captured on its corner.
//!
//! Unblocks run first. A ray reopened through a vacated square stops at the
//! current occupancy anyway, and the following block pass trims anything the
//! newly occupied squares now shadow. The moving pieces themselves are handled
//! by the caller (see [`advance`] and [`calc_moves`]).

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

pub use attack::{attackers_of, is_in_check, is_square_attacked};

use tracing::trace;

use crate::bitset::{PieceSet, SquareSet};
use crate::board::SquareId;
use crate::position::Position;
use crate::types::{MoveCategory, PieceId, PieceKind};

/// Recomputes one piece's reach from scratch and registers it on the index.
pub fn calc_moves(pos: &mut Position, id: PieceId) -> SquareSet {
    let piece = pos.piece(id);
    let moves = match piece.kind {
        PieceKind::Pawn => pawn::calc(piece, pos),
        PieceKind::Knight => knight::calc(piece, pos),
        PieceKind::Bishop => bishop::calc(piece, pos),
        PieceKind::Rook => rook::calc(piece, pos),
        PieceKind::Queen => queen::calc(piece, pos),
        PieceKind::King => king::calc(piece, pos),
    };
    pos.set_moves(id, moves);
    moves.all()
}

/// `square` became occupied. Returns the squares the piece no longer reaches.
pub fn block(pos: &mut Position, id: PieceId, square: SquareId) -> SquareSet {
    let piece = pos.piece(id);
    let moves = match piece.kind {
        PieceKind::Pawn => pawn::block(piece, pos, square),
        PieceKind::Knight => knight::block(piece, pos, square),
        PieceKind::Bishop => bishop::block(piece, pos, square),
        PieceKind::Rook => rook::block(piece, pos, square),
        PieceKind::Queen => queen::block(piece, pos, square),
        PieceKind::King => king::block(piece, pos, square),
    };
    let (_, removed) = pos.set_moves(id, moves);
    removed
}

/// `square` became empty. Returns the squares the piece newly reaches.
pub fn unblock(pos: &mut Position, id: PieceId, square: SquareId) -> SquareSet {
    let piece = pos.piece(id);
    let moves = match piece.kind {
        PieceKind::Pawn => pawn::unblock(piece, pos, square),
        PieceKind::Knight => knight::unblock(piece, pos, square),
        PieceKind::Bishop => bishop::unblock(piece, pos, square),
        PieceKind::Rook => rook::unblock(piece, pos, square),
        PieceKind::Queen => queen::unblock(piece, pos, square),
        PieceKind::King => king::unblock(piece, pos, square),
    };
    let (added, _) = pos.set_moves(id, moves);
    added
}

/// Refreshes a piece that just moved from `from` to its current square.
///
/// Sliders keep their travel axis and recompute the others; everything else
/// is recomputed in full.
pub fn advance(pos: &mut Position, id: PieceId, from: SquareId, captured: bool) {
    let categories: &[MoveCategory] = match pos.piece(id).kind {
        PieceKind::Bishop => &bishop::CATEGORIES,
        PieceKind::Rook => &rook::CATEGORIES,
        PieceKind::Queen => &queen::CATEGORIES,
        _ => {
            calc_moves(pos, id);
            return;
        }
    };
    let moves = sliding::advance(pos.piece(id), &pos.board, categories, from, captured);
    pos.set_moves(id, moves);
}

/// Propagates occupancy changes to every non-moving piece whose reach crosses
/// a vacated or newly occupied square.
pub fn resync(pos: &mut Position, movers: PieceSet, vacated: &[SquareId], occupied: &[SquareId]) {
    for &square in vacated {
        for id in pos.board.attackers(square) - movers {
            let added = unblock(pos, id, square);
            if !added.is_empty() {
                trace!("[MOVE] unblock {} at {}: +{} squares", id, square, added.len());
            }
        }
    }
    for &square in occupied {
        for id in pos.board.attackers(square) - movers {
            let removed = block(pos, id, square);
            if !removed.is_empty() {
                trace!("[MOVE] block {} at {}: -{} squares", id, square, removed.len());
            }
        }
    }
    refresh_castling(pos);
}

/// Re-derives both kings' castling categories from current rook placement and flags.
pub fn refresh_castling(pos: &mut Position) {
    for color in crate::types::Color::BOTH {
        let Some(king) = pos.king_of(color) else {
            continue;
        };
        let id = king.id;
        let sides = king::castle_sides(king, pos);
        pos.set_category(
            id,
            MoveCategory::LeftCastle,
            sides.left.map_or(SquareSet::EMPTY, SquareSet::single),
        );
        pos.set_category(
            id,
            MoveCategory::RightCastle,
            sides.right.map_or(SquareSet::EMPTY, SquareSet::single),
        );
    }
}
