//! # Legality Filter
//!
//! Turns raw reachability from the attack index into the legal-move map for
//! the side to move. Per piece, starting from the union of its move sets:
//!
//! 1. Drop squares held by a friendly piece.
//! 2. Pawns: pushes need empty squares, diagonals need an enemy piece or a
//!    valid en-passant target.
//! 3. King: drop attacked squares, the square behind the king on a sliding
//!    checker's line, and castling targets failing [`castle::check_castling_moves`].
//! 4. Other pieces while in check: intersect with [`check::check_blocks`].
//! 5. Pinned pieces: intersect with the pin line ([`pin::get_pin_blocks`]) plus
//!    the squares between the king and the piece.
//!
//! The result is `None` on checkmate and an empty map on stalemate.

pub mod castle;
pub mod check;
pub mod pin;

pub use castle::check_castling_moves;
pub use check::{blocking_moves, check_blocks};
pub use pin::get_pin_blocks;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::bitset::SquareSet;
use crate::board::SquareId;
use crate::constants::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::move_gen::attack::{attackers_of, is_square_attacked};
use crate::move_gen::sliding::{direction_between, squares_between};
use crate::position::Position;
use crate::types::{MoveCategory, Piece, PieceId, PieceKind};

/// Legal destinations per piece of the side to move.
///
/// Pieces without a legal move are left out, so a stalemated side yields an
/// empty map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LegalMoves(BTreeMap<PieceId, SquareSet>);

impl LegalMoves {
    pub fn get(&self, piece: PieceId) -> SquareSet {
        self.0.get(&piece).copied().unwrap_or_default()
    }

    pub fn contains(&self, piece: PieceId, to: SquareId) -> bool {
        self.get(piece).contains(to)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceId, SquareSet)> + '_ {
        self.0.iter().map(|(&id, &set)| (id, set))
    }

    /// Number of pieces with at least one legal move.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of (piece, destination) pairs.
    pub fn move_count(&self) -> usize {
        self.0.values().map(SquareSet::len).sum()
    }
}

/// Builds the legal-move map for `pos.turn`.
pub fn calculate_legal_moves(pos: &Position) -> Option<LegalMoves> {
    let color = pos.turn;
    let Some(king) = pos.king_of(color) else {
        return Some(LegalMoves::default());
    };
    let king_square = king.square;
    let blocks = check_blocks(pos, king_square, color.opposite());
    let friendly: SquareSet = pos.pieces_of(color).map(|p| p.square).collect();

    let mut map = BTreeMap::new();
    for piece in pos.pieces_of(color) {
        let candidates = piece.moves.all() - friendly;
        let mut legal = match piece.kind {
            PieceKind::King => filter_king(pos, piece, candidates),
            PieceKind::Pawn => filter_pawn(pos, piece, candidates, blocks),
            _ => match blocks {
                Some(mask) => candidates & mask,
                None => candidates,
            },
        };

        if piece.kind != PieceKind::King && !legal.is_empty() {
            if let Some(line) = get_pin_blocks(pos, king_square, piece.square) {
                legal &= line | squares_between(king_square, piece.square);
            }
        }

        if !legal.is_empty() {
            map.insert(piece.id, legal);
        }
    }

    if map.is_empty() && blocks.is_some() {
        return None;
    }
    Some(LegalMoves(map))
}

fn filter_king(pos: &Position, king: &Piece, candidates: SquareSet) -> SquareSet {
    let enemy = king.color.opposite();
    let mut legal: SquareSet = (king.moves.get(MoveCategory::Standard) & candidates)
        .iter()
        .filter(|&sq| !is_square_attacked(pos, sq, enemy))
        .collect();

    // A slider's ray stops at the king, so the square behind it looks safe.
    for id in attackers_of(pos, king.square, enemy) {
        let checker = pos.piece(id);
        if !checker.kind.is_slider() {
            continue;
        }
        if let Some((dr, df)) = direction_between(checker.square, king.square) {
            if let Some(behind) = king.square.offset(dr, df) {
                legal.remove(behind);
            }
        }
    }

    legal | (check_castling_moves(pos, king) & candidates)
}

fn filter_pawn(
    pos: &Position,
    pawn: &Piece,
    candidates: SquareSet,
    blocks: Option<SquareSet>,
) -> SquareSet {
    let mut legal = SquareSet::EMPTY;

    for sq in pawn.moves.get(MoveCategory::Forward) & candidates {
        if pos.board.is_empty(sq) {
            legal.insert(sq);
        }
    }
    for sq in pawn.moves.get(MoveCategory::TwoSquare) & candidates {
        let ahead = pawn.square.offset(pawn.color.forward(), 0);
        if ahead.is_some_and(|a| pos.board.is_empty(a)) && pos.board.is_empty(sq) {
            legal.insert(sq);
        }
    }

    let mut en_passant = None;
    let diagonals = pawn.moves.get(MoveCategory::LeftCapture) | pawn.moves.get(MoveCategory::RightCapture);
    for sq in diagonals & candidates {
        match pos.piece_at(sq) {
            Some(target) if target.color != pawn.color => legal.insert(sq),
            Some(_) => {}
            None => en_passant = en_passant.or(en_passant_capture(pos, pawn, sq)),
        }
    }

    match blocks {
        Some(mask) => {
            legal &= mask;
            if let Some((target, captured)) = en_passant {
                if mask.contains(target) || mask.contains(captured) {
                    legal.insert(target);
                }
            }
        }
        None => {
            if let Some((target, _)) = en_passant {
                legal.insert(target);
            }
        }
    }
    legal
}

/// Returns `(target, captured pawn square)` when `pawn` may capture en passant onto `target`.
fn en_passant_capture(pos: &Position, pawn: &Piece, target: SquareId) -> Option<(SquareId, SquareId)> {
    if pos.ep_target()? != target {
        return None;
    }
    let victim = pos.piece(pos.ep_pawn?);
    if victim.color == pawn.color
        || victim.square.rank() != pawn.square.rank()
        || victim.square.file() != target.file()
    {
        return None;
    }
    if ep_exposes_king(pos, pawn, victim.square, target) {
        return None;
    }
    Some((target, victim.square))
}

/// Whether lifting both pawns off their squares and dropping the capturer on
/// `target` opens a slider line onto the capturer's king.
fn ep_exposes_king(pos: &Position, pawn: &Piece, captured: SquareId, target: SquareId) -> bool {
    let Some(king) = pos.king_of(pawn.color) else {
        return false;
    };
    let occupied = |sq: SquareId| sq == target || (sq != pawn.square && sq != captured && !pos.board.is_empty(sq));

    let lines = ORTHOGONAL_DIRS
        .iter()
        .map(|&d| (d, true))
        .chain(DIAGONAL_DIRS.iter().map(|&d| (d, false)));
    for ((dr, df), orthogonal) in lines {
        let mut current = king.square;
        while let Some(next) = current.offset(dr, df) {
            if occupied(next) {
                if next != target {
                    if let Some(other) = pos.piece_at(next) {
                        let slides_here = match other.kind {
                            PieceKind::Queen => true,
                            PieceKind::Rook => orthogonal,
                            PieceKind::Bishop => !orthogonal,
                            _ => false,
                        };
                        if other.color != pawn.color && slides_here {
                            return true;
                        }
                    }
                }
                break;
            }
            current = next;
        }
    }
    false
}
