//! # Move Application
//!
//! Applies a move already validated against the legal-move map. The order of
//! operations per ply:
//!
//! 1. Classify the move (castle, en passant, promotion, double push) while the
//!    previous ply's en-passant pawn is still known.
//! 2. Clear the stale en-passant pawn.
//! 3. Remove a captured piece (on the destination, or beside it for en passant).
//! 4. Relocate the mover (and the rook when castling).
//! 5. Refresh the movers' own move sets, then resync every other piece whose
//!    reach crosses a vacated or newly occupied square.
//! 6. Update counters and flip the side to move.

use tracing::debug;

use crate::bitset::PieceSet;
use crate::board::SquareId;
use crate::constants::{LEFT_ROOK_FILE, RIGHT_ROOK_FILE};
use crate::move_gen;
use crate::position::Position;
use crate::types::{Color, Move, PieceId, PieceKind, SpecialMove};

/// Applies `from -> to` for the piece standing on `from`.
///
/// `promotion` is the piece a pawn becomes on the last rank. Returns `None`,
/// without touching the position, when `from` is empty or a castling or
/// en-passant partner piece is missing.
pub fn apply_move(pos: &mut Position, from: SquareId, to: SquareId, promotion: PieceKind) -> Option<Move> {
    let mover = pos.board.piece_at(from)?;
    let (color, kind) = {
        let piece = pos.piece(mover);
        (piece.color, piece.kind)
    };
    let target = pos.board.piece_at(to);
    let special = classify(pos, kind, color, from, to, target, promotion)?;

    if let Some(stale) = pos.ep_pawn.take() {
        pos.piece_mut(stale).flags.moved_two = false;
    }

    let capture = match special {
        SpecialMove::Castle { rook_from, rook_to } => {
            castle(pos, mover, from, to, rook_from, rook_to)?;
            None
        }
        _ => step(pos, mover, kind, from, to, target, special)?,
    };

    if kind == PieceKind::Pawn || capture.is_some() {
        pos.halfmoves = 0;
    } else {
        pos.halfmoves = pos.halfmoves.saturating_add(1);
    }
    if color == Color::Black {
        pos.fullmoves = pos.fullmoves.saturating_add(1);
    }
    pos.turn = color.opposite();

    let applied = Move { from, to, piece: mover, kind, capture, special };
    debug!(
        "[MOVE] {} {:?} {} -> {} capture={:?} special={:?}",
        color, kind, from, to, capture, special
    );
    Some(applied)
}

fn classify(
    pos: &Position,
    kind: PieceKind,
    color: Color,
    from: SquareId,
    to: SquareId,
    target: Option<PieceId>,
    promotion: PieceKind,
) -> Option<SpecialMove> {
    let file_delta = to.file() as i8 - from.file() as i8;
    let rank_delta = to.rank() as i8 - from.rank() as i8;

    let special = match kind {
        PieceKind::King if file_delta.abs() == 2 && rank_delta == 0 => {
            let (corner, landing) = if file_delta > 0 {
                (RIGHT_ROOK_FILE, to.file() - 1)
            } else {
                (LEFT_ROOK_FILE, to.file() + 1)
            };
            let rook_from = SquareId::from_coords(from.rank(), corner);
            pos.board.piece_at(rook_from)?;
            SpecialMove::Castle {
                rook_from,
                rook_to: SquareId::from_coords(from.rank(), landing),
            }
        }
        PieceKind::Pawn if file_delta != 0 && target.is_none() => {
            let captured_square = SquareId::from_coords(from.rank(), to.file());
            pos.board.piece_at(captured_square)?;
            SpecialMove::EnPassant { captured_square }
        }
        PieceKind::Pawn if to.rank() == color.promotion_rank() => SpecialMove::Promotion(promotion),
        PieceKind::Pawn if rank_delta.abs() == 2 => SpecialMove::DoublePush,
        _ => SpecialMove::None,
    };
    Some(special)
}

/// King and rook relocate together; both are recomputed in full.
fn castle(
    pos: &mut Position,
    king: PieceId,
    from: SquareId,
    to: SquareId,
    rook_from: SquareId,
    rook_to: SquareId,
) -> Option<()> {
    let rook = pos.board.piece_at(rook_from)?;
    pos.relocate(king, to);
    pos.relocate(rook, rook_to);
    pos.piece_mut(king).flags.has_moved = true;
    pos.piece_mut(rook).flags.has_moved = true;

    move_gen::calc_moves(pos, king);
    move_gen::calc_moves(pos, rook);
    let movers = PieceSet::single(king) | PieceSet::single(rook);
    move_gen::resync(pos, movers, &[from, rook_from], &[to, rook_to]);
    Some(())
}

/// Every non-castling move. Returns the captured piece, if any.
fn step(
    pos: &mut Position,
    mover: PieceId,
    kind: PieceKind,
    from: SquareId,
    to: SquareId,
    target: Option<PieceId>,
    special: SpecialMove,
) -> Option<Option<PieceId>> {
    let mut vacated = vec![from];
    let mut occupied = Vec::with_capacity(1);

    let capture = match special {
        SpecialMove::EnPassant { captured_square } => {
            let victim = pos.board.piece_at(captured_square)?;
            pos.delete_piece(victim);
            vacated.push(captured_square);
            occupied.push(to);
            Some(victim)
        }
        _ => match target {
            Some(victim) => {
                pos.delete_piece(victim);
                Some(victim)
            }
            None => {
                occupied.push(to);
                None
            }
        },
    };

    pos.relocate(mover, to);
    match special {
        SpecialMove::Promotion(new_kind) => {
            let piece = pos.piece_mut(mover);
            piece.kind = new_kind;
            piece.flags = Default::default();
            piece.flags.has_moved = true;
            move_gen::calc_moves(pos, mover);
        }
        _ => {
            if matches!(kind, PieceKind::Rook | PieceKind::King) {
                pos.piece_mut(mover).flags.has_moved = true;
            }
            let direct_capture = capture.is_some() && target.is_some();
            move_gen::advance(pos, mover, from, direct_capture);
        }
    }
    if special == SpecialMove::DoublePush {
        pos.piece_mut(mover).flags.moved_two = true;
        pos.ep_pawn = Some(mover);
    }

    move_gen::resync(pos, PieceSet::single(mover), &vacated, &occupied);
    Some(capture)
}
