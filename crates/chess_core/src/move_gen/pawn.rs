//! Pawn move generation
//!
//! ## Tracked Squares
//!
//! - **Forward**: the square ahead, always tracked while on the board.
//! - **TwoSquare**: two ahead, tracked only on the starting rank while the
//!   square ahead is empty. Occupancy of the target itself is checked by the
//!   legality filter.
//! - **LeftCapture / RightCapture**: both forward diagonals, tracked
//!   unconditionally so the attack index sees pawn threats on empty squares
//!   (king safety, castling paths, en passant).
//!
//! Only the forward square can change a pawn's reach, so block and unblock
//! react to that square alone.

use crate::board::SquareId;
use crate::position::Position;
use crate::types::{MoveCategory, MoveSets, Piece};

/// Full recompute of a pawn's reach
pub fn calc(piece: &Piece, pos: &Position) -> MoveSets {
    let mut moves = MoveSets::default();
    let forward = piece.color.forward();

    if let Some(ahead) = piece.square.offset(forward, 0) {
        moves.get_mut(MoveCategory::Forward).insert(ahead);
        if let Some(target) = two_square_target(piece, pos, ahead) {
            moves.get_mut(MoveCategory::TwoSquare).insert(target);
        }
    }
    if let Some(left) = piece.square.offset(forward, -1) {
        moves.get_mut(MoveCategory::LeftCapture).insert(left);
    }
    if let Some(right) = piece.square.offset(forward, 1) {
        moves.get_mut(MoveCategory::RightCapture).insert(right);
    }
    moves
}

/// The square ahead became occupied: the double push is gone.
pub fn block(piece: &Piece, _pos: &Position, square: SquareId) -> MoveSets {
    let mut moves = piece.moves;
    if piece.moves.get(MoveCategory::Forward).contains(square) {
        moves.get_mut(MoveCategory::TwoSquare).clear();
    }
    moves
}

/// The square ahead became empty: a pawn on its starting rank regains the double push.
pub fn unblock(piece: &Piece, pos: &Position, square: SquareId) -> MoveSets {
    let mut moves = piece.moves;
    if piece.moves.get(MoveCategory::Forward).contains(square) {
        if let Some(target) = two_square_target(piece, pos, square) {
            *moves.get_mut(MoveCategory::TwoSquare) = crate::bitset::SquareSet::single(target);
        }
    }
    moves
}

fn two_square_target(piece: &Piece, pos: &Position, ahead: SquareId) -> Option<SquareId> {
    if piece.square.rank() != piece.color.pawn_start_rank() || !pos.board.is_empty(ahead) {
        return None;
    }
    ahead.offset(piece.color.forward(), 0)
}
