//! Knight move generation
//!
//! Knights jump, so occupancy never changes which squares they reach. Block
//! and unblock leave the move set as it is; landing on a friendly piece is
//! removed by the legality filter.

use crate::board::SquareId;
use crate::constants::KNIGHT_OFFSETS;
use crate::position::Position;
use crate::types::{MoveCategory, MoveSets, Piece};

pub fn calc(piece: &Piece, _pos: &Position) -> MoveSets {
    let mut moves = MoveSets::default();
    let jumps = moves.get_mut(MoveCategory::Jumps);
    for (dr, df) in KNIGHT_OFFSETS {
        if let Some(target) = piece.square.offset(dr, df) {
            jumps.insert(target);
        }
    }
    moves
}

pub fn block(piece: &Piece, _pos: &Position, _square: SquareId) -> MoveSets {
    piece.moves
}

pub fn unblock(piece: &Piece, _pos: &Position, _square: SquareId) -> MoveSets {
    piece.moves
}
