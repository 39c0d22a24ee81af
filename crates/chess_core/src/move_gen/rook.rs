//! Rook move generation
//!
//! A file axis and a rank axis, tracked separately so a rook sliding along its
//! file only recomputes its rank.

use super::sliding;
use crate::board::SquareId;
use crate::position::Position;
use crate::types::{MoveCategory, MoveSets, Piece};

pub const CATEGORIES: [MoveCategory; 2] = [MoveCategory::NorthSouth, MoveCategory::WestEast];

pub fn calc(piece: &Piece, pos: &Position) -> MoveSets {
    sliding::calc(piece, &pos.board, &CATEGORIES)
}

pub fn block(piece: &Piece, _pos: &Position, square: SquareId) -> MoveSets {
    sliding::block(piece, square)
}

pub fn unblock(piece: &Piece, pos: &Position, square: SquareId) -> MoveSets {
    sliding::unblock(piece, &pos.board, square)
}
