//! Queen move generation
//!
//! Union of the rook and bishop axes.

use super::sliding;
use crate::board::SquareId;
use crate::position::Position;
use crate::types::{MoveCategory, MoveSets, Piece};

pub const CATEGORIES: [MoveCategory; 4] = [
    MoveCategory::NorthSouth,
    MoveCategory::WestEast,
    MoveCategory::NorthwestSoutheast,
    MoveCategory::NortheastSouthwest,
];

pub fn calc(piece: &Piece, pos: &Position) -> MoveSets {
    sliding::calc(piece, &pos.board, &CATEGORIES)
}

pub fn block(piece: &Piece, _pos: &Position, square: SquareId) -> MoveSets {
    sliding::block(piece, square)
}

pub fn unblock(piece: &Piece, pos: &Position, square: SquareId) -> MoveSets {
    sliding::unblock(piece, &pos.board, square)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_center_queen_reaches_twenty_seven() {
        let mut pos = Position::empty();
        let queen = pos.add_piece(Color::Black, PieceKind::Queen, SquareId::from_algebraic("d4").unwrap());
        assert_eq!(calc(pos.piece(queen), &pos).all().len(), 27);
    }
}
