//! Castling legality
//!
//! The king's castling categories already guarantee an unmoved king on its
//! home square and an unmoved rook in the matching corner. What remains is
//! checked here each ply:
//!
//! - the king is not in check,
//! - the square the king crosses and the square it lands on are empty and not
//!   attacked,
//! - on the a-file side, the square next to the rook is empty as well (it may
//!   be attacked; the king never crosses it).

use crate::bitset::SquareSet;
use crate::move_gen::attack::is_square_attacked;
use crate::position::Position;
use crate::types::{MoveCategory, Piece};

/// Castling destinations the king may take this ply.
pub fn check_castling_moves(pos: &Position, king: &Piece) -> SquareSet {
    let enemy = king.color.opposite();
    let mut legal = SquareSet::EMPTY;
    if is_square_attacked(pos, king.square, enemy) {
        return legal;
    }

    for (category, side) in [(MoveCategory::LeftCastle, -1i8), (MoveCategory::RightCastle, 1)] {
        for target in king.moves.get(category) {
            let Some(crossed) = king.square.offset(0, side) else {
                continue;
            };
            let path_clear = [crossed, target]
                .iter()
                .all(|&sq| pos.board.is_empty(sq) && !is_square_attacked(pos, sq, enemy));
            let rook_side_clear = side > 0
                || target
                    .offset(0, -1)
                    .is_some_and(|sq| pos.board.is_empty(sq));
            if path_clear && rook_side_clear {
                legal.insert(target);
            }
        }
    }
    legal
}
