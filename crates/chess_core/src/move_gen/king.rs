//! King move generation
//!
//! ## King Movement Rules
//!
//! - **Standard**: the up to eight adjacent squares.
//! - **LeftCastle / RightCastle**: the square two files toward the a- or
//!   h-file. Present only while the king is unmoved on its home square and the
//!   matching corner holds an unmoved friendly rook.
//!
//! Castling targets are reachable but not attacked. Whether the path is empty
//! and safe is decided by the legality filter each ply, so occupancy changes
//! never touch the king's sets. The castling categories depend on rook flags
//! rather than occupancy; the dispatcher refreshes them after every move.

use crate::bitset::SquareSet;
use crate::board::SquareId;
use crate::constants::{KING_HOME_FILE, KING_OFFSETS, LEFT_ROOK_FILE, RIGHT_ROOK_FILE};
use crate::position::Position;
use crate::types::{MoveCategory, MoveSets, Piece, PieceKind};

/// Castling targets currently granted by piece placement and flags
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CastleSides {
    pub left: Option<SquareId>,
    pub right: Option<SquareId>,
}

pub fn calc(piece: &Piece, pos: &Position) -> MoveSets {
    let mut moves = MoveSets::default();
    let standard = moves.get_mut(MoveCategory::Standard);
    for (dr, df) in KING_OFFSETS {
        if let Some(target) = piece.square.offset(dr, df) {
            standard.insert(target);
        }
    }

    let sides = castle_sides(piece, pos);
    *moves.get_mut(MoveCategory::LeftCastle) = sides.left.map_or(SquareSet::EMPTY, SquareSet::single);
    *moves.get_mut(MoveCategory::RightCastle) = sides.right.map_or(SquareSet::EMPTY, SquareSet::single);
    moves
}

pub fn block(piece: &Piece, _pos: &Position, _square: SquareId) -> MoveSets {
    piece.moves
}

pub fn unblock(piece: &Piece, _pos: &Position, _square: SquareId) -> MoveSets {
    piece.moves
}

pub fn castle_sides(king: &Piece, pos: &Position) -> CastleSides {
    let home = king.color.home_rank();
    if king.flags.has_moved || king.square != SquareId::from_coords(home, KING_HOME_FILE) {
        return CastleSides::default();
    }

    let rook_ready = |file: u8| {
        pos.piece_at(SquareId::from_coords(home, file)).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.flags.has_moved
        })
    };

    CastleSides {
        left: rook_ready(LEFT_ROOK_FILE).then(|| SquareId::from_coords(home, KING_HOME_FILE - 2)),
        right: rook_ready(RIGHT_ROOK_FILE).then(|| SquareId::from_coords(home, KING_HOME_FILE + 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn sq(name: &str) -> SquareId {
        SquareId::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_castle_targets_follow_unmoved_rooks() {
        let mut pos = Position::empty();
        let king = pos.add_piece(Color::White, PieceKind::King, sq("e1"));
        let rook = pos.add_piece(Color::White, PieceKind::Rook, sq("h1"));
        pos.add_piece(Color::Black, PieceKind::Rook, sq("a1"));

        let sides = castle_sides(pos.piece(king), &pos);
        assert_eq!(sides.right, Some(sq("g1")));
        assert_eq!(sides.left, None, "enemy rook on a1 grants nothing");

        pos.piece_mut(rook).flags.has_moved = true;
        assert_eq!(castle_sides(pos.piece(king), &pos), CastleSides::default());
    }

    #[test]
    fn test_castle_targets_are_not_attacks() {
        let mut pos = Position::empty();
        let king = pos.add_piece(Color::Black, PieceKind::King, sq("e8"));
        pos.add_piece(Color::Black, PieceKind::Rook, sq("a8"));
        let moves = calc(pos.piece(king), &pos);

        assert!(moves.all().contains(sq("c8")));
        assert!(!moves.capturing().contains(sq("c8")));
        assert_eq!(moves.get(MoveCategory::Standard).len(), 5);
    }
}
