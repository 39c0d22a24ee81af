//! Pin detection
//!
//! A piece is pinned when it is the only occupant of the line between its own
//! king and an enemy slider that moves along that line.

use crate::bitset::SquareSet;
use crate::board::SquareId;
use crate::move_gen::sliding::{direction_between, squares_between};
use crate::position::Position;
use crate::types::PieceKind;

/// Walks outward from the piece on `piece_square`, away from the king on
/// `king_square`. If the first occupant found is an enemy rook or queen (rank
/// or file) or bishop or queen (diagonal), returns the squares beyond the piece
/// up to and including that pinner.
///
/// Returns `None` when the two squares are not aligned, when the line between
/// king and piece is not empty, or when no pinner sits behind the piece.
pub fn get_pin_blocks(pos: &Position, king_square: SquareId, piece_square: SquareId) -> Option<SquareSet> {
    let dir = direction_between(king_square, piece_square)?;
    let king = pos.piece_at(king_square)?;
    let between = squares_between(king_square, piece_square);
    if between.iter().any(|sq| !pos.board.is_empty(sq)) {
        return None;
    }

    let orthogonal = dir.0 == 0 || dir.1 == 0;
    let mut line = SquareSet::EMPTY;
    let mut current = piece_square;
    while let Some(next) = current.offset(dir.0, dir.1) {
        line.insert(next);
        if let Some(occupant) = pos.piece_at(next) {
            let pins = occupant.color != king.color
                && match occupant.kind {
                    PieceKind::Queen => true,
                    PieceKind::Rook => orthogonal,
                    PieceKind::Bishop => !orthogonal,
                    _ => false,
                };
            return pins.then_some(line);
        }
        current = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn sq(name: &str) -> SquareId {
        SquareId::from_algebraic(name).unwrap()
    }

    fn a_file_setup() -> Position {
        let mut pos = Position::empty();
        pos.add_piece(Color::White, PieceKind::King, sq("a1"));
        pos.add_piece(Color::White, PieceKind::Pawn, sq("a3"));
        pos.add_piece(Color::Black, PieceKind::Rook, sq("a7"));
        pos.add_piece(Color::Black, PieceKind::King, sq("h8"));
        pos.rebuild_all();
        pos
    }

    #[test]
    fn test_pin_returns_line_to_attacker() {
        //! King a1, pawn a3, rook a7: the pawn may only stay on a4-a7.
        let pos = a_file_setup();
        let expected: SquareSet = ["a4", "a5", "a6", "a7"].iter().map(|s| sq(s)).collect();
        assert_eq!(get_pin_blocks(&pos, sq("a1"), sq("a3")), Some(expected));
    }

    #[test]
    fn test_no_pin_without_attacker() {
        let mut pos = a_file_setup();
        let rook = pos.piece_at(sq("a7")).map(|p| p.id).unwrap();
        pos.delete_piece(rook);
        assert_eq!(get_pin_blocks(&pos, sq("a1"), sq("a3")), None);
    }

    #[test]
    fn test_no_pin_with_attacker_side_block() {
        let mut pos = a_file_setup();
        pos.add_piece(Color::White, PieceKind::Pawn, sq("a5"));
        assert_eq!(get_pin_blocks(&pos, sq("a1"), sq("a3")), None);
    }

    #[test]
    fn test_no_pin_with_king_side_block() {
        let mut pos = a_file_setup();
        pos.add_piece(Color::White, PieceKind::Pawn, sq("a2"));
        assert_eq!(get_pin_blocks(&pos, sq("a1"), sq("a3")), None);
    }

    #[test]
    fn test_rook_does_not_pin_on_diagonal() {
        let mut pos = Position::empty();
        pos.add_piece(Color::White, PieceKind::King, sq("a1"));
        pos.add_piece(Color::White, PieceKind::Knight, sq("c3"));
        pos.add_piece(Color::Black, PieceKind::Rook, sq("f6"));
        assert_eq!(get_pin_blocks(&pos, sq("a1"), sq("c3")), None);

        pos.add_piece(Color::Black, PieceKind::Bishop, sq("e5"));
        assert!(get_pin_blocks(&pos, sq("a1"), sq("c3")).is_some());
    }
}
