//! Attack detection over the attack index
//!
//! A square is attacked by a color when one of that color's pieces lists it in
//! a capturing category. Pawn pushes and castling targets only reach a square,
//! so they are skipped here even though they appear in its attacker set.

use crate::bitset::PieceSet;
use crate::board::SquareId;
use crate::position::Position;
use crate::types::Color;

/// Pieces of `by` that attack `square`.
pub fn attackers_of(pos: &Position, square: SquareId, by: Color) -> PieceSet {
    let candidates = pos.board.attackers(square) & pos.registry(by);
    candidates
        .iter()
        .filter(|&id| pos.piece(id).moves.capturing().contains(square))
        .collect()
}

/// Check if a square is under attack by pieces of the specified color
pub fn is_square_attacked(pos: &Position, square: SquareId, by: Color) -> bool {
    let candidates = pos.board.attackers(square) & pos.registry(by);
    candidates
        .iter()
        .any(|id| pos.piece(id).moves.capturing().contains(square))
}

/// Whether `color`'s king is attacked.
pub fn is_in_check(pos: &Position, color: Color) -> bool {
    pos.king_of(color)
        .is_some_and(|king| is_square_attacked(pos, king.square, color.opposite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn sq(name: &str) -> SquareId {
        SquareId::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_pawn_push_is_not_an_attack() {
        let mut pos = Position::empty();
        pos.add_piece(Color::White, PieceKind::Pawn, sq("e2"));
        pos.rebuild_all();

        assert!(!pos.board.attackers(sq("e3")).is_empty());
        assert!(!is_square_attacked(&pos, sq("e3"), Color::White));
        assert!(is_square_attacked(&pos, sq("d3"), Color::White));
        assert!(is_square_attacked(&pos, sq("f3"), Color::White));
    }

    #[test]
    fn test_attackers_filtered_by_color() {
        let mut pos = Position::empty();
        let rook = pos.add_piece(Color::Black, PieceKind::Rook, sq("a8"));
        pos.add_piece(Color::White, PieceKind::Rook, sq("h1"));
        pos.rebuild_all();

        assert_eq!(attackers_of(&pos, sq("a1"), Color::Black), PieceSet::single(rook));
        assert!(attackers_of(&pos, sq("a1"), Color::White).contains(crate::types::PieceId(1)));
        assert!(!is_square_attacked(&pos, sq("d4"), Color::Black));
    }
}
