//! Check detection and check-response masks

use crate::bitset::SquareSet;
use crate::board::SquareId;
use crate::move_gen::attack::attackers_of;
use crate::move_gen::sliding::squares_between;
use crate::position::Position;
use crate::types::{Color, PieceKind};

/// Squares a non-king piece may move to while the king on `king_square` is in check.
///
/// - `None`: the king is not attacked.
/// - Single check: the attacker's square, plus the squares between it and the
///   king when the attacker slides.
/// - Double check: the empty set. Only the king can answer.
pub fn check_blocks(pos: &Position, king_square: SquareId, by: Color) -> Option<SquareSet> {
    let checkers = attackers_of(pos, king_square, by);
    match checkers.len() {
        0 => None,
        1 => {
            let checker = pos.piece(checkers.first()?);
            Some(blocking_moves(king_square, checker.square, checker.kind))
        }
        _ => Some(SquareSet::EMPTY),
    }
}

/// Squares that capture or interpose a single attacker.
///
/// Knights and pawns cannot be interposed, so only their own square counts.
pub fn blocking_moves(king_square: SquareId, attacker_square: SquareId, attacker: PieceKind) -> SquareSet {
    let mut squares = SquareSet::single(attacker_square);
    if attacker.is_slider() {
        squares |= squares_between(king_square, attacker_square);
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> SquareId {
        SquareId::from_algebraic(name).unwrap()
    }

    fn set(names: &[&str]) -> SquareSet {
        names.iter().map(|n| sq(n)).collect()
    }

    #[test]
    fn test_blocking_moves_for_rook_attacker() {
        //! A rook on a5 checking a1 can be captured or blocked on a2-a4.
        assert_eq!(
            blocking_moves(sq("a1"), sq("a5"), PieceKind::Rook),
            set(&["a2", "a3", "a4", "a5"])
        );
    }

    #[test]
    fn test_blocking_moves_for_knight_attacker() {
        //! A knight check can only be answered by capturing the knight.
        assert_eq!(blocking_moves(sq("a1"), sq("b3"), PieceKind::Knight), set(&["b3"]));
    }

    #[test]
    fn test_check_blocks_none_double_and_single() {
        let mut pos = Position::empty();
        pos.add_piece(Color::White, PieceKind::King, sq("e1"));
        pos.add_piece(Color::Black, PieceKind::King, sq("h8"));
        let rook = pos.add_piece(Color::Black, PieceKind::Rook, sq("a2"));
        pos.rebuild_all();
        assert_eq!(check_blocks(&pos, sq("e1"), Color::Black), None);

        let queen = pos.add_piece(Color::Black, PieceKind::Queen, sq("e5"));
        pos.rebuild_all();
        assert_eq!(
            check_blocks(&pos, sq("e1"), Color::Black),
            Some(set(&["e2", "e3", "e4", "e5"]))
        );

        pos.delete_piece(rook);
        let knight = pos.add_piece(Color::Black, PieceKind::Knight, sq("d3"));
        pos.rebuild_all();
        assert_eq!(check_blocks(&pos, sq("e1"), Color::Black), Some(SquareSet::EMPTY));
        assert!(pos.is_live(queen) && pos.is_live(knight));
    }
}
