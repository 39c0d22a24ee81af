//! Sliding piece move generation
//!
//! Common functionality for bishops, rooks and queens. Each axis (file, rank,
//! two diagonals) is one move category holding the rays in both directions.
//!
//! ## Ray Policy
//!
//! A ray runs from the piece outward and stops at the first occupied square,
//! inclusive. The blocking square stays reachable whatever its color: it is a
//! capture target or a defended friendly piece, and the legality filter sorts
//! that out later.
//!
//! ## Incremental Updates
//!
//! - **block** at `s`: drop every square beyond `s` on the ray through `s`.
//! - **unblock** at `s`: extend the ray from `s` to the next occupied square.
//! - **advance**: when the slider itself travels along one of its axes, that
//!   axis keeps its squares, swaps the destination for the departure square,
//!   and on a capture extends past the destination. Only the other axes are
//!   recomputed.

use crate::bitset::SquareSet;
use crate::board::{Board, SquareId};
use crate::types::{MoveCategory, MoveSets, Piece};

/// Squares from `from` (exclusive) in direction `dir` up to and including the
/// first occupied square or the board edge.
pub fn ray(board: &Board, from: SquareId, dir: (i8, i8)) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    let mut current = from;
    while let Some(next) = current.offset(dir.0, dir.1) {
        set.insert(next);
        if !board.is_empty(next) {
            break;
        }
        current = next;
    }
    set
}

/// Squares from `from` (exclusive) to the board edge, ignoring occupancy.
pub fn line_beyond(from: SquareId, dir: (i8, i8)) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    let mut current = from;
    while let Some(next) = current.offset(dir.0, dir.1) {
        set.insert(next);
        current = next;
    }
    set
}

/// Unit step from `from` toward `to` if they share a rank, file or diagonal.
pub fn direction_between(from: SquareId, to: SquareId) -> Option<(i8, i8)> {
    if from == to {
        return None;
    }
    let dr = to.rank() as i8 - from.rank() as i8;
    let df = to.file() as i8 - from.file() as i8;
    if dr == 0 || df == 0 || dr.abs() == df.abs() {
        Some((dr.signum(), df.signum()))
    } else {
        None
    }
}

/// Squares strictly between two aligned squares. Empty if not aligned.
pub fn squares_between(from: SquareId, to: SquareId) -> SquareSet {
    let Some(dir) = direction_between(from, to) else {
        return SquareSet::EMPTY;
    };
    let mut set = SquareSet::EMPTY;
    let mut current = from;
    while let Some(next) = current.offset(dir.0, dir.1) {
        if next == to {
            break;
        }
        set.insert(next);
        current = next;
    }
    set
}

/// Both rays of one axis.
pub fn axis(board: &Board, from: SquareId, category: MoveCategory) -> SquareSet {
    match category.axis() {
        Some((dr, df)) => ray(board, from, (dr, df)) | ray(board, from, (-dr, -df)),
        None => SquareSet::EMPTY,
    }
}

/// Full recompute over the given slider categories.
pub fn calc(piece: &Piece, board: &Board, categories: &[MoveCategory]) -> MoveSets {
    let mut moves = MoveSets::default();
    for &category in categories {
        *moves.get_mut(category) = axis(board, piece.square, category);
    }
    moves
}

/// `square` became occupied: cut the ray passing through it.
pub fn block(piece: &Piece, square: SquareId) -> MoveSets {
    let mut moves = piece.moves;
    let (Some(category), Some(dir)) = (
        piece.moves.category_of(square),
        direction_between(piece.square, square),
    ) else {
        return moves;
    };
    if category.axis().is_some() {
        *moves.get_mut(category) -= line_beyond(square, dir);
    }
    moves
}

/// `square` became empty: extend the ray that used to stop there.
pub fn unblock(piece: &Piece, board: &Board, square: SquareId) -> MoveSets {
    let mut moves = piece.moves;
    let (Some(category), Some(dir)) = (
        piece.moves.category_of(square),
        direction_between(piece.square, square),
    ) else {
        return moves;
    };
    if category.axis().is_some() {
        *moves.get_mut(category) |= ray(board, square, dir);
    }
    moves
}

/// The slider moved from `from` to its current square. `captured` is set when
/// the destination was occupied before the move.
pub fn advance(
    piece: &Piece,
    board: &Board,
    categories: &[MoveCategory],
    from: SquareId,
    captured: bool,
) -> MoveSets {
    let to = piece.square;
    let travel = direction_between(from, to)
        .and_then(|(dr, df)| MoveCategory::for_direction(dr, df).map(|c| (c, (dr, df))))
        .filter(|(c, _)| categories.contains(c));

    let Some((travel_axis, dir)) = travel else {
        return calc(piece, board, categories);
    };

    let mut moves = MoveSets::default();
    for &category in categories {
        let set = if category == travel_axis {
            let mut set = piece.moves.get(category);
            set.remove(to);
            set.insert(from);
            if captured {
                set |= ray(board, to, dir);
            }
            set
        } else {
            axis(board, to, category)
        };
        *moves.get_mut(category) = set;
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> SquareId {
        SquareId::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_ray_stops_at_first_occupied_inclusive() {
        let mut board = Board::empty();
        board.square_mut(sq("a5")).piece = Some(crate::types::PieceId(0));

        let north = ray(&board, sq("a1"), (-1, 0));
        let expected: SquareSet = ["a2", "a3", "a4", "a5"].iter().map(|s| sq(s)).collect();
        assert_eq!(north, expected);
    }

    #[test]
    fn test_between_and_direction() {
        assert_eq!(direction_between(sq("a1"), sq("a5")), Some((-1, 0)));
        assert_eq!(direction_between(sq("a1"), sq("h8")), Some((-1, 1)));
        assert_eq!(direction_between(sq("a1"), sq("b3")), None);

        let between: SquareSet = ["b2", "c3"].iter().map(|s| sq(s)).collect();
        assert_eq!(squares_between(sq("a1"), sq("d4")), between);
        assert!(squares_between(sq("a1"), sq("a2")).is_empty());
    }

    #[test]
    fn test_line_beyond_ignores_occupancy() {
        let line = line_beyond(sq("f1"), (0, 1));
        assert_eq!(line.len(), 2);
        assert!(line.contains(sq("h1")));
    }
}
