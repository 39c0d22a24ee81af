//! # Core Types - Pieces, Colors and Move Categories
//!
//! ## Pieces Live in an Arena
//!
//! Squares and pieces reference each other in both directions: a square knows
//! its occupant and its attackers, a piece knows its square and the squares it
//! reaches. Instead of shared pointers, every piece is stored once in the
//! position's arena and referenced by a [`PieceId`] index. The id is assigned
//! when the position is loaded and stays stable until the piece is captured.
//!
//! ## Move Categories
//!
//! A piece's reachable squares are not stored as one flat set. They are split by
//! the axis or rule that produced them ([`MoveCategory`]):
//!
//! | Kind   | Categories |
//! |--------|------------|
//! | Pawn   | `Forward`, `TwoSquare`, `LeftCapture`, `RightCapture` |
//! | Knight | `Jumps` |
//! | Bishop | `NorthwestSoutheast`, `NortheastSouthwest` |
//! | Rook   | `NorthSouth`, `WestEast` |
//! | Queen  | rook and bishop categories |
//! | King   | `Standard`, `LeftCastle`, `RightCastle` |
//!
//! The split lets a rook that slides along its file keep its file set and only
//! recompute its rank set, and lets the legality filter treat pawn pushes and
//! castling targets differently from captures. Categories of one piece never
//! overlap, so the union of all categories is the piece's reach.
//!
//! "Left" always means toward the a-file and "right" toward the h-file,
//! independent of the piece's color.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bitset::SquareSet;
use crate::board::SquareId;

/// Side of a piece or side to move
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Registry slot for this color.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank delta of a pawn push. Rank 0 is the top of the board, so White
    /// moves toward lower ranks.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank holding this side's king and rooks at the start.
    #[inline]
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Move categories a piece of this kind tracks.
    pub fn categories(self) -> &'static [MoveCategory] {
        use MoveCategory::*;
        match self {
            PieceKind::Pawn => &[Forward, TwoSquare, LeftCapture, RightCapture],
            PieceKind::Knight => &[Jumps],
            PieceKind::Bishop => &[NorthwestSoutheast, NortheastSouthwest],
            PieceKind::Rook => &[NorthSouth, WestEast],
            PieceKind::Queen => &[NorthSouth, WestEast, NorthwestSoutheast, NortheastSouthwest],
            PieceKind::King => &[Standard, LeftCastle, RightCastle],
        }
    }

    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    #[inline]
    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Position-string letter, uppercase for White.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((kind, color))
    }
}

/// Stable index of a piece in the position's arena
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u8);

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named per-piece flags
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceFlags {
    /// Rook or king has left its starting square (castling eligibility)
    pub has_moved: bool,
    /// Pawn advanced two squares on the previous ply (en-passant eligibility)
    pub moved_two: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveCategory {
    Forward,
    TwoSquare,
    LeftCapture,
    RightCapture,
    Jumps,
    NorthSouth,
    WestEast,
    NorthwestSoutheast,
    NortheastSouthwest,
    Standard,
    LeftCastle,
    RightCastle,
}

impl MoveCategory {
    pub const COUNT: usize = 12;

    /// Whether squares in this category are attacked, i.e. a piece standing
    /// there could be captured. Pawn pushes and castling targets only reach.
    #[inline]
    pub fn captures(self) -> bool {
        !matches!(
            self,
            MoveCategory::Forward
                | MoveCategory::TwoSquare
                | MoveCategory::LeftCastle
                | MoveCategory::RightCastle
        )
    }

    /// Sliding ray direction pair (rank delta, file delta) for slider categories.
    pub fn axis(self) -> Option<(i8, i8)> {
        match self {
            MoveCategory::NorthSouth => Some((1, 0)),
            MoveCategory::WestEast => Some((0, 1)),
            MoveCategory::NorthwestSoutheast => Some((1, 1)),
            MoveCategory::NortheastSouthwest => Some((1, -1)),
            _ => None,
        }
    }

    /// Slider category whose axis contains the direction `(dr, df)`.
    pub fn for_direction(dr: i8, df: i8) -> Option<MoveCategory> {
        match (dr, df) {
            (0, 0) => None,
            (_, 0) => Some(MoveCategory::NorthSouth),
            (0, _) => Some(MoveCategory::WestEast),
            (a, b) if a == b => Some(MoveCategory::NorthwestSoutheast),
            (a, b) if a == -b => Some(MoveCategory::NortheastSouthwest),
            _ => None,
        }
    }
}

/// A piece's reachable squares, one set per category
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSets([SquareSet; MoveCategory::COUNT]);

impl MoveSets {
    #[inline]
    pub fn get(&self, category: MoveCategory) -> SquareSet {
        self.0[category as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, category: MoveCategory) -> &mut SquareSet {
        &mut self.0[category as usize]
    }

    /// Union of every category.
    pub fn all(&self) -> SquareSet {
        self.0.iter().fold(SquareSet::EMPTY, |acc, set| acc | *set)
    }

    /// Union of the capturing categories.
    pub fn capturing(&self) -> SquareSet {
        let mut acc = SquareSet::EMPTY;
        for (i, set) in self.0.iter().enumerate() {
            if CATEGORIES[i].captures() {
                acc |= *set;
            }
        }
        acc
    }

    /// Category holding `square`, if the piece reaches it at all.
    pub fn category_of(&self, square: SquareId) -> Option<MoveCategory> {
        self.0
            .iter()
            .position(|set| set.contains(square))
            .map(|i| CATEGORIES[i])
    }

    pub fn clear(&mut self) {
        self.0 = [SquareSet::EMPTY; MoveCategory::COUNT];
    }
}

const CATEGORIES: [MoveCategory; MoveCategory::COUNT] = [
    MoveCategory::Forward,
    MoveCategory::TwoSquare,
    MoveCategory::LeftCapture,
    MoveCategory::RightCapture,
    MoveCategory::Jumps,
    MoveCategory::NorthSouth,
    MoveCategory::WestEast,
    MoveCategory::NorthwestSoutheast,
    MoveCategory::NortheastSouthwest,
    MoveCategory::Standard,
    MoveCategory::LeftCastle,
    MoveCategory::RightCastle,
];

/// A live piece
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub square: SquareId,
    pub moves: MoveSets,
    pub flags: PieceFlags,
}

impl Piece {
    pub fn new(id: PieceId, color: Color, kind: PieceKind, square: SquareId) -> Self {
        Self {
            id,
            color,
            kind,
            square,
            moves: MoveSets::default(),
            flags: PieceFlags::default(),
        }
    }
}

/// Rule-specific part of an applied move
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialMove {
    None,
    DoublePush,
    EnPassant { captured_square: SquareId },
    Castle { rook_from: SquareId, rook_to: SquareId },
    Promotion(PieceKind),
}

/// A move as applied to the position
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: SquareId,
    pub to: SquareId,
    pub piece: PieceId,
    pub kind: PieceKind,
    /// Captured piece. For en passant it does not stand on `to`.
    pub capture: Option<PieceId>,
    pub special: SpecialMove,
}

impl Move {
    /// Long algebraic notation as spoken by UCI engines (`e2e4`, `e7e8q`).
    pub fn uci(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let SpecialMove::Promotion(kind) = self.special {
            out.push(kind.to_char(Color::Black));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_disjoint_by_kind() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            let cats = kind.categories();
            for (i, a) in cats.iter().enumerate() {
                for b in &cats[i + 1..] {
                    assert_ne!(a, b, "{:?} lists a category twice", kind);
                }
            }
        }
    }

    #[test]
    fn test_capturing_excludes_pushes_and_castles() {
        let mut sets = MoveSets::default();
        sets.get_mut(MoveCategory::Forward).insert(SquareId(40));
        sets.get_mut(MoveCategory::LeftCapture).insert(SquareId(41));
        sets.get_mut(MoveCategory::RightCastle).insert(SquareId(62));

        assert_eq!(sets.all().len(), 3);
        assert_eq!(sets.capturing(), SquareSet::single(SquareId(41)));
        assert_eq!(sets.category_of(SquareId(62)), Some(MoveCategory::RightCastle));
        assert_eq!(sets.category_of(SquareId(0)), None);
    }

    #[test]
    fn test_direction_to_category() {
        assert_eq!(MoveCategory::for_direction(-1, 0), Some(MoveCategory::NorthSouth));
        assert_eq!(MoveCategory::for_direction(0, 1), Some(MoveCategory::WestEast));
        assert_eq!(MoveCategory::for_direction(-1, -1), Some(MoveCategory::NorthwestSoutheast));
        assert_eq!(MoveCategory::for_direction(-1, 1), Some(MoveCategory::NortheastSouthwest));
        assert_eq!(MoveCategory::for_direction(2, 1), None);
    }

    #[test]
    fn test_piece_letters() {
        assert_eq!(PieceKind::Knight.to_char(Color::White), 'N');
        assert_eq!(PieceKind::from_char('q'), Some((PieceKind::Queen, Color::Black)));
        assert_eq!(PieceKind::from_char('x'), None);
    }
}
