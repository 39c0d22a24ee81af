//! Board grid and square coordinates
//!
//! Squares are indexed rank-major from the top-left: index 0 is a8, index 7 is
//! h8, index 63 is h1. Rank 0 is therefore Black's back rank.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bitset::PieceSet;
use crate::constants::{BOARD_SIZE, SQUARE_COUNT};
use crate::types::{Color, PieceId};

/// Index of a board square (0-63)
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareId(pub u8);

impl SquareId {
    #[inline]
    pub fn from_coords(rank: u8, file: u8) -> SquareId {
        debug_assert!(rank < BOARD_SIZE && file < BOARD_SIZE);
        SquareId(rank * BOARD_SIZE + file)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Square shifted by `dr` ranks and `df` files, `None` off the board.
    #[inline]
    pub fn offset(self, dr: i8, df: i8) -> Option<SquareId> {
        let rank = self.rank() as i8 + dr;
        let file = self.file() as i8 + df;
        if (0..BOARD_SIZE as i8).contains(&rank) && (0..BOARD_SIZE as i8).contains(&file) {
            Some(SquareId::from_coords(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Light or dark, from `(rank + file) mod 2`. a8 is light.
    #[inline]
    pub fn color(self) -> Color {
        if (self.rank() + self.file()) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Parses `e4`-style notation.
    pub fn from_algebraic(s: &str) -> Option<SquareId> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].checked_sub(b'a')?;
        let label = bytes[1].checked_sub(b'1')?;
        if file >= BOARD_SIZE || label >= BOARD_SIZE {
            return None;
        }
        Some(SquareId::from_coords(BOARD_SIZE - 1 - label, file))
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    pub fn all() -> impl Iterator<Item = SquareId> {
        (0..SQUARE_COUNT as u8).map(SquareId)
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        write!(f, "{}{}", file, BOARD_SIZE - self.rank())
    }
}

/// One cell of the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square {
    pub id: SquareId,
    pub color: Color,
    pub piece: Option<PieceId>,
    /// Pieces of either color whose move rules currently reach this square
    pub attackers: PieceSet,
}

/// The 64-square grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Square; SQUARE_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        let squares = std::array::from_fn(|i| {
            let id = SquareId(i as u8);
            Square {
                id,
                color: id.color(),
                piece: None,
                attackers: PieceSet::EMPTY,
            }
        });
        Self { squares }
    }

    #[inline]
    pub fn square(&self, id: SquareId) -> &Square {
        &self.squares[id.index()]
    }

    #[inline]
    pub fn square_mut(&mut self, id: SquareId) -> &mut Square {
        &mut self.squares[id.index()]
    }

    #[inline]
    pub fn piece_at(&self, id: SquareId) -> Option<PieceId> {
        self.squares[id.index()].piece
    }

    #[inline]
    pub fn is_empty(&self, id: SquareId) -> bool {
        self.squares[id.index()].piece.is_none()
    }

    #[inline]
    pub fn attackers(&self, id: SquareId) -> PieceSet {
        self.squares[id.index()].attackers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Square> {
        self.squares.iter_mut()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
