//! # Position State
//!
//! A [`Position`] owns everything one game needs: the 64-square grid, the piece
//! arena, one live-piece registry per color, the side to move, both move
//! counters and the single en-passant-eligible pawn.
//!
//! ## The Attack Index
//!
//! The central invariant is the duality between a square's attacker set and a
//! piece's move sets:
//!
//! ```text
//! P in square(S).attackers  <=>  S in P.moves.all()
//! ```
//!
//! Every write to a piece's move sets goes through [`Position::set_moves`] or
//! [`Position::set_category`], which diff the old and new sets and patch the
//! attacker sets of exactly the squares that changed. Nothing else writes to
//! `attackers`, so the duality cannot drift as long as callers use those two.
//!
//! ## Captured Pieces
//!
//! The arena never shrinks. A captured piece is removed from its color's
//! registry, stripped from every attacker set and from its square, and its
//! move sets are cleared. Its id is never reused within the game.

use crate::bitset::{PieceSet, SquareSet};
use crate::board::{Board, SquareId};
use crate::error::InvariantViolation;
use crate::move_gen;
use crate::types::{Color, MoveCategory, MoveSets, Piece, PieceId, PieceKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pieces: Vec<Piece>,
    registry: [PieceSet; 2],
    pub turn: Color,
    pub halfmoves: u32,
    pub fullmoves: u32,
    /// Pawn that advanced two squares on the last ply
    pub ep_pawn: Option<PieceId>,
}

impl Position {
    /// Empty board, White to move, counters at their initial values.
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            pieces: Vec::with_capacity(32),
            registry: [PieceSet::EMPTY; 2],
            turn: Color::White,
            halfmoves: 0,
            fullmoves: 1,
            ep_pawn: None,
        }
    }

    /// Places a new piece on an empty square. Its move sets start empty;
    /// call [`Position::rebuild_all`] once setup is complete.
    pub fn add_piece(&mut self, color: Color, kind: PieceKind, square: SquareId) -> PieceId {
        debug_assert!(self.board.is_empty(square), "square {} already occupied", square);
        debug_assert!(self.pieces.len() < 64, "piece arena is full");

        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece::new(id, color, kind, square));
        self.registry[color.index()].insert(id);
        self.board.square_mut(square).piece = Some(id);
        id
    }

    /// Removes a captured piece from the registry, the grid and every attacker set.
    pub fn delete_piece(&mut self, id: PieceId) {
        self.set_moves(id, MoveSets::default());

        let piece = &self.pieces[id.index()];
        let (color, square) = (piece.color, piece.square);
        self.registry[color.index()].remove(id);
        if self.board.piece_at(square) == Some(id) {
            self.board.square_mut(square).piece = None;
        }
        if self.ep_pawn == Some(id) {
            self.ep_pawn = None;
        }
    }

    /// Moves a piece to an empty square. Move sets are left for the caller to refresh.
    pub fn relocate(&mut self, id: PieceId, to: SquareId) {
        let from = self.pieces[id.index()].square;
        debug_assert!(self.board.is_empty(to), "relocating onto occupied {}", to);

        self.board.square_mut(from).piece = None;
        self.board.square_mut(to).piece = Some(id);
        self.pieces[id.index()].square = to;
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    #[inline]
    pub fn is_live(&self, id: PieceId) -> bool {
        self.registry[0].contains(id) || self.registry[1].contains(id)
    }

    /// Occupant of a square.
    #[inline]
    pub fn piece_at(&self, square: SquareId) -> Option<&Piece> {
        self.board.piece_at(square).map(|id| &self.pieces[id.index()])
    }

    #[inline]
    pub fn registry(&self, color: Color) -> PieceSet {
        self.registry[color.index()]
    }

    /// Live pieces of one color in id order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.registry[color.index()]
            .iter()
            .map(move |id| &self.pieces[id.index()])
    }

    /// All live pieces in id order.
    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        (self.registry[0] | self.registry[1])
            .iter()
            .map(move |id| &self.pieces[id.index()])
    }

    pub fn king_of(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::King)
    }

    /// Square the en-passant pawn skipped over, i.e. the capture target.
    pub fn ep_target(&self) -> Option<SquareId> {
        let pawn = self.piece(self.ep_pawn?);
        pawn.square.offset(-pawn.color.forward(), 0)
    }

    /// Replaces all move sets of a piece and patches the attacker index.
    ///
    /// Returns `(added, removed)` squares across all categories.
    pub fn set_moves(&mut self, id: PieceId, moves: MoveSets) -> (SquareSet, SquareSet) {
        let old = self.pieces[id.index()].moves.all();
        self.pieces[id.index()].moves = moves;
        let new = moves.all();
        self.patch_attackers(id, old, new)
    }

    /// Replaces one category of a piece and patches the attacker index.
    pub fn set_category(
        &mut self,
        id: PieceId,
        category: MoveCategory,
        squares: SquareSet,
    ) -> (SquareSet, SquareSet) {
        let old = self.pieces[id.index()].moves.all();
        *self.pieces[id.index()].moves.get_mut(category) = squares;
        let new = self.pieces[id.index()].moves.all();
        self.patch_attackers(id, old, new)
    }

    fn patch_attackers(
        &mut self,
        id: PieceId,
        old: SquareSet,
        new: SquareSet,
    ) -> (SquareSet, SquareSet) {
        let added = new - old;
        let removed = old - new;
        for sq in removed {
            self.board.square_mut(sq).attackers.remove(id);
        }
        for sq in added {
            self.board.square_mut(sq).attackers.insert(id);
        }
        (added, removed)
    }

    /// Recomputes every live piece's move sets from scratch.
    pub fn rebuild_all(&mut self) {
        let ids: Vec<PieceId> = self.live_pieces().map(|p| p.id).collect();
        for id in ids {
            move_gen::calc_moves(self, id);
        }
    }

    /// Checks attacker/move duality and occupancy for the whole position.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut held = [0usize; 64];

        for square in self.board.iter() {
            for id in square.attackers {
                if !self.is_live(id) {
                    return Err(InvariantViolation::DeadReference { square: square.id, piece: id });
                }
                if !self.piece(id).moves.all().contains(square.id) {
                    return Err(InvariantViolation::StaleAttacker { square: square.id, piece: id });
                }
            }
            if let Some(id) = square.piece {
                if !self.is_live(id) {
                    return Err(InvariantViolation::DeadReference { square: square.id, piece: id });
                }
                if self.piece(id).square != square.id {
                    return Err(InvariantViolation::Misplaced { square: square.id, piece: id });
                }
                held[id.index()] += 1;
            }
        }

        for piece in self.live_pieces() {
            for sq in piece.moves.all() {
                if !self.board.attackers(sq).contains(piece.id) {
                    return Err(InvariantViolation::MissingAttacker { square: sq, piece: piece.id });
                }
            }
            if held[piece.id.index()] != 1 {
                return Err(InvariantViolation::Occupancy {
                    piece: piece.id,
                    count: held[piece.id.index()],
                });
            }
        }
        Ok(())
    }

    /// Compares every piece's incrementally maintained move sets against a
    /// from-scratch rebuild of a copy of this position.
    pub fn check_against_rebuild(&self) -> Result<(), InvariantViolation> {
        let mut fresh = self.clone();
        for piece in fresh.pieces.iter_mut() {
            piece.moves.clear();
        }
        for square in fresh.board.iter_mut() {
            square.attackers.clear();
        }
        fresh.rebuild_all();

        for piece in self.live_pieces() {
            if fresh.piece(piece.id).moves != piece.moves {
                return Err(InvariantViolation::Drift { piece: piece.id });
            }
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}
