//! Move execution and validation
//!
//! A move is accepted only if it appears in the current legal-move map.
//! Rejections are ordinary return values; the game is left untouched.

use serde::Serialize;
use tracing::{info, warn};

use super::game::Game;
use super::state::GameStatus;
use crate::board::SquareId;
use crate::transition::apply_move;
use crate::types::{Move, PieceKind};

/// Why a move attempt was turned down
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// No piece on the source square
    EmptySquare,
    /// The piece belongs to the side not on move
    NotYourTurn,
    /// The destination is not legal for that piece
    NotInLegalMap,
    /// The game already ended in checkmate or stalemate
    GameOver,
    /// A UCI move string could not be parsed
    Malformed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { mv: Move, status: GameStatus },
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

impl Game {
    /// Attempts a move. Pawns reaching the last rank become the configured
    /// default promotion piece.
    pub fn attempt_move(&mut self, from: SquareId, to: SquareId) -> MoveOutcome {
        self.attempt_move_with_promotion(from, to, self.config.default_promotion)
    }

    /// Attempts a move with an explicit promotion piece. Anything other than a
    /// knight, bishop, rook or queen falls back to the configured default.
    pub fn attempt_move_with_promotion(
        &mut self,
        from: SquareId,
        to: SquareId,
        promotion: PieceKind,
    ) -> MoveOutcome {
        if let Err(reason) = self.validate(from, to) {
            warn!("[MOVE] Rejected {}{}: {:?}", from, to, reason);
            return MoveOutcome::Rejected(reason);
        }

        let promotion = if promotion.is_promotion_target() {
            promotion
        } else {
            self.config.default_promotion
        };
        let Some(mv) = apply_move(&mut self.position, from, to, promotion) else {
            warn!("[MOVE] Rejected {}{}: position refused the move", from, to);
            return MoveOutcome::Rejected(RejectReason::NotInLegalMap);
        };

        self.history.push(mv);
        self.refresh();

        let status = self.status();
        match status {
            GameStatus::Checkmate => info!("[LEGAL] Checkmate, {} wins", self.position.turn.opposite()),
            GameStatus::Stalemate => info!("[LEGAL] Stalemate, {} has no legal move", self.position.turn),
            _ => {}
        }
        MoveOutcome::Applied { mv, status }
    }

    /// Attempts a move given in UCI long algebraic notation (`e2e4`, `e7e8q`),
    /// as returned by an external engine.
    pub fn attempt_uci_move(&mut self, uci: &str) -> MoveOutcome {
        match parse_uci(uci) {
            Some((from, to, promotion)) => {
                let promotion = promotion.unwrap_or(self.config.default_promotion);
                self.attempt_move_with_promotion(from, to, promotion)
            }
            None => {
                warn!("[MOVE] Rejected malformed move '{}'", uci);
                MoveOutcome::Rejected(RejectReason::Malformed)
            }
        }
    }

    fn validate(&self, from: SquareId, to: SquareId) -> Result<(), RejectReason> {
        let legal = self.legal.as_ref().ok_or(RejectReason::GameOver)?;
        if legal.is_empty() {
            return Err(RejectReason::GameOver);
        }
        let piece = self.position.piece_at(from).ok_or(RejectReason::EmptySquare)?;
        if piece.color != self.position.turn {
            return Err(RejectReason::NotYourTurn);
        }
        if !legal.contains(piece.id, to) {
            return Err(RejectReason::NotInLegalMap);
        }
        Ok(())
    }
}

/// Splits `e7e8q` into squares and an optional promotion piece.
fn parse_uci(uci: &str) -> Option<(SquareId, SquareId, Option<PieceKind>)> {
    let uci = uci.trim();
    if !uci.is_ascii() || !(4..=5).contains(&uci.len()) {
        return None;
    }
    let from = SquareId::from_algebraic(&uci[0..2])?;
    let to = SquareId::from_algebraic(&uci[2..4])?;
    let promotion = match uci[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c)? {
            (kind, _) if kind.is_promotion_target() => Some(kind),
            _ => return None,
        },
    };
    Some((from, to, promotion))
}

/// Check whether `from -> to` is in the current legal-move map
pub fn is_legal_move(game: &Game, from: SquareId, to: SquareId) -> bool {
    game.validate(from, to).is_ok()
}

/// Execute a move with the configured default promotion
pub fn do_move(game: &mut Game, from: SquareId, to: SquareId) -> MoveOutcome {
    game.attempt_move(from, to)
}
