//! Game state queries
//!
//! Everything a UI needs to draw the board and highlight moves, plus the
//! position string for handing the game to an external engine.

use serde::Serialize;

use super::game::Game;
use crate::bitset::SquareSet;
use crate::board::SquareId;
use crate::fen::to_fen;
use crate::legality::LegalMoves;
use crate::move_gen::is_in_check;
use crate::types::{Color, PieceId, PieceKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Occupant {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
}

/// Rendering snapshot of one square
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub square: SquareId,
    /// Algebraic name, e.g. `e4`
    pub name: String,
    pub color: Color,
    pub occupant: Option<Occupant>,
}

impl Game {
    /// Legal-move map for the side to move. `None` on checkmate.
    pub fn legal_moves(&self) -> Option<&LegalMoves> {
        self.legal.as_ref()
    }

    /// Legal destinations of the piece on `square`, empty if there is none.
    pub fn legal_moves_from(&self, square: SquareId) -> SquareSet {
        match (self.position.piece_at(square), &self.legal) {
            (Some(piece), Some(legal)) => legal.get(piece.id),
            _ => SquareSet::EMPTY,
        }
    }

    pub fn status(&self) -> GameStatus {
        match &self.legal {
            None => GameStatus::Checkmate,
            Some(legal) if legal.is_empty() => GameStatus::Stalemate,
            Some(_) if is_in_check(&self.position, self.position.turn) => GameStatus::Check,
            Some(_) => GameStatus::Ongoing,
        }
    }

    pub fn turn(&self) -> Color {
        self.position.turn
    }

    /// Position string for the current state.
    pub fn fen(&self) -> String {
        to_fen(&self.position)
    }

    pub fn square_view(&self, square: SquareId) -> SquareView {
        let cell = self.position.board.square(square);
        SquareView {
            square,
            name: square.to_algebraic(),
            color: cell.color,
            occupant: self.position.piece_at(square).map(|p| Occupant {
                id: p.id,
                kind: p.kind,
                color: p.color,
            }),
        }
    }

    /// All 64 squares, index order (a8 first).
    pub fn squares(&self) -> Vec<SquareView> {
        SquareId::all().map(|sq| self.square_view(sq)).collect()
    }
}

/// Get current game state (ongoing, check, checkmate, stalemate)
pub fn get_game_state(game: &Game) -> GameStatus {
    game.status()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_views_describe_start() {
        let game = Game::new();
        let views = game.squares();
        assert_eq!(views.len(), 64);

        let e1 = &views[SquareId::from_algebraic("e1").unwrap().index()];
        assert_eq!(e1.name, "e1");
        let occupant = e1.occupant.unwrap();
        assert_eq!((occupant.kind, occupant.color), (PieceKind::King, Color::White));
        assert!(views[SquareId::from_algebraic("e4").unwrap().index()].occupant.is_none());
    }

    #[test]
    fn test_legal_map_serializes_as_json_object() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let json = serde_json::to_value(game.legal_moves().unwrap()).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 2, "king and rook both move");
    }

    #[test]
    fn test_status_reports_check() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/4R2K b - - 0 1").unwrap();
        assert_eq!(get_game_state(&game), GameStatus::Check);
        assert!(!game.status().is_over());
    }
}
