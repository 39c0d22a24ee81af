//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use tracing::info;

use crate::config::GameConfig;
use crate::constants::START_FEN;
use crate::error::ChessResult;
use crate::fen::parse_fen;
use crate::legality::{calculate_legal_moves, LegalMoves};
use crate::position::Position;
use crate::types::Move;

/// One game: the live position, its legal-move map and the moves played so far.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) position: Position,
    /// `None` once the side to move is checkmated
    pub(crate) legal: Option<LegalMoves>,
    pub(crate) config: GameConfig,
    pub(crate) history: Vec<Move>,
    start: Position,
}

impl Game {
    /// Standard initial position with default configuration.
    pub fn new() -> Self {
        let position = parse_fen(START_FEN).expect("standard start position parses");
        Self::from_position(position, GameConfig::default())
    }

    /// Builds a game from a position string with default configuration.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let position = parse_fen(fen)?;
        Ok(Self::from_position(position, GameConfig::default()))
    }

    pub fn with_config(config: GameConfig) -> ChessResult<Self> {
        config.validate()?;
        let position = parse_fen(&config.start_fen)?;
        Ok(Self::from_position(position, config))
    }

    fn from_position(position: Position, config: GameConfig) -> Self {
        let legal = calculate_legal_moves(&position);
        let game = Self {
            start: position.clone(),
            position,
            legal,
            config,
            history: Vec::new(),
        };
        game.verify();
        info!("[FEN] New game from {}", game.fen());
        game
    }

    /// Returns to the configured start position.
    pub fn reset(&mut self) {
        self.position = self.start.clone();
        self.legal = calculate_legal_moves(&self.position);
        self.history.clear();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Moves applied since the start position, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Recomputes the legal-move map after the position changed.
    pub(crate) fn refresh(&mut self) {
        self.legal = calculate_legal_moves(&self.position);
        self.verify();
    }

    /// Asserts the attack index. Always on in debug builds; in release builds
    /// only with `verify_invariants`, which also compares against a rebuild.
    pub(crate) fn verify(&self) {
        if cfg!(debug_assertions) || self.config.verify_invariants {
            let result = self.position.check_invariants();
            assert!(result.is_ok(), "attack index corrupted: {:?}", result);
        }
        if self.config.verify_invariants {
            let result = self.position.check_against_rebuild();
            assert!(result.is_ok(), "attack index drifted: {:?}", result);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new game with initial position
pub fn new_game() -> Game {
    Game::new()
}

/// Reset the game to its starting position
pub fn reset_game(game: &mut Game) {
    game.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MoveOutcome;
    use crate::board::SquareId;

    #[test]
    fn test_new_game_has_twenty_moves() {
        let game = new_game();
        assert_eq!(game.legal_moves().map(|m| m.move_count()), Some(20));
        assert_eq!(game.fen(), START_FEN);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let e2 = SquareId::from_algebraic("e2").unwrap();
        let e4 = SquareId::from_algebraic("e4").unwrap();
        assert!(matches!(game.attempt_move(e2, e4), MoveOutcome::Applied { .. }));
        assert_eq!(game.history().len(), 1);

        reset_game(&mut game);
        assert_eq!(game.fen(), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_with_config_uses_start_fen() {
        let config = GameConfig {
            start_fen: "k7/8/8/8/8/8/8/7K b - - 5 40".to_string(),
            ..GameConfig::default()
        };
        let game = Game::with_config(config).unwrap();
        assert_eq!(game.fen(), "k7/8/8/8/8/8/8/7K b - - 5 40");
    }
}
