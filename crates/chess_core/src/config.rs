//! Game configuration
//!
//! [`GameConfig`] is read from and written to JSON. Missing fields take their
//! defaults, so `{}` is a valid config describing a standard game.
//!
//! # Error Handling
//!
//! [`GameConfig::load`] surfaces every failure as a [`ConfigError`].
//! [`GameConfig::load_or_default`] logs the failure and falls back to defaults,
//! for callers that would rather start a standard game than refuse to start.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::constants::START_FEN;
use crate::error::ConfigError;
use crate::fen::parse_fen;
use crate::types::PieceKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Position the game starts from
    pub start_fen: String,
    /// Piece a pawn becomes when the caller does not name one
    pub default_promotion: PieceKind,
    /// Run the full attack-index check after every move, also in release builds
    pub verify_invariants: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_fen: START_FEN.to_string(),
            default_promotion: PieceKind::Queen,
            verify_invariants: false,
        }
    }
}

impl GameConfig {
    /// Decodes and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!("[CONFIG] Loaded game config from {:?}", path);
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("[CONFIG] Failed to load config at {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        info!("[CONFIG] Saved game config to {:?}", path);
        Ok(())
    }

    /// Rejects an unparsable start position and a promotion to pawn or king.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_fen(&self.start_fen)?;
        if !self.default_promotion.is_promotion_target() {
            return Err(ConfigError::InvalidPromotion(self.default_promotion));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = GameConfig::from_json(r#"{ "default_promotion": "knight" }"#).unwrap();
        assert_eq!(config.default_promotion, PieceKind::Knight);
        assert_eq!(config.start_fen, START_FEN);
    }

    #[test]
    fn test_bad_fen_is_rejected() {
        let err = GameConfig::from_json(r#"{ "start_fen": "8/8 w - - 0 1" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::StartPosition(_)));
    }

    #[test]
    fn test_king_promotion_is_rejected() {
        let err = GameConfig::from_json(r#"{ "default_promotion": "king" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPromotion(PieceKind::King)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("chess_core_config_{}", std::process::id()));
        let path = dir.join("game.json");
        let config = GameConfig {
            verify_invariants: true,
            ..GameConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(GameConfig::load(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default("/nonexistent/chess_core/game.json");
        assert_eq!(config, GameConfig::default());
    }
}
