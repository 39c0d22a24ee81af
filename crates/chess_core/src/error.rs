//! Error types for the chess core
//!
//! Loading a position string and reading a configuration are the only fallible
//! entry points. Illegal move attempts are not errors: they come back as
//! [`MoveOutcome::Rejected`](crate::api::MoveOutcome) and leave the game untouched.
//! Attack-index desynchronization is reported as an [`InvariantViolation`] value,
//! which debug builds assert on.

use thiserror::Error;

use crate::board::SquareId;
use crate::types::{PieceId, PieceKind};

/// Errors raised while parsing a position string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Not exactly six space-separated fields
    #[error("Expected 6 fields in position string, found {found}")]
    FieldCount { found: usize },

    /// Placement does not describe exactly eight ranks
    #[error("Expected 8 ranks in piece placement, found {found}")]
    RankCount { found: usize },

    /// A rank covers more or fewer than eight files
    #[error("Rank {rank} covers {width} files (must be 8)")]
    RankWidth { rank: usize, width: usize },

    /// Unknown character in the placement field
    #[error("Invalid piece letter '{letter}'")]
    InvalidPiece { letter: char },

    /// Pawn placed on the first or last rank
    #[error("Pawn on back rank at {square}")]
    PawnOnBackRank { square: SquareId },

    /// Each side needs exactly one king
    #[error("Expected exactly one {color} king, found {found}")]
    KingCount { color: &'static str, found: usize },

    /// Side to move is not `w` or `b`
    #[error("Invalid side to move '{field}'")]
    InvalidSideToMove { field: String },

    /// Castling field contains an unknown, repeated, or unbacked right
    #[error("Invalid castling rights '{field}'")]
    InvalidCastling { field: String },

    /// En-passant field is malformed or has no double-pushed pawn in front of it
    #[error("Invalid en-passant target '{field}'")]
    InvalidEnPassant { field: String },

    /// Halfmove or fullmove counter does not parse or is out of range
    #[error("Invalid {name} counter '{field}'")]
    InvalidCounter { name: &'static str, field: String },
}

/// Errors raised while loading a [`GameConfig`](crate::config::GameConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configured start position is invalid: {0}")]
    StartPosition(#[from] FenError),

    #[error("Pawns cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),
}

/// Top-level error for constructing a game
#[derive(Error, Debug)]
pub enum ChessError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A broken link in the attack index or the occupancy map.
///
/// These indicate a programming defect, never bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Square lists a piece as attacker, but the piece does not reach the square
    #[error("Square {square} lists piece {piece} as attacker but the piece does not reach it")]
    StaleAttacker { square: SquareId, piece: PieceId },

    /// Piece reaches a square that does not list it as attacker
    #[error("Piece {piece} reaches {square} but is missing from its attacker set")]
    MissingAttacker { square: SquareId, piece: PieceId },

    /// Square and piece disagree on where the piece stands
    #[error("Square {square} holds piece {piece} whose recorded square differs")]
    Misplaced { square: SquareId, piece: PieceId },

    /// A live piece is held by zero or several squares
    #[error("Live piece {piece} is held by {count} squares")]
    Occupancy { piece: PieceId, count: usize },

    /// Square holds or lists a piece that is no longer registered
    #[error("Square {square} references captured piece {piece}")]
    DeadReference { square: SquareId, piece: PieceId },

    /// Incremental move sets differ from a from-scratch rebuild
    #[error("Piece {piece} move sets drifted from a full recompute")]
    Drift { piece: PieceId },
}

/// Result type alias for position loading
pub type ChessResult<T> = Result<T, ChessError>;
