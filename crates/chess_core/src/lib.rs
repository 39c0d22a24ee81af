//! # chess_core - Incremental Attack Index for Chess
//!
//! Maintains the legal-move set of a chess position under incremental updates.
//! Every square carries the set of pieces whose move rules currently reach it
//! (its *attackers*), and every piece carries the set of squares it reaches,
//! split by movement axis. When a piece moves, only the pieces whose rays cross
//! the vacated or newly occupied squares are touched.
//!
//! ## Module Organization
//!
//! - `board` - The 64-square grid and coordinate helpers
//! - `position` - Piece arena, per-color registries, counters, invariant checks
//! - `move_gen` - Per-piece-type move rules and the block/unblock dispatcher
//! - `legality` - Check, pin and castling filtering into a legal-move map
//! - `transition` - Applying a validated move to the position
//! - `fen` - Loading and serializing positions
//! - `api` - The [`Game`] handle consumed by a UI collaborator
//!
//! ## Example
//!
//! ```rust,ignore
//! use chess_core::{Game, MoveOutcome, SquareId};
//!
//! let mut game = Game::new();
//! let e2 = SquareId::from_algebraic("e2").unwrap();
//! let e4 = SquareId::from_algebraic("e4").unwrap();
//! assert!(matches!(game.attempt_move(e2, e4), MoveOutcome::Applied { .. }));
//! ```

pub mod api;
pub mod bitset;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod fen;
pub mod legality;
pub mod move_gen;
pub mod position;
pub mod transition;
pub mod types;
pub mod utils;

pub use api::{Game, GameStatus, MoveOutcome, RejectReason, SquareView};
pub use bitset::{PieceSet, SquareSet};
pub use board::{Board, Square, SquareId};
pub use config::GameConfig;
pub use error::{ChessError, ChessResult, ConfigError, FenError, InvariantViolation};
pub use legality::LegalMoves;
pub use position::Position;
pub use types::{Color, Move, MoveCategory, Piece, PieceFlags, PieceId, PieceKind, SpecialMove};
