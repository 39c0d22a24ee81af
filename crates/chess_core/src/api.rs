//! Public API for the chess core
//!
//! The [`Game`] handle is what a UI collaborator holds: it loads a position,
//! answers legal-move queries, applies moves drawn from the legal-move map and
//! serializes the position for an external engine.

pub mod game;
pub mod moves;
pub mod state;

pub use game::{new_game, reset_game, Game};
pub use moves::{do_move, is_legal_move, MoveOutcome, RejectReason};
pub use state::{get_game_state, GameStatus, Occupant, SquareView};
