//! Chess board representation and rules.
//!
//! The board is a plain 8x8 grid of optional pieces. [`GameState`] owns it
//! together with the side to move, king locations, castle rights and the
//! move history, and exposes legal move generation plus apply/undo.
//! Supports full chess rules including castling, en passant and promotion
//! (always to a queen).
//!
//! # Example
//! ```
//! use chess_rules::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use attacks::{KingSafety, LineThreat};
pub use builder::GameStateBuilder;
pub use error::{MoveParseError, PositionError, SquareError};
pub use state::{Board, GameState};
pub use types::{
    CastleRights, Color, Direction, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Square,
};

pub(crate) use types::{DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS};
