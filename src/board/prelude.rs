//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, CastleRights, Color, GameState, GameStateBuilder, Move, MoveList, MoveParseError, Piece,
    PieceKind, PositionError, Square, SquareError,
};
