//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceKind`, `Color` and `Piece` - what can stand on a square
//! - `Square` - (row, col) coordinate, row 0 is rank 8
//! - `Move` and `MoveList` - move descriptors
//! - `CastleRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastleRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Direction, Square};

pub(crate) use square::{DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS};
