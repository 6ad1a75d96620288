//! Error types for chess board operations.

use std::fmt;

use super::types::Color;

/// Error type for coordinate-notation move lookups (`e2e4`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column out of bounds (must be 0-7)
    OutOfBounds { row: usize, col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions rejected by the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    ExtraKing { color: Color, count: usize },
    /// A pawn stands on the first or last row
    PawnOnBackRank { notation: String },
    /// The en passant target is not behind a pawn that just advanced two squares
    InvalidEnPassant { notation: String },
    /// The side not to move is in check, so its king could be captured
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::ExtraKing { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
            PositionError::PawnOnBackRank { notation } => {
                write!(f, "Pawn on back rank square {notation}")
            }
            PositionError::InvalidEnPassant { notation } => {
                write!(f, "Invalid en passant target {notation}")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their move")
            }
        }
    }
}

impl std::error::Error for PositionError {}
