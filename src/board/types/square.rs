//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A (row delta, col delta) step on the board.
pub type Direction = (isize, isize);

/// Rook directions: up, left, down, right.
pub(crate) const ORTHOGONALS: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Bishop directions.
pub(crate) const DIAGONALS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is rank 8 and row 7 is rank 1; col 0 is file a and col 7 is file h.
/// Outside the crate a square can only be built through [`Square::new`],
/// `TryFrom<(usize, usize)>` or parsing, so it is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)"))]
pub struct Square(pub(crate) usize, pub(crate) usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Square(idx / 8, idx % 8)
    }

    /// The square `steps` times `dir` away, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dir: Direction, steps: isize) -> Option<Square> {
        let row = self.0 as isize + dir.0 * steps;
        let col = self.1 as isize + dir.1 * steps;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// File letter (`a`-`h`)
    #[must_use]
    pub fn file_char(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    /// Rank digit (`1`-`8`)
    #[must_use]
    pub fn rank_char(self) -> char {
        (b'8' - self.0 as u8) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::OutOfBounds { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => (b'8' - b) as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
