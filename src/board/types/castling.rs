//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Which castling moves each side may still make.
///
/// Rights only ever go from `true` to `false` while a game is played forward;
/// undo restores an earlier snapshot from the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastleRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastleRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        match (color, kingside) {
            (Color::White, true) => self.white_kingside,
            (Color::White, false) => self.white_queenside,
            (Color::Black, true) => self.black_kingside,
            (Color::Black, false) => self.black_queenside,
        }
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        *self.slot(color, kingside) = true;
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        *self.slot(color, kingside) = false;
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_all(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    fn slot(&mut self, color: Color, kingside: bool) -> &mut bool {
        match (color, kingside) {
            (Color::White, true) => &mut self.white_kingside,
            (Color::White, false) => &mut self.white_queenside,
            (Color::Black, true) => &mut self.black_kingside,
            (Color::Black, false) => &mut self.black_queenside,
        }
    }
}
