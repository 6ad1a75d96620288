//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Descriptor of a single move.
///
/// A `Move` is immutable once built. Equality and hashing look only at the
/// origin and destination squares, so a move typed in by a user compares
/// equal to the generated move with the same coordinates. Always apply the
/// generated move (see [`MoveList::find`]) so the castle, en passant and
/// promotion flags are carried along.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_castle: bool,
    is_en_passant: bool,
    is_pawn_promotion: bool,
}

impl Move {
    /// Create an ordinary move (quiet or capture).
    ///
    /// The promotion flag is derived: a pawn arriving on its promotion row
    /// promotes.
    #[must_use]
    pub fn new(from: Square, to: Square, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        let is_pawn_promotion = piece_moved.kind == PieceKind::Pawn
            && to.row() == piece_moved.color.promotion_row();
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_castle: false,
            is_en_passant: false,
            is_pawn_promotion,
        }
    }

    /// Create an en passant capture. The captured pawn stands beside the
    /// origin square, not on the destination.
    #[must_use]
    pub fn en_passant(from: Square, to: Square, pawn: Piece) -> Self {
        Move {
            from,
            to,
            piece_moved: pawn,
            piece_captured: Some(Piece::new(pawn.color.opponent(), PieceKind::Pawn)),
            is_castle: false,
            is_en_passant: true,
            is_pawn_promotion: false,
        }
    }

    /// Create a castling move, described by the king's two squares.
    #[must_use]
    pub fn castle(from: Square, to: Square, king: Piece) -> Self {
        Move {
            from,
            to,
            piece_moved: king,
            piece_captured: None,
            is_castle: true,
            is_en_passant: false,
            is_pawn_promotion: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// The captured piece; for en passant this is the pawn beside the origin.
    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.is_castle
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.is_castle && self.to.1 > self.from.1
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(&self) -> bool {
        self.is_castle && self.to.1 < self.from.1
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    /// Returns true if this move is a pawn's two-square first advance
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.from.0.abs_diff(self.to.0) == 2
    }

    /// Identity key built from the coordinates only (`row1 col1 row2 col2`
    /// as decimal digits, e.g. e2e4 is 6444).
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        (self.from.0 * 1000 + self.from.1 * 100 + self.to.0 * 10 + self.to.1) as u32
    }

    /// Rank-file notation of origin and destination, e.g. `e2e4`.
    #[must_use]
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}{}", self.piece_moved, self.from, self.to)?;
        if let Some(captured) = self.piece_captured {
            write!(f, " x{captured}")?;
        }
        if self.is_castle {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        if self.is_pawn_promotion {
            write!(f, " =Q")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// List of moves in generation order.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    pub(crate) fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Look up the move with these coordinates.
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.moves
            .iter()
            .find(|m| m.from == from && m.to == to)
            .copied()
    }

    /// Returns true if a move with the same identity key is in the list.
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Moves starting on `from`, for highlighting reachable squares.
    pub fn from_square(&self, from: Square) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter().filter(move |m| m.from == from)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    inner: std::vec::IntoIter<Move>,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            inner: self.moves.into_iter(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}
