//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, for puzzles and tests.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStateBuilder, Piece, PieceKind, Square};
//!
//! let sq = |notation: &str| notation.parse::<Square>().unwrap();
//! let state = GameStateBuilder::new()
//!     .piece(sq("e1"), Piece::new(Color::White, PieceKind::King))
//!     .piece(sq("e8"), Piece::new(Color::Black, PieceKind::King))
//!     .piece(sq("a2"), Piece::new(Color::White, PieceKind::Pawn))
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert!(state.white_to_move());
//! ```

use log::debug;

use super::{Board, CastleRights, Color, GameState, Piece, PieceKind, PositionError, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Color,
    castle_rights: CastleRights,
    en_passant_target: Option<Square>,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castle_rights: CastleRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameStateBuilder {
            board: Board::standard(),
            castle_rights: CastleRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set(square, Some(piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castle rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastleRights) -> Self {
        self.castle_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castle_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castle_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castle_rights = CastleRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the game state.
    ///
    /// Fails unless each color has exactly one king, no pawn stands on the
    /// first or last row, any en passant target sits behind a pawn that could
    /// just have advanced two squares, and the side not to move is not in
    /// check.
    pub fn build(self) -> Result<GameState, PositionError> {
        let mut king_locations = [Square(0, 0); 2];
        for color in Color::BOTH {
            let king = Piece::new(color, PieceKind::King);
            let kings: Vec<Square> = self
                .board
                .pieces()
                .filter(|&(_, piece)| piece == king)
                .map(|(sq, _)| sq)
                .collect();
            match kings.as_slice() {
                [sq] => king_locations[color.index()] = *sq,
                [] => return Err(self.reject(PositionError::MissingKing { color })),
                _ => {
                    return Err(self.reject(PositionError::ExtraKing {
                        color,
                        count: kings.len(),
                    }))
                }
            }
        }

        if let Some((sq, _)) = self
            .board
            .pieces()
            .find(|&(sq, piece)| piece.kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7))
        {
            return Err(self.reject(PositionError::PawnOnBackRank {
                notation: sq.to_string(),
            }));
        }

        if let Some(target) = self.en_passant_target {
            if !self.en_passant_plausible(target) {
                return Err(self.reject(PositionError::InvalidEnPassant {
                    notation: target.to_string(),
                }));
            }
        }

        let waiting = self.side_to_move.opponent();
        if self
            .board
            .is_square_attacked(king_locations[waiting.index()], self.side_to_move)
        {
            return Err(self.reject(PositionError::OpponentInCheck { color: waiting }));
        }

        Ok(GameState::from_parts(
            self.board,
            self.side_to_move,
            king_locations,
            self.castle_rights,
            self.en_passant_target,
        ))
    }

    /// An en passant target must be the empty square an enemy pawn just
    /// skipped: on the third row from that pawn's side, with the pawn
    /// directly in front of it.
    fn en_passant_plausible(&self, target: Square) -> bool {
        let us = self.side_to_move;
        let them = us.opponent();
        let skipped_row = them.pawn_start_row() as isize + them.pawn_direction();
        if target.row() as isize != skipped_row || !self.board.is_empty(target) {
            return false;
        }
        target
            .offset((them.pawn_direction(), 0), 1)
            .is_some_and(|sq| self.board.piece_at(sq) == Some(Piece::new(them, PieceKind::Pawn)))
    }

    fn reject(&self, err: PositionError) -> PositionError {
        debug!("position rejected: {err}");
        err
    }
}
