use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastleRights, Color, LineThreat, Move, Piece, PieceKind, Square};

/// The 8x8 grid. Row 0 is Black's back rank, row 7 is White's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back_rank.iter().enumerate() {
            for color in Color::BOTH {
                let back = color.back_row();
                let pawns = color.pawn_start_row();
                board.set(Square(back, col), Some(Piece::new(color, *kind)));
                board.set(Square(pawns, col), Some(Piece::new(color, PieceKind::Pawn)));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Option<Piece>) {
        self.cells[sq.0][sq.1] = cell;
    }

    /// Raw rows, row 0 first, for rendering.
    #[must_use]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    /// Every occupied square with its piece, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|p| (Square(row, col), p)))
        })
    }

    /// Square of `color`'s king, scanning the grid.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.0][sq.1]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} |", 8 - row)?;
            for cell in cells {
                let ch = cell.map_or('.', Piece::to_char);
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

/// Authoritative state of one game.
///
/// The position changes only through [`GameState::apply_move`] and
/// [`GameState::undo_move`]. Check, pin, checkmate and stalemate data are
/// refreshed by [`GameState::legal_moves`] and are stale until the next call.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) king_locations: [Square; 2],
    pub(crate) move_history: Vec<Move>,
    pub(crate) castle_rights: CastleRights,
    /// One entry per position reached; always `move_history.len() + 1` long.
    pub(crate) castle_rights_log: Vec<CastleRights>,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<LineThreat>,
    pub(crate) checks: Vec<LineThreat>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard initial position, White to move, full castle rights.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_parts(
            Board::standard(),
            Color::White,
            [Square(7, 4), Square(0, 4)],
            CastleRights::all(),
            None,
        )
    }

    /// Assemble a state from an already validated position.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        king_locations: [Square; 2],
        castle_rights: CastleRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        GameState {
            board,
            white_to_move: side_to_move == Color::White,
            king_locations,
            move_history: Vec::new(),
            castle_rights,
            castle_rights_log: vec![castle_rights],
            en_passant_target,
            en_passant_log: vec![en_passant_target],
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Read-only board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[must_use]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// Square a pawn may capture onto en passant this ply, if any.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// The most recently applied move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    /// Whether the side to move was in check at the last `legal_moves` call.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Pins found at the last `legal_moves` call.
    #[must_use]
    pub fn pins(&self) -> &[LineThreat] {
        &self.pins
    }

    /// Checks found at the last `legal_moves` call.
    #[must_use]
    pub fn checks(&self) -> &[LineThreat] {
        &self.checks
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Whether `color`'s king stands on an attacked square right now.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.board
            .is_square_attacked(self.king_location(color), color.opponent())
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
