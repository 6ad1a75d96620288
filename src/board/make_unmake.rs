use log::{debug, trace};

use super::{Board, Color, GameState, Move, MoveParseError, Piece, PieceKind, Square};

/// Rook origin and destination for a castling move.
fn castle_rook_squares(m: &Move) -> (Square, Square) {
    let row = m.from().row();
    if m.is_castle_kingside() {
        (Square(row, 7), Square(row, 5))
    } else {
        (Square(row, 0), Square(row, 3))
    }
}

/// Square of the pawn removed by an en passant capture.
#[inline]
pub(crate) fn en_passant_victim(m: &Move) -> Square {
    Square(m.from().row(), m.to().col())
}

impl Board {
    /// Relocate the pieces touched by `m`, including the rook of a castle,
    /// the pawn taken en passant and the queen a pawn promotes to.
    pub(crate) fn play(&mut self, m: &Move) {
        let mover = m.piece_moved();
        let placed = if m.is_pawn_promotion() {
            Piece::new(mover.color, PieceKind::Queen)
        } else {
            mover
        };
        self.set(m.from(), None);
        self.set(m.to(), Some(placed));

        if m.is_en_passant() {
            self.set(en_passant_victim(m), None);
        }

        if m.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(m);
            let rook = self.piece_at(rook_from);
            self.set(rook_from, None);
            self.set(rook_to, rook);
        }
    }

    /// Exact inverse of [`Board::play`].
    pub(crate) fn unplay(&mut self, m: &Move) {
        self.set(m.from(), Some(m.piece_moved()));

        if m.is_en_passant() {
            self.set(m.to(), None);
            self.set(en_passant_victim(m), m.piece_captured());
        } else {
            self.set(m.to(), m.piece_captured());
        }

        if m.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(m);
            let rook = self.piece_at(rook_to);
            self.set(rook_to, None);
            self.set(rook_from, rook);
        }
    }

    /// The board as it would look after `m`, leaving `self` untouched.
    #[must_use]
    pub(crate) fn after(&self, m: &Move) -> Board {
        let mut next = *self;
        next.play(m);
        next
    }
}

impl GameState {
    /// Apply a move taken from [`GameState::legal_moves`].
    ///
    /// Moves not produced by the generator are not validated here; use
    /// [`GameState::try_move`] for caller-supplied coordinates.
    pub fn apply_move(&mut self, m: Move) {
        let mover = m.piece_moved();
        debug_assert_eq!(
            self.board.piece_at(m.from()),
            Some(mover),
            "apply_move: {m:?} does not match the board"
        );

        self.board.play(&m);

        if mover.kind == PieceKind::King {
            self.king_locations[mover.color.index()] = m.to();
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            let skipped_row = (m.from().row() + m.to().row()) / 2;
            Some(Square(skipped_row, m.from().col()))
        } else {
            None
        };
        self.en_passant_log.push(self.en_passant_target);

        self.update_castle_rights(&m);
        self.castle_rights_log.push(self.castle_rights);

        self.move_history.push(m);
        self.white_to_move = !self.white_to_move;

        trace!("applied {m:?}, {} to move", self.side_to_move());
    }

    /// Take back the last applied move. Returns `None` when there is nothing
    /// to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.move_history.pop()?;

        self.board.unplay(&m);

        let mover = m.piece_moved();
        if mover.kind == PieceKind::King {
            self.king_locations[mover.color.index()] = m.from();
        }

        self.en_passant_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();
        self.castle_rights_log.pop();
        if let Some(&rights) = self.castle_rights_log.last() {
            self.castle_rights = rights;
        }
        debug_assert_eq!(self.castle_rights_log.len(), self.move_history.len() + 1);

        self.white_to_move = !self.white_to_move;
        self.checkmate = false;
        self.stalemate = false;

        trace!("undid {m:?}, {} to move", self.side_to_move());
        Some(m)
    }

    /// Resolve caller coordinates against the legal moves and apply the
    /// match. Nothing on the board changes when the move is not legal.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Move, MoveParseError> {
        let m = self.find_move(from, to)?;
        self.apply_move(m);
        Ok(m)
    }

    /// Like [`GameState::try_move`], from coordinate notation (`e2e4`).
    pub fn try_notation(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let m = self.find_move_by_notation(notation)?;
        self.apply_move(m);
        Ok(m)
    }

    fn update_castle_rights(&mut self, m: &Move) {
        let mover = m.piece_moved();
        match mover.kind {
            PieceKind::King => self.castle_rights.remove_all(mover.color),
            PieceKind::Rook => self.revoke_corner(mover.color, m.from()),
            _ => {}
        }

        if let Some(captured) = m.piece_captured() {
            if captured.kind == PieceKind::Rook {
                self.revoke_corner(captured.color, m.to());
            }
        }
    }

    /// Drop the right tied to the rook corner `sq`, if it is one.
    fn revoke_corner(&mut self, color: Color, sq: Square) {
        if sq.row() != color.back_row() {
            return;
        }
        match sq.col() {
            0 => self.castle_rights.remove(color, false),
            7 => self.castle_rights.remove(color, true),
            _ => return,
        }
        debug!("{color} castle rights now {:?}", self.castle_rights);
    }
}
