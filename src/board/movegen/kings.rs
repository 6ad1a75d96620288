use super::super::attack_tables::KING_TARGETS;
use super::super::{GameState, Move, MoveList, Piece, PieceKind, Square};

impl GameState {
    /// The king's single steps onto empty or enemy squares. Safety of the
    /// destination is checked by the caller.
    pub(crate) fn generate_king_steps(&self, from: Square, king: Piece, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.index()] {
            match self.board.piece_at(to) {
                Some(occupant) if occupant.color == king.color => {}
                captured => moves.push(Move::new(from, to, king, captured)),
            }
        }
    }

    /// Castling moves for a king standing on `from`.
    ///
    /// The caller has already established that the king is not in check.
    /// Each wing needs its right, its rook at home, empty squares between
    /// king and rook, and no attack on the squares the king crosses or
    /// lands on.
    pub(crate) fn generate_castle_moves(&self, from: Square, king: Piece, moves: &mut MoveList) {
        let color = king.color;
        let row = color.back_row();
        if from != Square(row, 4) {
            return;
        }
        let rook = Some(Piece::new(color, PieceKind::Rook));

        for kingside in [true, false] {
            if !self.castle_rights.has(color, kingside) {
                continue;
            }

            // (rook col, cols that must be empty, cols the king crosses and lands on)
            let (rook_col, between, path): (usize, &[usize], [usize; 2]) = if kingside {
                (7, &[5, 6][..], [5, 6])
            } else {
                (0, &[1, 2, 3][..], [3, 2])
            };

            if self.board.piece_at(Square(row, rook_col)) != rook {
                continue;
            }
            if between.iter().any(|&col| !self.board.is_empty(Square(row, col))) {
                continue;
            }
            if path
                .iter()
                .any(|&col| self.board.is_square_attacked(Square(row, col), color.opponent()))
            {
                continue;
            }

            moves.push(Move::castle(from, Square(row, path[1]), king));
        }
    }
}
