use super::super::{GameState, Move, MoveList, Piece, Square};

impl GameState {
    /// Pushes, captures and en passant for the pawn on `from`.
    ///
    /// A move onto the far row is flagged as a promotion by [`Move::new`];
    /// the pawn always becomes a queen.
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: Piece, moves: &mut MoveList) {
        let dir = pawn.color.pawn_direction();

        if let Some(one) = from.offset((dir, 0), 1) {
            if self.board.is_empty(one) {
                moves.push(Move::new(from, one, pawn, None));

                if from.row() == pawn.color.pawn_start_row() {
                    if let Some(two) = from.offset((dir, 0), 2) {
                        if self.board.is_empty(two) {
                            moves.push(Move::new(from, two, pawn, None));
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            let Some(target) = from.offset((dir, side), 1) else {
                continue;
            };
            match self.board.piece_at(target) {
                Some(victim) if victim.color != pawn.color => {
                    moves.push(Move::new(from, target, pawn, Some(victim)));
                }
                Some(_) => {}
                None if self.en_passant_target == Some(target) => {
                    moves.push(Move::en_passant(from, target, pawn));
                }
                None => {}
            }
        }
    }
}
