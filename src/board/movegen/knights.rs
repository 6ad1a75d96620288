use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{GameState, Move, MoveList, Piece, Square};

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, knight: Piece, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            match self.board.piece_at(to) {
                Some(occupant) if occupant.color == knight.color => {}
                captured => moves.push(Move::new(from, to, knight, captured)),
            }
        }
    }
}
