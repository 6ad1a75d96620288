use super::super::attack_tables::ALL_DIRECTIONS;
use super::super::{Direction, GameState, Move, MoveList, Piece, Square, DIAGONALS, ORTHOGONALS};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [Direction] {
        match self {
            SliderType::Bishop => &DIAGONALS,
            SliderType::Rook => &ORTHOGONALS,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl GameState {
    /// Walk each ray until the board edge, stopping before a friendly piece
    /// and on an enemy one.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        piece: Piece,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &dir in slider.directions() {
            for distance in 1..8 {
                let Some(to) = from.offset(dir, distance) else {
                    break;
                };
                match self.board.piece_at(to) {
                    None => moves.push(Move::new(from, to, piece, None)),
                    Some(occupant) => {
                        if occupant.color != piece.color {
                            moves.push(Move::new(from, to, piece, Some(occupant)));
                        }
                        break;
                    }
                }
            }
        }
    }
}
