//! Attack, pin and check detection.
//!
//! Everything here is a pure function of a [`Board`]; callers that want to
//! know whether a move would be safe build the hypothetical board first
//! (see `Board::after`) and ask it.

use super::attack_tables::{ALL_DIRECTIONS, KNIGHT_TARGETS};
use super::{Board, Color, Direction, Piece, PieceKind, Square};

/// A piece on a line through the king.
///
/// For a check `square` holds the checking piece; for a pin it holds the
/// pinned friendly piece. `direction` points from the king outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineThreat {
    pub square: Square,
    pub direction: Direction,
}

/// Result of scanning outward from one king.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KingSafety {
    pub in_check: bool,
    pub pins: Vec<LineThreat>,
    pub checks: Vec<LineThreat>,
}

impl KingSafety {
    /// Pin axis of the piece on `sq`, if it is pinned.
    #[must_use]
    pub fn pin_on(&self, sq: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == sq)
            .map(|pin| pin.direction)
    }
}

/// Does `piece`, standing `distance` steps from a target along `dir`
/// (target towards piece), attack that target?
fn attacks_along(piece: Piece, dir: Direction, distance: isize) -> bool {
    let orthogonal = dir.0 == 0 || dir.1 == 0;
    match piece.kind {
        kind if kind.is_slider() => {
            if orthogonal {
                kind.attacks_straight()
            } else {
                kind.attacks_diagonally()
            }
        }
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            // A pawn attacks diagonally forward, so it sits one row behind its target.
            distance == 1 && !orthogonal && dir.0 == -piece.color.pawn_direction()
        }
        _ => false,
    }
}

impl Board {
    /// Checks and pins against the king of `us` standing on `king_sq`.
    ///
    /// Each line is walked outward from the king. The first friendly piece
    /// becomes a pin candidate; a second friendly piece closes the line. An
    /// enemy piece that attacks along the line gives check when nothing stands
    /// in between, or pins the candidate otherwise. Knights are probed
    /// separately since they can neither be blocked nor pin.
    #[must_use]
    pub fn king_safety(&self, king_sq: Square, us: Color) -> KingSafety {
        let mut safety = KingSafety::default();

        for dir in ALL_DIRECTIONS {
            let mut candidate: Option<Square> = None;
            for distance in 1..8 {
                let Some(sq) = king_sq.offset(dir, distance) else {
                    break;
                };
                let Some(piece) = self.piece_at(sq) else {
                    continue;
                };

                if piece.color == us {
                    if piece.kind == PieceKind::King {
                        continue;
                    }
                    if candidate.is_some() {
                        break;
                    }
                    candidate = Some(sq);
                    continue;
                }

                if attacks_along(piece, dir, distance) {
                    match candidate {
                        None => {
                            safety.in_check = true;
                            safety.checks.push(LineThreat {
                                square: sq,
                                direction: dir,
                            });
                        }
                        Some(pinned) => safety.pins.push(LineThreat {
                            square: pinned,
                            direction: dir,
                        }),
                    }
                }
                break;
            }
        }

        let enemy_knight = Some(Piece::new(us.opponent(), PieceKind::Knight));
        for &sq in &KNIGHT_TARGETS[king_sq.index()] {
            if self.piece_at(sq) == enemy_knight {
                safety.in_check = true;
                safety.checks.push(LineThreat {
                    square: sq,
                    direction: (
                        sq.0 as isize - king_sq.0 as isize,
                        sq.1 as isize - king_sq.1 as isize,
                    ),
                });
            }
        }

        safety
    }

    /// Is `target` attacked by any piece of color `by`?
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        for dir in ALL_DIRECTIONS {
            for distance in 1..8 {
                let Some(sq) = target.offset(dir, distance) else {
                    break;
                };
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == by && attacks_along(piece, dir, distance) {
                        return true;
                    }
                    break;
                }
            }
        }

        let knight = Some(Piece::new(by, PieceKind::Knight));
        KNIGHT_TARGETS[target.index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == knight)
    }
}
