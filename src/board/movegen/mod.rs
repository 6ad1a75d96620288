mod kings;
mod knights;
mod pawns;
mod sliders;

use log::debug;

use self::sliders::SliderType;
use super::attacks::LineThreat;
use super::make_unmake::en_passant_victim;
use super::{Direction, GameState, Move, MoveList, MoveParseError, Piece, PieceKind, Square};

/// Does `m` stay on the line through the king given by `axis`?
#[inline]
fn on_axis(m: &Move, axis: Direction) -> bool {
    let dr = m.to().row() as isize - m.from().row() as isize;
    let dc = m.to().col() as isize - m.from().col() as isize;
    dr * axis.1 == dc * axis.0
}

impl GameState {
    /// Moves of one piece, ignoring the safety of its own king.
    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, moves),
            PieceKind::Knight => self.generate_knight_moves(from, piece, moves),
            PieceKind::Bishop => self.generate_slider_moves(from, piece, SliderType::Bishop, moves),
            PieceKind::Rook => self.generate_slider_moves(from, piece, SliderType::Rook, moves),
            PieceKind::Queen => self.generate_slider_moves(from, piece, SliderType::Queen, moves),
            PieceKind::King => self.generate_king_steps(from, piece, moves),
        }
    }

    /// Every move of the side to move that obeys movement and occupancy
    /// rules, whether or not it leaves the king attacked. Castling is
    /// included under its usual preconditions.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let us = self.side_to_move();
        let mut moves = MoveList::new();
        for (from, piece) in self.board.pieces() {
            if piece.color == us {
                self.generate_piece_moves(from, piece, &mut moves);
            }
        }

        let king_sq = self.king_location(us);
        if !self.board.is_square_attacked(king_sq, us.opponent()) {
            self.generate_castle_moves(king_sq, Piece::new(us, PieceKind::King), &mut moves);
        }
        moves
    }

    /// Squares a non-king move may land on to answer `check`: the checker
    /// itself and, for a slider, the squares between it and the king. A
    /// knight's direction is its jump offset, so one step reaches it.
    fn check_evasion_squares(king_sq: Square, check: &LineThreat) -> Vec<Square> {
        let mut squares = Vec::new();
        for distance in 1..8 {
            let Some(sq) = king_sq.offset(check.direction, distance) else {
                break;
            };
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }

    /// Would the king of the mover stand on `king_sq` unattacked after `m`?
    fn leaves_king_safe(&self, m: &Move, king_sq: Square) -> bool {
        let enemy = m.piece_moved().color.opponent();
        !self.board.after(m).is_square_attacked(king_sq, enemy)
    }

    /// All legal moves for the side to move.
    ///
    /// Refreshes the check, pin, checkmate and stalemate data as a side effect.
    pub fn legal_moves(&mut self) -> MoveList {
        let us = self.side_to_move();
        let king_sq = self.king_location(us);
        let king = Piece::new(us, PieceKind::King);
        assert_eq!(
            self.board.piece_at(king_sq),
            Some(king),
            "king location for {us} does not match the board"
        );

        let safety = self.board.king_safety(king_sq, us);
        let mut moves = MoveList::new();

        // In double check only the king may move.
        if safety.checks.len() < 2 {
            let evasion = safety
                .checks
                .first()
                .map(|check| Self::check_evasion_squares(king_sq, check));

            for (from, piece) in self.board.pieces() {
                if piece.color != us || piece.kind == PieceKind::King {
                    continue;
                }
                let mut piece_moves = MoveList::new();
                self.generate_piece_moves(from, piece, &mut piece_moves);

                let pin = safety.pin_on(from);
                piece_moves.retain(|m| {
                    // Removing two pawns from one rank can expose the king in
                    // ways no pin captures, so en passant is tried out directly.
                    if m.is_en_passant() {
                        return self.leaves_king_safe(m, king_sq);
                    }
                    if let Some(axis) = pin {
                        if !on_axis(m, axis) {
                            return false;
                        }
                    }
                    evasion
                        .as_ref()
                        .map_or(true, |squares| squares.contains(&m.to()))
                });
                moves.extend(piece_moves);
            }
        }

        let mut king_moves = MoveList::new();
        self.generate_king_steps(king_sq, king, &mut king_moves);
        king_moves.retain(|m| self.leaves_king_safe(m, m.to()));
        moves.extend(king_moves);

        if !safety.in_check {
            self.generate_castle_moves(king_sq, king, &mut moves);
        }

        self.in_check = safety.in_check;
        self.pins = safety.pins;
        self.checks = safety.checks;
        self.checkmate = moves.is_empty() && self.in_check;
        self.stalemate = moves.is_empty() && !self.in_check;
        if self.checkmate {
            debug!("checkmate, {us} to move");
        } else if self.stalemate {
            debug!("stalemate, {us} to move");
        }

        moves
    }

    /// The legal move with these coordinates.
    pub fn find_move(&mut self, from: Square, to: Square) -> Result<Move, MoveParseError> {
        self.legal_moves().find(from, to).ok_or_else(|| {
            debug!("rejected {from}{to}: not legal");
            MoveParseError::IllegalMove {
                notation: format!("{from}{to}"),
            }
        })
    }

    /// The legal move written in coordinate notation, e.g. `e2e4`.
    pub fn find_move_by_notation(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = notation.chars().collect();
        if chars.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let invalid = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = chars[..2]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid())?;
        let to: Square = chars[2..]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid())?;

        self.find_move(from, to)
    }

    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.apply_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }

    /// Square of the pawn an en passant move removes.
    #[must_use]
    pub fn en_passant_capture_square(m: &Move) -> Option<Square> {
        m.is_en_passant().then(|| en_passant_victim(m))
    }
}
