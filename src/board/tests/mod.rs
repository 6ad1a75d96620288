//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Check and pin detection
//! - `movegen.rs` - Legal move generation, pins and check evasion
//! - `castling.rs` - Castling preconditions and rights bookkeeping
//! - `en_passant.rs` - En passant availability and side effects
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Checkmate, stalemate, promotion
//! - `perft.rs` - Node counts for move generation
//! - `proptest.rs` - Property-based tests

mod attacks;

use crate::board::{
    Board, CastleRights, Color, GameState, GameStateBuilder, Move, Piece, Square,
};

/// Builder for a position drawn row by row, rank 8 first. Uppercase is
/// White, lowercase Black, `.` an empty square.
pub(crate) fn diagram(rows: [&str; 8]) -> GameStateBuilder {
    let mut builder = GameStateBuilder::new();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "diagram row {row} must have 8 squares");
        for (col, ch) in line.chars().enumerate() {
            if let Some(piece) = Piece::from_char(ch) {
                builder = builder.piece(Square(row, col), piece);
            }
        }
    }
    builder
}

/// A bare board drawn like [`diagram`], for attack queries on positions no
/// game could reach.
pub(crate) fn board(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            board.set(Square(row, col), Piece::from_char(ch));
        }
    }
    board
}

pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

pub(crate) fn find_move(state: &mut GameState, notation: &str) -> Move {
    state
        .find_move_by_notation(notation)
        .unwrap_or_else(|err| panic!("expected legal move {notation}: {err}"))
}

pub(crate) fn sorted_notations<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Vec<String> {
    let mut list: Vec<String> = moves.into_iter().map(Move::notation).collect();
    list.sort();
    list
}

/// Everything apply/undo must restore.
#[derive(Debug, PartialEq)]
pub(crate) struct Snapshot {
    board: Board,
    side: Color,
    kings: [Square; 2],
    rights: CastleRights,
    en_passant: Option<Square>,
    history_len: usize,
}

pub(crate) fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        board: *state.board(),
        side: state.side_to_move(),
        kings: [
            state.king_location(Color::White),
            state.king_location(Color::Black),
        ],
        rights: state.castle_rights(),
        en_passant: state.en_passant_target(),
        history_len: state.move_history().len(),
    }
}

/// Brute-force legality: try every pseudo-legal move and keep those after
/// which the mover's king is not attacked.
pub(crate) fn simulate_and_test(state: &mut GameState) -> Vec<String> {
    let us = state.side_to_move();
    let mut legal = Vec::new();
    for m in state.pseudo_legal_moves() {
        state.apply_move(m);
        if !state.is_king_attacked(us) {
            legal.push(m.notation());
        }
        state.undo_move();
    }
    legal.sort();
    legal
}
