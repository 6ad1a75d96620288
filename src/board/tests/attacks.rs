//! Check and pin detection tests.

use super::{board, diagram, sq};
use crate::board::{Color, GameState, LineThreat};

#[test]
fn test_initial_position_is_quiet() {
    let state = GameState::new();
    let safety = state
        .board()
        .king_safety(state.king_location(Color::White), Color::White);
    assert!(!safety.in_check);
    assert!(safety.pins.is_empty());
    assert!(safety.checks.is_empty());
}

#[test]
fn test_rook_check_on_file() {
    let state = diagram([
        "....k...", "........", "........", "........", "........", "........", "........",
        "....K..r",
    ])
    .build()
    .unwrap();
    let safety = state.board().king_safety(sq("e1"), Color::White);
    assert!(safety.in_check);
    assert_eq!(
        safety.checks,
        vec![LineThreat {
            square: sq("h1"),
            direction: (0, 1)
        }]
    );
}

#[test]
fn test_bishop_pinned_on_file() {
    let state = diagram([
        "....r..k", "........", "........", "........", "........", "........", "....B...",
        "....K...",
    ])
    .build()
    .unwrap();
    let safety = state.board().king_safety(sq("e1"), Color::White);
    assert!(!safety.in_check);
    assert_eq!(
        safety.pins,
        vec![LineThreat {
            square: sq("e2"),
            direction: (-1, 0)
        }]
    );
    assert_eq!(safety.pin_on(sq("e2")), Some((-1, 0)));
    assert_eq!(safety.pin_on(sq("e1")), None);
}

#[test]
fn test_two_friendly_pieces_block_the_line() {
    let state = diagram([
        "....r..k", "........", "........", "........", "....N...", "........", "....B...",
        "....K...",
    ])
    .build()
    .unwrap();
    let safety = state.board().king_safety(sq("e1"), Color::White);
    assert!(!safety.in_check);
    assert!(safety.pins.is_empty());
}

#[test]
fn test_wrong_geometry_is_not_a_pin() {
    // A rook on a diagonal neither checks nor pins.
    let state = diagram([
        ".......k", "........", "........", "........", "r.......", "........", "..B.....",
        "...K....",
    ])
    .build()
    .unwrap();
    let safety = state.board().king_safety(sq("d1"), Color::White);
    assert!(!safety.in_check);
    assert!(safety.pins.is_empty());
}

#[test]
fn test_knight_check() {
    let state = diagram([
        "....k...", "........", "........", "........", "........", ".....n..", "........",
        "....K...",
    ])
    .build()
    .unwrap();
    let safety = state.board().king_safety(sq("e1"), Color::White);
    assert!(safety.in_check);
    assert_eq!(
        safety.checks,
        vec![LineThreat {
            square: sq("f3"),
            direction: (-2, 1)
        }]
    );
}

#[test]
fn test_pawn_check_depends_on_direction() {
    // Both kings are hit by a pawn, which no legal game allows, so this is a
    // bare board rather than a built position.
    let facing = board([
        "....k...", "...P....", "........", "........", "........", "........", "...p....",
        "....K...",
    ]);
    let white = facing.king_safety(sq("e1"), Color::White);
    assert!(white.in_check);
    assert_eq!(white.checks[0].square, sq("d2"));

    let black = facing.king_safety(sq("e8"), Color::Black);
    assert!(black.in_check, "white pawn on d7 attacks e8");

    assert!(!facing.is_square_attacked(sq("d1"), Color::Black));
    assert!(facing.is_square_attacked(sq("c1"), Color::Black));

    // Pawns level with the kings attack nothing.
    let quiet = board([
        "...Pk...", "........", "........", "........", "........", "........", "........",
        "...pK...",
    ]);
    assert!(!quiet.king_safety(sq("e1"), Color::White).in_check);
    assert!(!quiet.king_safety(sq("e8"), Color::Black).in_check);
}

#[test]
fn test_double_check_reports_both_checkers() {
    let state = diagram([
        "....k...", "........", "........", "........", "....r...", "...n....", "........",
        "....K...",
    ])
    .build()
    .unwrap();
    let safety = state.board().king_safety(sq("e1"), Color::White);
    assert!(safety.in_check);
    assert_eq!(safety.checks.len(), 2);
}

#[test]
fn test_square_attacked_respects_blockers() {
    let state = GameState::new();
    let board = state.board();
    assert!(board.is_square_attacked(sq("f3"), Color::White));
    assert!(board.is_square_attacked(sq("e3"), Color::White));
    assert!(!board.is_square_attacked(sq("e4"), Color::White));
    assert!(!board.is_square_attacked(sq("a5"), Color::Black));
    assert!(board.is_square_attacked(sq("f6"), Color::Black));
}
