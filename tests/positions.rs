use serde::Deserialize;

use chess_rules::board::{
    CastleRights, Color, GameState, GameStateBuilder, MoveParseError, Piece, Square,
};

#[derive(Deserialize)]
struct Fixtures {
    positions: Vec<PositionCase>,
    games: Vec<GameCase>,
}

#[derive(Deserialize)]
struct PositionCase {
    name: String,
    rows: Vec<String>,
    side: String,
    castling: String,
    #[serde(default)]
    en_passant: Option<String>,
    legal_moves: usize,
    #[serde(default)]
    in_check: bool,
    #[serde(default)]
    checkmate: bool,
    #[serde(default)]
    stalemate: bool,
}

#[derive(Deserialize)]
struct GameCase {
    name: String,
    moves: Vec<String>,
    #[serde(default)]
    checkmate: bool,
    #[serde(default)]
    rejected_at: Option<usize>,
}

fn load() -> Fixtures {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

fn castle_rights(flags: &str) -> CastleRights {
    let mut rights = CastleRights::none();
    for flag in flags.chars() {
        match flag {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            other => panic!("unknown castling flag {other}"),
        }
    }
    rights
}

fn build(case: &PositionCase) -> GameState {
    let mut builder = GameStateBuilder::new()
        .castling(castle_rights(&case.castling))
        .side_to_move(if case.side == "white" {
            Color::White
        } else {
            Color::Black
        });

    for (row, line) in case.rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if let Some(piece) = Piece::from_char(ch) {
                let square = Square::new(row, col).expect("diagram fits the board");
                builder = builder.piece(square, piece);
            }
        }
    }
    if let Some(target) = &case.en_passant {
        builder = builder.en_passant(target.parse().expect("invalid en passant square"));
    }

    builder
        .build()
        .unwrap_or_else(|err| panic!("{}: {err}", case.name))
}

#[test]
fn position_suite() {
    for case in load().positions {
        let mut state = build(&case);
        let moves = state.legal_moves();

        assert_eq!(moves.len(), case.legal_moves, "{}: move count", case.name);
        assert_eq!(state.in_check(), case.in_check, "{}: check", case.name);
        assert_eq!(state.is_checkmate(), case.checkmate, "{}: mate", case.name);
        assert_eq!(state.is_stalemate(), case.stalemate, "{}: stalemate", case.name);
    }
}

#[test]
fn game_suite() {
    for case in load().games {
        let mut state = GameState::new();

        for (ply, notation) in case.moves.iter().enumerate() {
            let result = state.try_notation(notation);
            if case.rejected_at == Some(ply) {
                assert_eq!(
                    result,
                    Err(MoveParseError::IllegalMove {
                        notation: notation.clone()
                    }),
                    "{}: ply {ply} should be rejected",
                    case.name
                );
                assert_eq!(state.move_history().len(), ply);
                break;
            }
            result.unwrap_or_else(|err| panic!("{}: ply {ply}: {err}", case.name));
        }

        state.legal_moves();
        assert_eq!(state.is_checkmate(), case.checkmate, "{}", case.name);
    }
}

#[test]
fn board_renders_as_grid() {
    let state = GameState::new();
    let rendered = state.board().to_string();

    assert!(rendered.starts_with("  +---+"));
    assert!(rendered.contains("8 | r | n | b | q | k | b | n | r |"));
    assert!(rendered.contains("1 | R | N | B | Q | K | B | N | R |"));
    assert!(rendered.ends_with("a   b   c   d   e   f   g   h"));
}

#[test]
fn squares_only_exist_on_the_board() {
    assert!(Square::new(8, 0).is_none());
    assert!(Square::new(0, 8).is_none());
    assert!(Square::try_from((9, 9)).is_err());
    assert!("i9".parse::<Square>().is_err());

    for row in 0..8 {
        for col in 0..8 {
            let square = Square::new(row, col).expect("in range");
            assert_eq!(square.to_string().parse::<Square>(), Ok(square));
            assert_eq!(
                GameState::new().board().piece_at(square).is_some(),
                row < 2 || row > 5
            );
        }
    }
}
