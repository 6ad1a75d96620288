pub mod board;

pub use board::{Board, CastleRights, Color, GameState, Move, MoveList, Piece, PieceKind, Square};
