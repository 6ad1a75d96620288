use std::env;
use std::process;

use chess_rules::board::GameState;

fn main() {
    // usage: legal_moves <move1> <move2> ...
    let mut state = GameState::new();
    for notation in env::args().skip(1) {
        if let Err(err) = state.try_notation(&notation) {
            eprintln!("{err}");
            process::exit(1);
        }
    }

    let legal_moves = state.legal_moves();
    println!("{}", state.board());
    println!("side_to_move: {}", state.side_to_move());
    println!("in_check: {}", state.in_check());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", state.is_checkmate());
    println!("stalemate: {}", state.is_stalemate());
    for m in &legal_moves {
        println!("{m}");
    }
}
