//! Benchmarks for move generation performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{
    CastleRights, Color, GameState, GameStateBuilder, Piece, PieceKind, Square,
};

/// Kiwipete, drawn rank 8 first.
const KIWIPETE: [&str; 8] = [
    "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
    "R...K..R",
];

fn kiwipete() -> GameState {
    let mut builder = GameStateBuilder::new().castling(CastleRights::all());
    for (row, line) in KIWIPETE.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if let Some(piece) = Piece::from_char(ch) {
                let square = Square::new(row, col).expect("diagram fits the board");
                builder = builder.piece(square, piece);
            }
        }
    }
    builder
        .side_to_move(Color::White)
        .build()
        .expect("kiwipete is a valid position")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut state = GameState::new();

    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| state.perft(black_box(depth)))
        });
    }

    // Complex middlegame position
    let mut kiwipete = kiwipete();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = GameState::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut kiwipete = kiwipete();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    // Pseudo-legal generation alone, to show what the legality filter costs
    group.bench_function("kiwipete_pseudo", |b| {
        b.iter(|| black_box(kiwipete.pseudo_legal_moves()))
    });

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut state = GameState::new();
    let moves = state.legal_moves();
    let pawn_push = moves
        .iter()
        .copied()
        .find(|m| m.piece_moved().kind == PieceKind::Pawn && m.is_double_pawn_push())
        .expect("start position has double pushes");

    c.bench_function("apply_undo", |b| {
        b.iter(|| {
            state.apply_move(black_box(pawn_push));
            state.undo_move()
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_apply_undo);
criterion_main!(benches);
