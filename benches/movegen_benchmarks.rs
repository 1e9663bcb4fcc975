//! Benchmarks for move generation and perft, the core's two hot paths.
//!
//! Ground: the teacher's `benches/engine_benchmarks.rs` shape, narrowed to
//! the operations this crate still implements (no search/eval here).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::{generate_moves, is_check, is_opponent_king_attacked, Board, Move, MAX_MOVES};

fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut buf = [Move::end_of_list(); MAX_MOVES];
    let count = generate_moves(board, &mut buf);
    let mut nodes = 0;
    for mv in &buf[..count] {
        let info = board.make_move(mv);
        if !is_opponent_king_attacked(board) {
            nodes += perft(board, depth - 1);
        }
        board.unmake_move(mv, info);
    }
    nodes
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Board::start_position();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&mut startpos, black_box(depth)))
        });
    }

    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&mut kiwipete, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::start_position();
    group.bench_function("startpos", |b| {
        let mut buf = [Move::end_of_list(); MAX_MOVES];
        b.iter(|| black_box(generate_moves(&startpos, &mut buf)))
    });

    let middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        let mut buf = [Move::end_of_list(); MAX_MOVES];
        b.iter(|| black_box(generate_moves(&middlegame, &mut buf)))
    });

    let kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    group.bench_function("kiwipete", |b| {
        let mut buf = [Move::end_of_list(); MAX_MOVES];
        b.iter(|| black_box(generate_moves(&kiwipete, &mut buf)))
    });

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");

    let kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    group.bench_function("is_check_kiwipete", |b| b.iter(|| black_box(is_check(&kiwipete))));

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_attacks);
criterion_main!(benches);
