//! Benchmarks for search and evaluation throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chessguardian::eval;
use chessguardian::position::Position;
use chessguardian::search::{ordering, Searcher};
use chessguardian::types::Depth;

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, fen) in [("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        if let Ok(pos) = Position::from_fen(fen) {
            group.bench_function(name, |b| b.iter(|| black_box(eval::evaluate(&pos))));
        }
    }

    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering");

    if let Ok(pos) = Position::from_fen(KIWIPETE) {
        let moves = pos.legal_moves();
        group.bench_function("kiwipete", |b| {
            b.iter(|| black_box(ordering::order_moves(&pos, moves.clone())))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let mut startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| Searcher::new().search(&mut startpos, Depth::new(black_box(depth))))
        });
    }

    if let Ok(mut middlegame) = Position::from_fen(MIDDLEGAME) {
        for depth in 1..=3 {
            group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
                b.iter(|| Searcher::new().search(&mut middlegame, Depth::new(black_box(depth))))
            });
        }
    }

    if let Ok(mut pos) = Position::from_fen(MIDDLEGAME) {
        group.bench_function("middlegame_exhaustive/3", |b| {
            b.iter(|| Searcher::exhaustive().search(&mut pos, Depth::new(3)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_ordering, bench_search);
criterion_main!(benches);
