//! Benchmarks for rules engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Color, Position, Square};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let mut startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut kiwipete: Position = KIWIPETE.parse().unwrap();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let mut startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middlegame: Position = MIDDLEGAME.parse().unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let mut kiwipete: Position = KIWIPETE.parse().unwrap();
    let e1: Square = "e1".parse().unwrap();
    group.bench_function("kiwipete_king", |b| {
        b.iter(|| black_box(kiwipete.legal_destinations(black_box(e1))))
    });

    group.finish();
}

fn bench_terminal_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    let mut mated: Position = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
        .parse()
        .unwrap();
    group.bench_function("checkmate", |b| {
        b.iter(|| black_box(mated.is_checkmate(Color::White)))
    });

    let mut stalemate: Position = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
    group.bench_function("stalemate", |b| {
        b.iter(|| black_box(stalemate.is_stalemate(Color::Black)))
    });

    group.finish();
}

fn bench_fen(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");

    group.bench_function("parse", |b| {
        b.iter(|| black_box(KIWIPETE).parse::<Position>())
    });

    let kiwipete: Position = KIWIPETE.parse().unwrap();
    group.bench_function("format", |b| b.iter(|| black_box(&kiwipete).to_fen()));

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_legal_moves,
    bench_terminal_detection,
    bench_fen
);
criterion_main!(benches);
