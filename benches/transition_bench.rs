//! Transition Engine Benchmarks
//!
//! Performance benchmarks for per-render work using Criterion.

use chessboard_transitions::game::systems::diff_with_captures;
use chessboard_transitions::{diff, BoardGeometry, BoardOrientation, BoardTransitions, Position};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR";
const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP3PPP/R2QKB1R";
const MIDDLEGAME_AFTER: &str = "r1bq1rk1/pp2bppp/2n1pn2/3P4/3P4/2N1PN2/PP3PPP/R2QKB1R";

fn bench_diff_identical(c: &mut Criterion) {
    let start = Position::start();

    c.bench_function("diff_identical_start", |b| {
        b.iter(|| black_box(diff(&start, &start)))
    });
}

fn bench_diff_single_move(c: &mut Criterion) {
    let start = Position::start();
    let after = Position::from_fen(AFTER_E4).unwrap();

    c.bench_function("diff_single_move", |b| {
        b.iter(|| black_box(diff(&after, &start)))
    });
}

fn bench_diff_capture(c: &mut Criterion) {
    let before = Position::from_fen(MIDDLEGAME).unwrap();
    let after = Position::from_fen(MIDDLEGAME_AFTER).unwrap();

    c.bench_function("diff_with_captures_middlegame", |b| {
        b.iter(|| black_box(diff_with_captures(&after, &before)))
    });
}

fn bench_rerender_cached(c: &mut Criterion) {
    let geometry = BoardGeometry::new(560, BoardOrientation::White);
    let after = Position::from_fen(AFTER_E4).unwrap();
    let mut transitions = BoardTransitions::new(Position::start());
    transitions.update(&after, &geometry);

    c.bench_function("update_unchanged_rerender", |b| {
        b.iter(|| black_box(transitions.update(&after, &geometry).len()))
    });
}

criterion_group!(
    benches,
    bench_diff_identical,
    bench_diff_single_move,
    bench_diff_capture,
    bench_rerender_cached
);
criterion_main!(benches);
