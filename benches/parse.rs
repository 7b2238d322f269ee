//! Benchmarks for path parsing and interpretation.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use pathwise::{interpret, parse, BezierPath, PathCommand};

// A representative mixed path: lines, shorthands, curves, arcs, closure.
const MIXED_PATH: &str = "M10 10 L90 10 90 90 10 90 Z \
                          m 5 5 h 70 v 70 h -70 z \
                          M20 50 C 20 30 40 20 50 20 S 80 30 80 50 \
                          Q 80 70 50 80 T 20 50 \
                          A 30 30 0 0 1 50 20 a 15 15 0 1 0 0.1 0 Z";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(MIXED_PATH.len() as u64));

    group.bench_function("mixed_path", |b| {
        b.iter(|| parse::<f64>(black_box(MIXED_PATH)))
    });

    group.finish();
}

fn bench_interpret(c: &mut Criterion) {
    let commands: Vec<PathCommand<f64>> = parse(MIXED_PATH);

    let mut group = c.benchmark_group("interpret");
    group.throughput(Throughput::Elements(commands.len() as u64));

    group.bench_function("mixed_path", |b| {
        b.iter(|| {
            let mut path = BezierPath::new();
            interpret(black_box(&commands), &mut path);
            path
        })
    });

    group.finish();
}

fn bench_parse_and_interpret(c: &mut Criterion) {
    c.bench_function("parse_and_interpret", |b| {
        b.iter(|| {
            let commands: Vec<PathCommand<f64>> = parse(black_box(MIXED_PATH));
            let mut path = BezierPath::new();
            interpret(&commands, &mut path);
            path
        })
    });
}

criterion_group!(benches, bench_parse, bench_interpret, bench_parse_and_interpret);
criterion_main!(benches);
