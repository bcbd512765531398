use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::{Duration, Instant};

use tui_reflex::core::RoundEngine;

fn bench_tick(c: &mut Criterion) {
    let mut engine = RoundEngine::new(Duration::from_secs_f64(1.5), 12345);
    let now = Instant::now();
    engine.tick(now);

    // Steady-state tick with an active, in-window prompt.
    c.bench_function("round_tick", |b| {
        b.iter(|| {
            engine.tick(black_box(now));
        })
    });
}

fn bench_round_cycle(c: &mut Criterion) {
    let mut engine = RoundEngine::new(Duration::from_secs_f64(1.5), 12345);
    let now = Instant::now();

    // Start a round and answer it immediately.
    c.bench_function("round_cycle", |b| {
        b.iter(|| {
            engine.tick(black_box(now));
            let target = engine.target().unwrap();
            engine.judge(black_box(target), now);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = RoundEngine::new(Duration::from_secs_f64(1.5), 12345);
    engine.tick(Instant::now());

    c.bench_function("round_snapshot", |b| {
        b.iter(|| {
            black_box(engine.snapshot());
        })
    });
}

criterion_group!(benches, bench_tick, bench_round_cycle, bench_snapshot);
criterion_main!(benches);
