//! Criterion micro-benchmarks for the navigation pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rover_core::{Heading, Rover};
use rover_engine::{handle, navigate, validate, NavigateRequest, RoverInstruction};

/// A request that walks `count` rovers around a large grid with long,
/// in-bounds instruction strings.
fn batch_request(count: usize) -> NavigateRequest {
    // Ten laps of a 2x2 square: ends where it started, never escapes.
    let lap = "MRMRMRMR".repeat(10);
    let entries = (0..count)
        .map(|i| {
            Some(RoverInstruction {
                rover: Some(Rover::new((i % 50) as i32, (i % 50) as i32, Heading::N)),
                instructions: Some(lap.clone()),
            })
        })
        .collect();
    NavigateRequest {
        east_bound: 99,
        north_bound: 99,
        rover_instructions: Some(entries),
    }
}

/// Benchmark: interpret one 80-character program over one rover.
fn bench_navigate_single(c: &mut Criterion) {
    let request = batch_request(1);
    let bounds = request.bounds();
    let program = "MRMRMRMR".repeat(10);
    let start = Rover::new(10, 10, Heading::N);

    c.bench_function("navigate_single_80_chars", |b| {
        b.iter(|| {
            let result = navigate(Some(start), Some(black_box(&program)), bounds);
            black_box(result).unwrap();
        });
    });
}

/// Benchmark: validate a 100-rover batch request.
fn bench_validate_batch(c: &mut Criterion) {
    let request = batch_request(100);

    c.bench_function("validate_100_rovers", |b| {
        b.iter(|| {
            let violations = validate(black_box(&request));
            black_box(violations);
        });
    });
}

/// Benchmark: the full handler over a 100-rover batch.
fn bench_handle_batch(c: &mut Criterion) {
    let request = batch_request(100);

    c.bench_function("handle_100_rovers", |b| {
        b.iter(|| {
            let response = handle(Some(black_box(request.clone())));
            black_box(response).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_navigate_single,
    bench_validate_batch,
    bench_handle_batch
);
criterion_main!(benches);
