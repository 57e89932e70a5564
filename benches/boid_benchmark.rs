/*
 * Reef Simulation Benchmark
 *
 * Measures the cost of one tick across population sizes and update policies.
 * A tick is O(n^2), so the larger sizes dominate.
 */

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use reef_boids::{FlockParams, Reef, ReefParams, ShoalParams, UpdateOrder};
use std::time::Duration;

fn reef_with(count: usize, params: FlockParams) -> Reef {
    let reef_params = ReefParams {
        seed: Some(0x5EED),
        shoals: vec![ShoalParams {
            count,
            ..ShoalParams::default()
        }],
        ..ReefParams::default()
    };
    Reef::new(&reef_params, params).expect("benchmark params are valid")
}

fn bench_tick(c: &mut Criterion, name: &str, params: FlockParams) {
    let mut group = c.benchmark_group(name);

    // Benchmark different numbers of creatures
    for count in [48usize, 250, 1000, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter_batched(
                || reef_with(n, params.clone()),
                |mut reef| {
                    reef.tick();
                    black_box(reef)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    bench_tick(c, "tick_snapshot", FlockParams::default());
}

fn bench_snapshot_parallel(c: &mut Criterion) {
    let params = FlockParams {
        parallel: true,
        ..FlockParams::default()
    };
    bench_tick(c, "tick_snapshot_parallel", params);
}

fn bench_in_place(c: &mut Criterion) {
    let params = FlockParams {
        update_order: UpdateOrder::InPlace,
        ..FlockParams::default()
    };
    bench_tick(c, "tick_in_place", params);
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_snapshot, bench_snapshot_parallel, bench_in_place
}

criterion_main!(benches);
