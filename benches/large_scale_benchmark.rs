use classort::prelude::*;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Keys");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;
    let input: Vec<i32> = (0..count).map(|_| rng.random_range(0..1_000_000)).collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("counting_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| counting_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("radix_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| radix_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| merge_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("heap_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| heap_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_keys);
criterion_main!(benches);
