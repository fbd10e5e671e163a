use crate::common::{configure_criterion, outcomes_of_size};
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use outcome_rail::{combine, partition};
use std::hint::black_box;

pub fn bench_partition_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/partition");

    for size in [10, 100, 1_000, 10_000] {
        let inputs = outcomes_of_size(size, 10);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inputs, |b, inputs| {
            b.iter(|| black_box(partition(inputs.iter().cloned())));
        });
    }

    group.finish();
}

pub fn bench_combine_failure_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/combine_failure_position");

    // 0 means no failure at all; otherwise the first failure sits at index `every - 1`.
    for every in [0, 10, 100, 1_000] {
        let inputs = outcomes_of_size(1_000, every);
        group.bench_with_input(BenchmarkId::from_parameter(every), &inputs, |b, inputs| {
            b.iter(|| black_box(combine(inputs.iter().cloned())));
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets = bench_partition_scaling, bench_combine_failure_position,
}
