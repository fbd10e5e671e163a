use crate::common::{configure_criterion, parse_reading, realistic_readings};
use criterion::{criterion_group, Criterion};
use outcome_rail::{combine, get_all, get_all_errors, partition};
use std::hint::black_box;

pub fn bench_collect_realistic(c: &mut Criterion) {
    let readings = realistic_readings();

    let mut group = c.benchmark_group("collect");

    group.bench_function("combine_realistic_mixed", |b| {
        b.iter(|| {
            let result = combine(readings.iter().map(|raw| parse_reading(raw)));
            black_box(result)
        })
    });

    group.bench_function("get_all_realistic_mixed", |b| {
        b.iter(|| {
            let values = get_all(readings.iter().map(|raw| parse_reading(raw)));
            black_box(values)
        })
    });

    group.bench_function("get_all_errors_realistic_mixed", |b| {
        b.iter(|| {
            let errors = get_all_errors(readings.iter().map(|raw| parse_reading(raw)));
            black_box(errors)
        })
    });

    group.bench_function("partition_realistic_mixed", |b| {
        b.iter(|| {
            let split = partition(readings.iter().map(|raw| parse_reading(raw)));
            black_box(split)
        })
    });

    group.bench_function("manual_partition_realistic_mixed", |b| {
        b.iter(|| {
            let mut values = Vec::new();
            let mut errors = Vec::new();
            for raw in readings {
                match parse_reading(raw).into_result() {
                    Ok(v) => values.push(v),
                    Err(e) => errors.push(e),
                }
            }
            black_box((&values, &errors));
        })
    });

    group.finish();
}

criterion_group! {
    name = collect_benches;
    config = configure_criterion();
    targets = bench_collect_realistic,
}
