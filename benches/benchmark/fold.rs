use crate::common::{configure_criterion, parse_reading, realistic_readings, DomainError};
use criterion::{criterion_group, Criterion};
use outcome_rail::{fold, fold_right, Outcome};
use std::hint::black_box;

pub fn bench_fold(c: &mut Criterion) {
    let readings = realistic_readings();
    let valid: Vec<i64> = (0..1000).collect();

    let mut group = c.benchmark_group("fold");

    group.bench_function("fold_all_success", |b| {
        b.iter(|| {
            let total = fold(black_box(&valid), 0i64, |acc, x| {
                Outcome::<_, DomainError>::success(acc + x)
            });
            black_box(total)
        })
    });

    group.bench_function("fold_short_circuit_realistic", |b| {
        b.iter(|| {
            let total = fold(black_box(readings), 0i64, |acc, raw| {
                parse_reading(raw).map(|value| acc + value)
            });
            black_box(total)
        })
    });

    group.bench_function("fold_right_all_success", |b| {
        b.iter(|| {
            let total = fold_right(black_box(&valid), 0i64, |x, acc| {
                Outcome::<_, DomainError>::success(acc + x)
            });
            black_box(total)
        })
    });

    group.bench_function("manual_loop_baseline", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for raw in black_box(readings) {
                match raw.parse::<i64>() {
                    Ok(value) => acc += value,
                    Err(_) => break,
                }
            }
            black_box(acc);
        })
    });

    group.finish();
}

criterion_group! {
    name = fold_benches;
    config = configure_criterion();
    targets = bench_fold,
}
