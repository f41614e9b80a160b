//! Benchmarks for the detection algorithms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use event_detect::{extract_cooking_events, find_peaks, find_weight_changes};

/// One week of 1-minute samples with a burn every six hours.
fn temperature_week() -> Vec<f64> {
    let n = 7 * 24 * 60;
    let mut values = vec![20.0; n];
    let mut at = 90;
    while at + 45 < n {
        for v in values.iter_mut().skip(at).take(45) {
            *v = 120.0;
        }
        at += 6 * 60;
    }
    values
}

/// One week of 1-minute weight samples with a small drop every burn.
fn weight_week() -> Vec<f64> {
    let n = 7 * 24 * 60;
    let mut weight = 40.0;
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        if i % 360 == 90 {
            weight -= 0.8;
        }
        values.push(weight + if i % 2 == 0 { 0.01 } else { -0.01 });
    }
    values
}

fn benchmark_find_peaks(c: &mut Criterion) {
    let values = temperature_week();

    c.bench_function("find_peaks_week", |b| {
        b.iter(|| find_peaks(black_box(&values), 60.0, 60))
    });
}

fn benchmark_cooking_events(c: &mut Criterion) {
    let values = temperature_week();
    let peaks = find_peaks(&values, 60.0, 60);

    c.bench_function("extract_cooking_events_week", |b| {
        b.iter(|| extract_cooking_events(black_box(&values), black_box(&peaks), 60.0))
    });
}

fn benchmark_weight_changes(c: &mut Criterion) {
    let values = weight_week();

    c.bench_function("find_weight_changes_week", |b| {
        b.iter(|| find_weight_changes(black_box("wood fuel"), black_box(&values), 0.2))
    });
}

criterion_group!(
    benches,
    benchmark_find_peaks,
    benchmark_cooking_events,
    benchmark_weight_changes
);
criterion_main!(benches);
