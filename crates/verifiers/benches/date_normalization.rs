// Date and string normalization benchmarks
// Run with: cargo bench -p verifiers

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;
use verifiers::prelude::*;

/// Numeric day-first date, the cheapest path through the pipeline
fn bench_numeric_date(c: &mut Criterion) {
    let value = json!("25-12-2024");
    c.bench_function("normalize_date_numeric", |b| {
        b.iter(|| black_box(normalize_date(black_box(&value))));
    });
}

/// Month names and connector words exercise every replacement pass
fn bench_spelled_date(c: &mut Criterion) {
    let value = json!("25 de diciembre de 2024 10:30:00");
    c.bench_function("normalize_date_spelled", |b| {
        b.iter(|| black_box(normalize_date(black_box(&value))));
    });
}

fn bench_strict_parse(c: &mut Criterion) {
    let validator = DateValidator::strict();
    c.bench_function("date_parse_strict", |b| {
        b.iter(|| black_box(validator.parse(black_box("29 febrero 2024"))));
    });
}

/// Accent folding on a short sentence
fn bench_normalize_string(c: &mut Criterion) {
    let value = json!("  Él Niño   comió   piña en Zürich  ");
    c.bench_function("normalize_string", |b| {
        b.iter(|| black_box(normalize_string(black_box(&value), true)));
    });
}

criterion_group!(
    benches,
    bench_numeric_date,
    bench_spelled_date,
    bench_strict_parse,
    bench_normalize_string
);
criterion_main!(benches);
