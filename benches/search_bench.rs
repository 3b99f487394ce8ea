//! Benchmarks for engine construction and query latency over a synthetic
//! documentation corpus.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use docdex::{load, QueryEngine, RawEntry, SearchIndex};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "solver",
    "optimization",
    "constraint",
    "variable",
    "objective",
    "linear",
    "quadratic",
    "gradient",
    "simplex",
    "interior",
    "point",
    "method",
    "model",
    "format",
    "schema",
    "manual",
    "reference",
    "tutorial",
    "example",
    "install",
];

/// Deterministic synthetic index: `n` entries of ~40 words each.
fn synthetic_index(n: usize) -> SearchIndex {
    let raws: Vec<RawEntry> = (0..n)
        .map(|i| {
            let text: Vec<&str> = (0..40).map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()]).collect();
            RawEntry {
                location: Some(format!("page{}.html#s{}", i / 8, i)),
                page: Some(format!("Page {}", i / 8)),
                title: Some(format!("Section {}", i)),
                category: Some(if i % 8 == 0 { "page" } else { "section" }.to_string()),
                text: Some(text.join(" ")),
            }
        })
        .collect();
    load(raws).expect("synthetic entries are valid")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [100, 1000] {
        let index = synthetic_index(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &index, |b, index| {
            b.iter(|| QueryEngine::build(black_box(index.clone())));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let engine = QueryEngine::build(synthetic_index(1000));
    let mut group = c.benchmark_group("search");
    for query in ["solver", "interior point method", "gradient schema install"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| engine.search(black_box(query), 10).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
