//! Scoring benchmarks
//!
//! - Base score for a single pool
//! - Directory resolution per step
//! - Full listing pipeline over a batch

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use yiield_common::{PoolMetrics, PoolRecord};
use yiield_scoring::{BaseScorer, ListingScorer, ProtocolDirectory, ScoreEnhancer};

fn bench_base_score(c: &mut Criterion) {
    let metrics = PoolMetrics::new(2, 400, 25_000_000.0, 0);
    c.bench_function("base_score", |b| {
        b.iter(|| BaseScorer::score(black_box(&metrics)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let directory = ProtocolDirectory::curated().expect("curated directory");
    let mut group = c.benchmark_group("resolve");

    for name in ["aave v3", "compound-v3", "compound-v99", "Curve DEX", "unknown-farm"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| directory.resolve(black_box(name)))
        });
    }

    group.finish();
}

fn bench_enhance(c: &mut Criterion) {
    let directory = ProtocolDirectory::curated().expect("curated directory");
    let dossier = directory.get("aave-v3");
    c.bench_function("enhance", |b| {
        b.iter(|| ScoreEnhancer::enhance(black_box(88.0), dossier))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let directory = ProtocolDirectory::curated().expect("curated directory");
    let as_of = NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date");
    let scorer = ListingScorer::new(&directory, as_of);
    let projects = ["aave-v3", "Compound V3", "curve", "morpho", "some-farm-v2"];

    let mut group = c.benchmark_group("pipeline");
    for size in [100usize, 1_000, 10_000] {
        let records: Vec<PoolRecord> = (0..size)
            .map(|i| {
                PoolRecord::new(projects[i % projects.len()], "Ethereum", "USDC", i as f64 * 1e4)
                    .with_audits((i % 5) as i64)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("score_all", size), &records, |b, records| {
            b.iter(|| scorer.score_all(black_box(records)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_base_score,
    bench_resolve,
    bench_enhance,
    bench_pipeline
);
criterion_main!(benches);
