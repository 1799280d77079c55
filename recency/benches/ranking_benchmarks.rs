//! Performance benchmarks for recency ranking
//!
//! Run with: cargo bench --bench ranking_benchmarks

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use recency::ranking::RecencyRanker;
use recency::timestamp::parse_timestamp;
use serde_json::{Value, json};

/// Build a record set that hits every detection path in rotation
fn create_bench_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let day = i % 28 + 1;
            match i % 5 {
                0 => json!({"id": i, "updatedAt": format!("2024-03-{:02}T10:00:00Z", day)}),
                1 => json!({"id": i, "createdAt": format!("2024-02-{:02}", day)}),
                2 => json!({"id": i, "name": "Shaft", "lastInspectionDate": format!("2023-12-{:02}", day)}),
                3 => json!({"id": format!("MNR-{}", i), "status": "active"}),
                _ => json!({"id": i, "updatedAt": "pending"}),
            }
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let ranker = RecencyRanker::default();

    for count in [10, 100, 1_000, 10_000].iter() {
        let records = create_bench_records(*count);
        group.bench_with_input(BenchmarkId::new("rank_refs", count), &records, |b, records| {
            b.iter(|| ranker.rank_refs(black_box(records)));
        });
        group.bench_with_input(BenchmarkId::new("rank_cloned", count), &records, |b, records| {
            b.iter(|| ranker.rank(black_box(records)));
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    let ranker = RecencyRanker::default();

    let cases = [
        ("priority_field", json!({"id": 1, "updatedAt": "2024-03-01T10:00:00Z"})),
        ("scanned_field", json!({"id": 1, "a": 1, "b": 2, "serviceDate": "2024-03-01"})),
        ("id_fallback", json!({"id": 42, "name": "Drill", "status": "idle"})),
        ("malformed", json!({"updatedAt": "soon", "createdAt": "later", "date": "never"})),
    ];

    for (name, record) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("explain", name), record, |b, record| {
            b.iter(|| ranker.explain(black_box(record)));
        });
    }

    group.bench_function("parse_rfc3339", |b| {
        let value = json!("2024-03-01T10:00:00.123+02:00");
        b.iter(|| parse_timestamp(black_box(&value)));
    });

    group.bench_function("parse_date_only", |b| {
        let value = json!("2024/03/01");
        b.iter(|| parse_timestamp(black_box(&value)));
    });

    group.finish();
}

criterion_group!(benches, bench_rank, bench_scoring);

criterion_main!(benches);
