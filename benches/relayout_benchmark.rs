//! Relayout benchmarks.
//!
//! Measures a full greedy placement against the unchanged-input fast path,
//! which still has to build and compare the item signature.
//!
//! Run with: cargo bench --bench relayout_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feedgrid::layout::{relayout, FeedLayoutEngine, LayoutPolicy};
use feedgrid::model::{Author, FeedItem, PostId};

/// Generate a feed with varied post lengths.
fn generate_feed(num_posts: usize) -> Vec<FeedItem> {
    (0..num_posts)
        .map(|i| {
            FeedItem::new(
                PostId::new(i.to_string()).expect("valid id"),
                Author::new(format!("user{}", i % 17)).expect("valid author"),
                "lorem ipsum ".repeat(1 + i % 23),
                Utc.timestamp_opt(1_700_000_000 + i as i64, 0).single(),
            )
        })
        .collect()
}

fn bench_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_layout");
    let policy = LayoutPolicy::default();

    for size in [100, 1_000, 10_000] {
        let feed = generate_feed(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &feed, |b, feed| {
            b.iter(|| relayout(black_box(feed), black_box(1200), &policy, None));
        });
    }

    group.finish();
}

fn bench_unchanged_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("unchanged_relayout");

    for size in [100, 1_000, 10_000] {
        let feed = generate_feed(size);
        let mut engine = FeedLayoutEngine::new(LayoutPolicy::default());
        engine.relayout(&feed, 1200);

        group.bench_with_input(BenchmarkId::from_parameter(size), &feed, |b, feed| {
            b.iter(|| engine.relayout(black_box(feed), black_box(1250)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_layout, bench_unchanged_relayout);
criterion_main!(benches);
