//! Criterion benchmarks for rust_console_filter

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_console_filter::prelude::*;
use serde_json::json;
use std::time::{Duration, Instant};

// ============================================================================
// Admission Benchmarks
// ============================================================================

fn bench_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");
    group.throughput(Throughput::Elements(1));

    let mut pipeline = AdmissionPipeline::new();
    pipeline.set_show_timestamps(false);

    group.bench_function("accepted_untagged", |b| {
        b.iter(|| pipeline.evaluate(Severity::Log, LogCall::new(black_box("message"))));
    });

    pipeline.level_mut().set_threshold(Severity::Error);
    group.bench_function("rejected_by_level", |b| {
        b.iter(|| pipeline.evaluate(Severity::Debug, LogCall::new(black_box("message"))));
    });
    pipeline.level_mut().set_threshold(Severity::Debug);

    for i in 0..64 {
        pipeline.tags_mut().add_exclude(format!("tag{}", i));
    }
    group.bench_function("rejected_by_tag_64", |b| {
        b.iter(|| {
            pipeline.evaluate(
                Severity::Log,
                LogCall::new(black_box("message")).tag("tag63"),
            )
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let formatter = MessageFormatter::default();

    group.bench_function("with_timestamp_and_tag", |b| {
        b.iter(|| {
            formatter.format(
                Severity::Warning,
                black_box("disk usage high"),
                None,
                "fs",
                true,
            )
        });
    });

    group.bench_function("with_payload", |b| {
        b.iter(|| {
            formatter.format(
                Severity::Log,
                black_box("request"),
                Some(json!({"path": "/", "status": 200})),
                "",
                false,
            )
        });
    });

    group.bench_function("positional_normalization", |b| {
        b.iter(|| {
            LogCall::positional(
                black_box("hi"),
                Some(json!("tag1")),
                Some(json!({"x": 1})),
            )
        });
    });

    group.finish();
}

// ============================================================================
// Duplicate Suppression Benchmarks
// ============================================================================

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates");
    group.throughput(Throughput::Elements(1));

    group.bench_function("burst_of_same_message", |b| {
        let mut dup = DuplicateSuppressor::new(DuplicateConfig::enabled());
        let now = Instant::now();
        b.iter(|| dup.check(black_box("re-render"), now));
    });

    group.bench_function("distinct_messages_full_window", |b| {
        let mut dup = DuplicateSuppressor::new(
            DuplicateConfig::enabled().with_window(Duration::from_secs(3600)),
        );
        let now = Instant::now();
        for i in 0..256 {
            dup.check(&format!("message {}", i), now);
        }
        b.iter(|| dup.check(black_box("message 255"), now));
    });

    group.finish();
}

// ============================================================================
// End-to-end Benchmarks
// ============================================================================

fn bench_console(c: &mut Criterion) {
    let mut group = c.benchmark_group("console");
    group.throughput(Throughput::Elements(1));

    let sink = MemorySink::new();
    let mut console = Console::builder()
        .announce_changes(false)
        .sink(sink.clone())
        .build();

    group.bench_function("log_to_memory", |b| {
        b.iter(|| {
            console.log(black_box("hello"));
            if sink.len() > 10_000 {
                sink.clear();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_admission,
    bench_formatting,
    bench_duplicates,
    bench_console
);
criterion_main!(benches);
