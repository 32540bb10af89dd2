//! # Lookup Benchmarks
//!
//! Measures name/value lookups against the per-enum reverse index, the
//! validity predicates, coercion and the listing operations.
//!
//! Run: `cargo bench --bench lookup_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId, Throughput};
use enum_mate::prelude::*;
use serde_json::json;

better_int_enum! {
    pub enum HttpStatus {
        Continue = 100,
        Ok = 200,
        Created = 201,
        Accepted = 202,
        NoContent = 204,
        MovedPermanently = 301,
        Found = 302,
        NotModified = 304,
        BadRequest = 400,
        Unauthorized = 401,
        Forbidden = 403,
        NotFound = 404,
        Conflict = 409,
        InternalServerError = 500,
        BadGateway = 502,
        ServiceUnavailable = 503,
    }
}

better_str_enum! {
    pub enum JobState {
        Queued = "QUEUED",
        Running = "RUNNING",
        Succeeded = "SUCCEEDED",
        Failed = "FAILED",
        Cancelled = "CANCELLED",
    }
}

/// Benchmark lookups by name and by value, hits and misses
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    // Warm the index so the first sample doesn't pay for the build
    let _ = HttpStatus::index();
    let _ = JobState::index();

    group.bench_function("int_by_name_hit", |b| {
        b.iter(|| black_box(HttpStatus::get_by_name(black_box("ServiceUnavailable"))))
    });

    group.bench_function("int_by_name_miss", |b| {
        b.iter(|| black_box(HttpStatus::get_by_name(black_box("Teapot"))))
    });

    group.bench_function("int_by_value_hit", |b| {
        b.iter(|| black_box(HttpStatus::get_by_value(black_box(&503))))
    });

    group.bench_function("int_by_value_miss", |b| {
        b.iter(|| black_box(HttpStatus::get_by_value(black_box(&418))))
    });

    group.bench_function("str_by_value_hit", |b| {
        b.iter(|| black_box(JobState::get_by_value(black_box("CANCELLED"))))
    });

    group.bench_function("str_by_value_miss", |b| {
        b.iter(|| black_box(JobState::get_by_value(black_box("cancelled"))))
    });

    group.finish();
}

/// Benchmark the boolean predicates
fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");

    group.bench_function("is_valid_name", |b| {
        b.iter(|| black_box(HttpStatus::is_valid_name(black_box("NotFound"))))
    });

    group.bench_function("is_valid_value", |b| {
        b.iter(|| black_box(HttpStatus::is_valid_value(black_box(&404))))
    });

    group.bench_function("ensure_is_valid_value", |b| {
        b.iter(|| black_box(JobState::ensure_is_valid_value(black_box("RUNNING"))))
    });

    group.finish();
}

/// Benchmark coercion of members and raw primitives
fn bench_coerce(c: &mut Criterion) {
    let mut group = c.benchmark_group("coerce");

    group.bench_function("ensure_int_member", |b| {
        b.iter(|| black_box(HttpStatus::ensure_int(black_box(HttpStatus::Created))))
    });

    group.bench_function("ensure_int_raw", |b| {
        b.iter(|| black_box(HttpStatus::ensure_int(black_box(201i64))))
    });

    group.bench_function("ensure_str_raw", |b| {
        b.iter(|| black_box(JobState::ensure_str(black_box("QUEUED"))))
    });

    let untyped = json!("QUEUED");
    group.bench_function("ensure_str_dyn", |b| {
        b.iter(|| black_box(JobState::ensure_str_dyn(black_box(&untyped))))
    });

    group.finish();
}

/// Benchmark listing names and values
fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");

    group.bench_function("int_get_names", |b| {
        b.iter(|| black_box(HttpStatus::get_names()))
    });

    group.bench_function("int_get_values", |b| {
        b.iter(|| black_box(HttpStatus::get_values()))
    });

    group.bench_function("str_get_values", |b| {
        b.iter(|| black_box(JobState::get_values()))
    });

    group.finish();
}

/// Benchmark value lookups over batches of mixed hits and misses
fn bench_lookup_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_throughput");

    for batch_size in [10u64, 100, 1000, 10000].iter() {
        let inputs: Vec<i64> = (0..*batch_size as i64)
            .map(|i| 100 + (i * 37) % 420)
            .collect();

        group.throughput(Throughput::Elements(*batch_size));
        group.bench_with_input(
            BenchmarkId::new("is_valid_value", batch_size),
            &inputs,
            |b, values| {
                b.iter(|| {
                    values
                        .iter()
                        .filter(|v| HttpStatus::is_valid_value(v))
                        .count()
                })
            }
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lookup,
    bench_predicates,
    bench_coerce,
    bench_listing,
    bench_lookup_throughput,
);

criterion_main!(benches);
