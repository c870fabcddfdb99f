//! QRH Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (IDs, short records).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (16, "16B"),
        (63, "63B"),
        (64, "64B"),
        (65, "65B"),
        (256, "256B"),
        (KB, "1KB"),
        (4 * KB, "4KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| qrh::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Sustained throughput over larger inputs.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");

    let sizes = [
        (64 * KB, "64KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
        (8 * MB, "8MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| qrh::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: INCREMENTAL INPUT
// =============================================================================

/// Cost of buffering through `Hasher` compared to a one-shot call.
fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Incremental");

    let size = MB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    for chunk in [64, 4 * KB, 64 * KB] {
        group.bench_with_input(BenchmarkId::new("chunked", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut hasher = qrh::Hasher::new();
                for part in input.chunks(chunk) {
                    hasher.update(black_box(part));
                }
                hasher.finalize()
            })
        });
    }

    group.bench_function("oneshot", |b| b.iter(|| qrh::hash(black_box(&input))));
    group.finish();
}

// =============================================================================
// BENCHMARK 4: HMAC & VERIFICATION
// =============================================================================

/// Latency/Throughput for the keyed construction and constant-time checks.
fn bench_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-HMAC");

    let short_key = [42u8; 32];
    let long_key = [42u8; 131];

    for (size, name) in [(64, "64B"), (KB, "1KB"), (64 * KB, "64KB")] {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("short-key", name), &input, |b, data| {
            b.iter(|| qrh::hmac(black_box(&short_key), black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("long-key", name), &input, |b, data| {
            b.iter(|| qrh::hmac(black_box(&long_key), black_box(data)))
        });
    }

    let mut input = vec![0u8; 64 * KB];
    rand::rng().fill(&mut input[..]);

    // Verification (constant-time)
    let hash = qrh::hash(&input);
    group.bench_function("verify", |b| {
        b.iter(|| qrh::verify(black_box(&input), black_box(&hash)))
    });

    // MAC verification
    let tag = qrh::hmac(&short_key, &input);
    group.bench_function("verify-hmac", |b| {
        b.iter(|| qrh::verify_hmac(black_box(&short_key), black_box(&input), black_box(&tag)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 5: BASELINES
// =============================================================================

/// Same inputs through SHA-256 and BLAKE3 for scale.
fn bench_baselines(c: &mut Criterion) {
    use sha2::Digest;

    let mut group = c.benchmark_group("5-Baselines");

    for (size, name) in [(64, "64B"), (4 * KB, "4KB"), (MB, "1MB")] {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("qrh-256", name), &input, |b, data| {
            b.iter(|| qrh::hash(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("sha-256", name), &input, |b, data| {
            b.iter(|| sha2::Sha256::digest(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("blake3", name), &input, |b, data| {
            b.iter(|| blake3::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_incremental,
    bench_hmac,
    bench_baselines,
);
criterion_main!(benches);
