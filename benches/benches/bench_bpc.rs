//! Bytes-per-Cycle (bpC) Benchmark: QRH-256
//!
//! Measures algorithmic efficiency using hardware cycle counters (RDTSC).
//! x86_64 only; other targets print a notice and exit.

#![allow(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unwrap_used)]

#[cfg(target_arch = "x86_64")]
use rayon::prelude::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::_rdtsc;
#[cfg(target_arch = "x86_64")]
use std::hint::black_box;

// =============================================================================
// UTILITIES
// =============================================================================

/// Measure RDTSC overhead to subtract from measurements.
#[cfg(target_arch = "x86_64")]
fn measure_overhead(iterations: u64) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        black_box(0);
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

/// Average cycles per call of `func` over `iterations`.
#[cfg(target_arch = "x86_64")]
fn measure(input: &[u8], iterations: u64, func: fn(&[u8])) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        func(black_box(input));
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

// =============================================================================
// HASH ADAPTERS
// =============================================================================

#[cfg(target_arch = "x86_64")]
fn run_qrh(data: &[u8]) {
    black_box(qrh::hash(data));
}

#[cfg(target_arch = "x86_64")]
fn run_qrh_hmac(data: &[u8]) {
    black_box(qrh::hmac(b"benchmark key", data));
}

#[cfg(target_arch = "x86_64")]
fn run_blake3(data: &[u8]) {
    black_box(blake3::hash(data));
}

#[cfg(target_arch = "x86_64")]
fn run_sha256(data: &[u8]) {
    use sha2::Digest;
    let mut hasher = sha2::Sha256::new();
    hasher.update(data);
    black_box(hasher.finalize());
}

// =============================================================================
// MAIN BENCHMARK
// =============================================================================

#[cfg(target_arch = "x86_64")]
fn main() {
    println!("BENCHMARK: Single-Core Bytes per Cycle");
    println!("=====================================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<12} | {:<12}",
        "Size", "QRH-256", "HMAC-QRH", "BLAKE3", "SHA256"
    );
    println!("{:-<10}-+-{:-<12}-+-{:-<12}-+-{:-<12}-+-{:-<12}", "", "", "", "", "");

    let overhead = measure_overhead(1_000_000);

    let sizes = [64, 1024, 64 * 1024, 1024 * 1024, 10 * 1024 * 1024];

    for &size in &sizes {
        let input = vec![0u8; size];
        let iterations = if size < 4096 {
            200_000
        } else if size < 1024 * 1024 {
            2_000
        } else {
            20
        };

        let bpc = |func: fn(&[u8])| {
            size as f64 / (measure(&input, iterations, func) - overhead).max(1.0)
        };

        println!(
            "{:<10} | {:<12.3} | {:<12.3} | {:<12.3} | {:<12.3}",
            format!("{size} B"),
            bpc(run_qrh),
            bpc(run_qrh_hmac),
            bpc(run_blake3),
            bpc(run_sha256),
        );
    }
    println!("=====================================================================");
    println!("* Values in Bytes/Cycle (Higher is Better)");
    println!("* Reference digest of 64 zero bytes: {}", hex::encode(qrh::hash(&[0u8; 64])));

    measure_cpu_limit();
}

#[cfg(not(target_arch = "x86_64"))]
fn main() {
    println!("bench_bpc requires RDTSC (x86_64); use the criterion benches instead.");
}

// =============================================================================
// THEORETICAL LIMIT (L1 CACHE)
// =============================================================================

/// Independent messages hashed on every core at once.
#[cfg(target_arch = "x86_64")]
fn measure_cpu_limit() {
    println!("\nCPU SCALING LIMIT (L1 Cache Test - 32KB per Thread)");
    println!("===========================================================");
    println!(
        "{:<15} | {:<12} | {:<12}",
        "Hash", "Peak bpC", "Est. GB/s @ 4GHz"
    );
    println!("{:-<15}-+-{:-<12}-+-{:-<12}", "", "", "");

    let num_threads = rayon::current_num_threads();
    let chunk_size = 32 * 1024;
    let iterations = 2_000;
    let total_bytes = num_threads as f64 * chunk_size as f64 * iterations as f64;

    let run_bench = |name: &str, func: fn(&[u8])| {
        let start = unsafe { _rdtsc() };
        (0..num_threads).into_par_iter().for_each(|_| {
            let buf = vec![0u8; chunk_size]; // Thread-local
            for _ in 0..iterations {
                func(black_box(&buf));
            }
        });
        let end = unsafe { _rdtsc() };
        let cycles = (end - start) as f64;
        let bpc = total_bytes / cycles;
        println!("{:<15} | {:<12.3} | {:<12.2}", name, bpc, bpc * 4.0);
    };

    run_bench("QRH-256", run_qrh);
    run_bench("BLAKE3", run_blake3);
    run_bench("SHA-256", run_sha256);

    println!("===========================================================");
    println!("* This test fits in CPU Cache. RAM Bandwidth is NOT a factor.");
}
