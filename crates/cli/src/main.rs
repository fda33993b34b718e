//! Prime-counting benchmark CLI
//!
//! Counts the primes up to 1,000,000 by trial division and prints the count
//! as a single `RESULT:<count>` line on stdout. The run is deliberately
//! sequential and single-threaded so it measures raw computational
//! throughput; a small warm-up pass runs first and is discarded.
//!
//! Timing diagnostics go to stderr via `tracing` and are silent unless
//! `RUST_LOG` enables them, keeping stdout to exactly one line.

use clap::Parser;
use std::time::Instant;
use tracing::debug;

use primecount_core::count_primes;

/// Warm-up bound, counted once and discarded so the process reaches a
/// steady state before the measured run.
const WARMUP_LIMIT: i64 = 1_000;

/// Inclusive upper bound of the measured run.
const BENCH_LIMIT: i64 = 1_000_000;

#[derive(Parser)]
#[command(name = "primecount")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count primes up to 1,000,000 by trial division", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Diagnostics on stderr, gated by RUST_LOG; stdout stays one line.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let warmup = count_primes(WARMUP_LIMIT);
    debug!(
        "warm-up: {} primes <= {} in {:?} (discarded)",
        warmup,
        WARMUP_LIMIT,
        start.elapsed()
    );

    let start = Instant::now();
    let count = count_primes(BENCH_LIMIT);
    debug!(
        "measured: {} primes <= {} in {:?}",
        count,
        BENCH_LIMIT,
        start.elapsed()
    );

    println!("RESULT:{count}");
}
