//! Timing helpers for the cross-runtime suite
//!
//! Output format: `BENCH:ackermann:<test>:<result>:<time_ms>`, one line
//! per case on stdout, plus an `ERROR:` line when a result deviates from
//! its expected value. The format is shared with the reference
//! implementations in other runtimes, so downstream tooling can diff runs
//! line by line.

use std::time::Instant;

use tracing::debug;

/// Render one result line.
pub fn bench_line(name: &str, result: u64, time_ms: u128) -> String {
    format!("BENCH:ackermann:{}:{}:{}", name, result, time_ms)
}

/// Time a single evaluation and print its result line.
///
/// Returns false when the result deviates from `expected`.
pub fn bench<F>(name: &str, expected: u64, f: F) -> bool
where
    F: FnOnce() -> u64,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis();
    println!("{}", bench_line(name, result, elapsed));
    if result != expected {
        println!("ERROR: expected {}, got {}", expected, result);
        return false;
    }
    debug!(name, result, elapsed_ms = elapsed as u64, "case complete");
    true
}

/// Time `iterations` evaluations as one measurement.
///
/// Small inputs finish in microseconds; repeating them gives the timer
/// something to measure.
pub fn bench_repeated<F>(name: &str, iterations: u32, expected: u64, mut f: F) -> bool
where
    F: FnMut() -> u64,
{
    let start = Instant::now();
    let mut result = 0;
    for _ in 0..iterations {
        result = f();
    }
    let elapsed = start.elapsed().as_millis();
    println!("{}", bench_line(name, result, elapsed));
    if result != expected {
        println!("ERROR: expected {}, got {}", expected, result);
        return false;
    }
    true
}
