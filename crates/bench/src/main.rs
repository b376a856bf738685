//! Ackermann benchmark driver
//!
//! Invokes the recursive engine once with the fixed arguments and prints
//! the result: a single integer on stdout, exit 0 on the expected value.
//! No flags, no arguments; the computation reads nothing from the
//! environment. This is the program other runtimes are compared against.

use std::time::Instant;

use tracing::debug;

use ack_bench::report::{self, ReportData};
use ack_core::ackermann;

const M: u64 = 3;
const N: u64 = 10;
const EXPECTED: u64 = 12188;

fn main() {
    ack_bench::init_tracing();

    let start = Instant::now();
    let result = ackermann(M, N);
    let elapsed = start.elapsed();
    debug!(
        result,
        elapsed_us = elapsed.as_micros() as u64,
        "ackermann({}, {})",
        M,
        N
    );

    println!("{}", result);

    report::emit(&ReportData {
        wall_clock_ms: elapsed.as_millis() as u64,
        result,
        calls: None,
        peak_frames: None,
    });

    std::process::exit(if result == EXPECTED { 0 } else { 1 });
}
