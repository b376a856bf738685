//! Cross-engine timing suite
//!
//! Output format: `BENCH:ackermann:<test>:<result>:<time_ms>`
//!
//! Exercises the recursive engine, the explicit-stack machine, and the
//! closed-form rows over fixed cases, then reports the instrumented
//! metrics for the driver input. Exits non-zero if any case deviates from
//! its expected value.

use std::time::Instant;

use ack_bench::harness::{bench, bench_repeated};
use ack_bench::report::{self, ReportData};
use ack_core::{Machine, ackermann, closed_form};

fn main() {
    ack_bench::init_tracing();

    let start = Instant::now();
    let mut ok = true;

    // Recursive engine
    ok &= bench("recursive-3-3", 61, || ackermann(3, 3));
    ok &= bench("recursive-3-10", 12188, || ackermann(3, 10));

    // Explicit-stack machine
    let mut machine = Machine::new();
    ok &= bench("machine-3-3", 61, || eval_or_zero(&mut machine, 3, 3));
    let mut driver_result = 0;
    ok &= bench("machine-3-10", 12188, || {
        driver_result = eval_or_zero(&mut machine, 3, 10);
        driver_result
    });
    let driver_metrics = machine.metrics();

    // Closed-form rows (arithmetic floor: how fast the value itself is)
    ok &= bench("closed-form-3-10", 12188, || closed_form(3, 10).unwrap_or(0));

    // Repeated runs
    ok &= bench_repeated("recursive-2-3-x1000", 1000, 9, || ackermann(2, 3));
    ok &= bench_repeated("machine-2-3-x1000", 1000, 9, || {
        eval_or_zero(&mut machine, 2, 3)
    });

    report::emit(&ReportData {
        wall_clock_ms: start.elapsed().as_millis() as u64,
        result: driver_result,
        calls: Some(driver_metrics.calls),
        peak_frames: Some(driver_metrics.peak_depth),
    });

    std::process::exit(if ok { 0 } else { 1 });
}

/// Evaluate on the machine, routing failures through the mismatch path.
fn eval_or_zero(machine: &mut Machine, m: u64, n: u64) -> u64 {
    match machine.eval(m, n) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("ERROR: machine A({}, {}): {}", m, n, e);
            0
        }
    }
}
