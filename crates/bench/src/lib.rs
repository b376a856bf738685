//! Benchmark surface for the Ackermann call-overhead workload
//!
//! Two binaries share this crate:
//! - `ackermann`: the driver. One call to A(3, 10), one integer on stdout,
//!   exit 0 on the expected value. This is the program other runtimes are
//!   compared against.
//! - `ackermann-suite`: timed cases across every engine, one `BENCH:` line
//!   per case.
//!
//! Stdout is reserved for benchmark output; logging goes to stderr via
//! `tracing`, and the optional at-exit report (`ACK_REPORT`) goes to
//! stderr or a file.
//!
//! # Modules
//!
//! - `harness`: timing helpers and the `BENCH:` output format
//! - `report`: at-exit KPI report

pub mod harness;
pub mod report;

/// Initialize stderr logging from `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
