//! Ack Core: evaluation engines for the Ackermann call-overhead benchmark
//!
//! The Ackermann–Péter function is the classic workload for measuring raw
//! function-call and recursion overhead: the computation is nothing but
//! recurrence applications, so runtime cost is dominated by call machinery
//! rather than arithmetic.
//!
//! This crate provides the same function three ways:
//! - Direct host-stack recursion, the workload itself. One machine-level
//!   call per recurrence application.
//! - The known closed values for the m <= 3 rows, used to verify the other
//!   engines against an independent derivation.
//! - An explicit-stack evaluator that holds pending applications in a
//!   contiguous frame vector instead of the host call stack, with per-run
//!   instrumentation and typed failure instead of a process abort.
//!
//! # Modules
//!
//! - `error`: typed evaluation failures (frame limit, overflow)
//! - `machine`: explicit-stack evaluator with frame accounting
//! - `metrics`: per-evaluation call and depth counters
//! - `recurrence`: the recursive engine and closed-form rows

pub mod error;
pub mod machine;
pub mod metrics;
pub mod recurrence;

// Re-export key types and functions
pub use error::EvalError;
pub use machine::{DEFAULT_FRAME_LIMIT, Machine};
pub use metrics::Metrics;
pub use recurrence::{ackermann, closed_form};
