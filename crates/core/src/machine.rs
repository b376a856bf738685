//! Explicit-stack evaluation
//!
//! Evaluates the same recurrence as [`recurrence::ackermann`] without
//! consuming host call stack. Pending applications live in a contiguous
//! vector of frames; the second argument lives in a single accumulator.
//!
//! ## Evaluation loop
//!
//! ```text
//! frames: [ m0 | m1 | ... ]      acc: n
//!
//! pop m:
//!   m == 0    -> acc = acc + 1
//!   acc == 0  -> acc = 1, push m - 1
//!   otherwise -> acc = acc - 1, push m - 1, push m
//!
//! frames drained -> acc is A(M, N)
//! ```
//!
//! Each popped frame corresponds to one call the recursive engine would
//! have made, so the frame count doubles as a call count and the peak
//! frame depth mirrors the recursion depth.
//!
//! The frame vector grows on demand up to a hard limit. Hitting the limit
//! returns [`EvalError::FrameLimit`] instead of aborting the process, and
//! accumulator arithmetic is checked, so hostile inputs (m >= 4) fail
//! fast with a value the caller can handle.
//!
//! [`recurrence::ackermann`]: crate::recurrence::ackermann

use tracing::trace;

use crate::error::EvalError;
use crate::metrics::Metrics;

/// Default cap on pending frames (1 Mi frames, 8 MiB).
///
/// A(3, 10) peaks around eight thousand frames; anything approaching
/// this limit is a workload the benchmark was never meant to run.
pub const DEFAULT_FRAME_LIMIT: usize = 1 << 20;

/// Initial frame-vector capacity (number of frames).
const INITIAL_FRAME_CAPACITY: usize = 4096;

/// Explicit-stack Ackermann evaluator.
///
/// Reusable across evaluations; each call to [`Machine::eval`] resets the
/// frame stack and metrics. No state flows from one evaluation into the
/// next, so repeated evaluation of the same inputs yields identical
/// results and identical metrics.
#[derive(Debug)]
pub struct Machine {
    /// Pending m-frames, top of stack at the end
    frames: Vec<u64>,
    /// Hard cap on pending frames
    limit: usize,
    /// Counters for the most recent evaluation
    metrics: Metrics,
}

impl Machine {
    /// Create a machine with [`DEFAULT_FRAME_LIMIT`].
    pub fn new() -> Self {
        Self::with_frame_limit(DEFAULT_FRAME_LIMIT)
    }

    /// Create a machine with an explicit frame limit.
    pub fn with_frame_limit(limit: usize) -> Self {
        Machine {
            frames: Vec::with_capacity(INITIAL_FRAME_CAPACITY.min(limit)),
            limit,
            metrics: Metrics::default(),
        }
    }

    /// The configured frame limit.
    pub fn frame_limit(&self) -> usize {
        self.limit
    }

    /// Counters from the most recent [`Machine::eval`].
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Evaluate A(m, n).
    ///
    /// Returns [`EvalError::FrameLimit`] if the inputs need more pending
    /// frames than the limit allows, [`EvalError::Overflow`] if the value
    /// leaves the 64-bit range.
    pub fn eval(&mut self, m: u64, n: u64) -> Result<u64, EvalError> {
        self.frames.clear();
        self.metrics = Metrics::default();

        let mut acc = n;
        self.push(m)?;

        while let Some(m) = self.frames.pop() {
            self.metrics.record_call();
            trace!(m, acc, depth = self.frames.len(), "frame");

            if m == 0 {
                acc = acc.checked_add(1).ok_or(EvalError::Overflow)?;
            } else if acc == 0 {
                acc = 1;
                self.push(m - 1)?;
            } else {
                acc -= 1;
                self.push(m - 1)?;
                self.push(m)?;
            }
        }

        Ok(acc)
    }

    /// Push a pending frame, enforcing the frame limit.
    #[inline]
    fn push(&mut self, m: u64) -> Result<(), EvalError> {
        if self.frames.len() >= self.limit {
            return Err(EvalError::FrameLimit { limit: self.limit });
        }
        self.frames.push(m);
        self.metrics.observe_depth(self.frames.len());
        Ok(())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
