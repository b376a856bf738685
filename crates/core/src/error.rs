//! Typed evaluation failures
//!
//! Only the explicit-stack machine reports errors. The recursive engine
//! has no error path at all: it either returns or the process aborts on
//! host stack exhaustion. The machine turns both hazards into values the
//! caller can handle.

use thiserror::Error;

/// Failure modes of the explicit-stack evaluator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The pending-frame stack would exceed the configured limit.
    ///
    /// The recoverable counterpart of host stack exhaustion: the inputs
    /// need more nested applications than the machine was allowed.
    #[error("frame limit exceeded: more than {limit} pending frames")]
    FrameLimit {
        /// The limit that was hit
        limit: usize,
    },

    /// The accumulator left the 64-bit range.
    #[error("result does not fit in 64 bits")]
    Overflow,
}
