//! Recurrence identities and fixed values for both evaluation engines
//!
//! These tests pin the mathematical contract: the three recurrence rules,
//! the published values for small inputs, the driver's expected value for
//! A(3, 10), and agreement between the recursive engine, the explicit-stack
//! machine, and the closed-form rows.

use ack_core::{EvalError, Machine, ackermann, closed_form};

/// The recursive engine needs real call-stack depth for A(3, 10); give it
/// a thread with room to spare instead of relying on harness defaults.
fn with_deep_stack<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(16 * 1024 * 1024)
        .spawn(f)
        .expect("spawn evaluation thread")
        .join()
        .expect("evaluation thread panicked")
}

#[test]
fn test_row_zero_is_successor() {
    let mut machine = Machine::new();
    for n in 0..200 {
        assert_eq!(ackermann(0, n), n + 1);
        assert_eq!(machine.eval(0, n), Ok(n + 1));
    }
}

#[test]
fn test_column_zero_drops_to_previous_row() {
    let mut machine = Machine::new();
    for m in 1..=3 {
        assert_eq!(ackermann(m, 0), ackermann(m - 1, 1));
        assert_eq!(machine.eval(m, 0), machine.eval(m - 1, 1));
    }
}

#[test]
fn test_recurrence_identity() {
    for m in 1..=3u64 {
        let max_n = if m == 3 { 4 } else { 6 };
        for n in 1..=max_n {
            assert_eq!(
                ackermann(m, n),
                ackermann(m - 1, ackermann(m, n - 1)),
                "A({m}, {n})"
            );
        }
    }
}

#[test]
fn test_known_values() {
    let cases: &[(u64, u64, u64)] = &[
        (0, 0, 1),
        (1, 1, 3),
        (2, 3, 9),
        (3, 3, 61),
        (3, 10, 12188),
    ];

    let mut machine = Machine::new();
    for &(m, n, expected) in cases {
        assert_eq!(
            with_deep_stack(move || ackermann(m, n)),
            expected,
            "recursive A({m}, {n})"
        );
        assert_eq!(machine.eval(m, n), Ok(expected), "machine A({m}, {n})");
    }
}

#[test]
fn test_engines_agree_with_closed_form() {
    let mut machine = Machine::new();
    for m in 0..=3 {
        for n in 0..=7 {
            let expected = closed_form(m, n).expect("closed form covers m <= 3");
            assert_eq!(ackermann(m, n), expected, "recursive A({m}, {n})");
            assert_eq!(machine.eval(m, n), Ok(expected), "machine A({m}, {n})");
        }
    }
    assert_eq!(closed_form(3, 10), Some(12188));
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let mut machine = Machine::new();

    let first = machine.eval(3, 5).expect("within limits");
    let first_metrics = machine.metrics();

    for _ in 0..10 {
        assert_eq!(machine.eval(3, 5), Ok(first));
        assert_eq!(machine.metrics(), first_metrics);
    }
    for _ in 0..10 {
        assert_eq!(ackermann(3, 5), first);
    }
}

#[test]
fn test_machine_metrics_for_driver_input() {
    let mut machine = Machine::new();
    machine.eval(3, 10).expect("within limits");

    let metrics = machine.metrics();
    // Over a million recurrence applications, but pending frames stay a
    // small fraction of the default limit.
    assert!(metrics.calls > 100_000, "calls = {}", metrics.calls);
    assert!(metrics.peak_depth > 1_000, "peak = {}", metrics.peak_depth);
    assert!(
        metrics.peak_depth < ack_core::DEFAULT_FRAME_LIMIT / 8,
        "peak = {}",
        metrics.peak_depth
    );
}

#[test]
fn test_tight_frame_limit_fails_cleanly() {
    let mut machine = Machine::with_frame_limit(64);

    assert_eq!(machine.eval(3, 10), Err(EvalError::FrameLimit { limit: 64 }));

    // The machine stays usable after a failed run
    assert_eq!(machine.eval(2, 3), Ok(9));
}

#[test]
fn test_overflow_is_an_error_not_a_wrap() {
    let mut machine = Machine::new();

    assert_eq!(machine.eval(0, u64::MAX), Err(EvalError::Overflow));
}
