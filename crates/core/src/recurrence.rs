//! The Ackermann–Péter recurrence
//!
//! A(0, n) = n + 1
//! A(m, 0) = A(m - 1, 1)
//! A(m, n) = A(m - 1, A(m, n - 1))
//!
//! Total and deterministic for all non-negative inputs; not primitive
//! recursive; hyper-exponential in `m`.

/// Compute A(m, n) by direct host-stack recursion.
///
/// This is the benchmark workload: each recurrence application is a real
/// function call, so the runtime measures call overhead and little else.
///
/// There is no error path. Recursion depth grows with the result value,
/// so inputs beyond m = 3 can exhaust the host call stack, which aborts
/// the process. For the benchmark's fixed call site (3, 10) the depth
/// stays under ten thousand, well inside default stack limits.
pub fn ackermann(m: u64, n: u64) -> u64 {
    if m == 0 {
        n + 1
    } else if n == 0 {
        ackermann(m - 1, 1)
    } else {
        ackermann(m - 1, ackermann(m, n - 1))
    }
}

/// Closed values for the first four rows of the recurrence:
///
/// A(0, n) = n + 1
/// A(1, n) = n + 2
/// A(2, n) = 2n + 3
/// A(3, n) = 2^(n+3) - 3
///
/// Returns `None` for m >= 4 (no elementary closed form) or when the
/// value does not fit in 64 bits. All arithmetic is checked, so callers
/// can probe large rows without wrap-around.
pub fn closed_form(m: u64, n: u64) -> Option<u64> {
    match m {
        0 => n.checked_add(1),
        1 => n.checked_add(2),
        2 => n.checked_mul(2)?.checked_add(3),
        3 => {
            let exp = u32::try_from(n.checked_add(3)?).ok()?;
            2u64.checked_pow(exp)?.checked_sub(3)
        }
        _ => None,
    }
}
