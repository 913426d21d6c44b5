//! Growth policies: pure maps from current capacity to the next one.
//!
//! A policy is consulted whenever a buffer needs more room. It must be
//! strictly increasing for every capacity the buffer can reach; the buffer
//! checks this on every application and fails with
//! [`PolicyViolation`](crate::BufferError::PolicyViolation) if it does not
//! hold. The check runs at first use, not at construction, so a broken
//! policy on a buffer that never grows is never detected.

/// A pure map from current capacity to a strictly larger target capacity.
///
/// Policies carry no state and see nothing but the capacity — the buffer's
/// growth behavior is fully determined by its own fields. Any
/// `Fn(usize) -> usize` closure is a policy via the blanket impl.
pub trait GrowthPolicy {
    /// Propose the next capacity given the current one.
    ///
    /// The buffer rejects proposals that are not strictly greater than
    /// `current`; implementations are not expected to validate themselves.
    fn next_capacity(&self, current: usize) -> usize;
}

impl<F> GrowthPolicy for F
where
    F: Fn(usize) -> usize,
{
    fn next_capacity(&self, current: usize) -> usize {
        self(current)
    }
}

/// The default policy: grow capacity by half, rounded up.
///
/// Computes `ceil(current * 1.5)` in integer arithmetic
/// (`current + (current + 1) / 2`), except at capacity 0, where
/// `ceil(0 * 1.5) == 0` would fail the strict-increase check before the
/// buffer ever holds an element. That degenerate case is special-cased to
/// grow to 1, so a buffer constructed with capacity 0 grows out of the box.
/// Custom policies get no such guard — a policy that returns 0 for 0 fails
/// on first use from an empty allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HalfAgain;

impl GrowthPolicy for HalfAgain {
    fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            return 1;
        }
        current + (current + 1) / 2
    }
}

/// An alternative policy that doubles capacity, growing 0 to 1.
///
/// Trades memory headroom for fewer reallocations compared to
/// [`HalfAgain`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            return 1;
        }
        current * 2
    }
}
