//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer operations.
///
/// There is exactly one kind: a growth policy that failed to strictly
/// increase capacity. Out-of-range reads return `None` rather than erroring,
/// and out-of-range writes are accommodated by growth, so neither is an
/// error condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The growth policy proposed a capacity not strictly greater than the
    /// current one. This is a configuration bug in the policy, not a
    /// transient condition; the operation is aborted before any allocation
    /// and the buffer is left unchanged.
    PolicyViolation {
        /// Capacity the policy was asked to grow from.
        current: usize,
        /// Capacity the policy proposed.
        proposed: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolicyViolation { current, proposed } => {
                write!(
                    f,
                    "growth policy violation: proposed capacity {proposed} does not exceed current capacity {current}"
                )
            }
        }
    }
}

impl Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_capacities() {
        let err = BufferError::PolicyViolation {
            current: 8,
            proposed: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains('8'));
        assert!(msg.contains("policy violation"));
    }
}
