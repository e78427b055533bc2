//! Sequence error types.

use std::error::Error;
use std::fmt;

/// Errors reported by [`GrowableSequence`](crate::GrowableSequence) operations.
///
/// The unchecked methods panic with the `Display` text of these variants;
/// the `try_` methods return them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// A zero capacity was supplied where a positive one is required.
    InvalidCapacity {
        /// The capacity that was requested.
        requested: usize,
    },
    /// Backing storage for the requested number of elements could not be
    /// allocated.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },
    /// Doubling the current capacity would overflow `usize`.
    CapacityOverflow {
        /// Capacity at the time of the failed growth.
        current: usize,
    },
    /// An index was outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Sequence length at the time of the access.
        len: usize,
    },
    /// The operation requires a non-empty sequence.
    Empty {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(f, "invalid capacity {requested}: capacity must be positive")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed for {requested} elements")
            }
            Self::CapacityOverflow { current } => {
                write!(f, "capacity overflow: cannot double capacity {current}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty { operation } => {
                write!(f, "{operation} called on an empty sequence")
            }
        }
    }
}

impl Error for SeqError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_index_and_length() {
        let err = SeqError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn display_names_the_operation() {
        let err = SeqError::Empty { operation: "pop" };
        assert_eq!(err.to_string(), "pop called on an empty sequence");
    }
}
