//! Sequence configuration parameters.

use crate::error::SeqError;

/// Configuration for constructing a [`GrowableSequence`](crate::GrowableSequence).
///
/// Unlike [`GrowableSequence::with_capacity`](crate::GrowableSequence::with_capacity),
/// which treats a zero capacity as a contract violation, a config is
/// boundary input: [`validate`](Self::validate) reports a bad value as an
/// error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of elements the sequence can hold before its first growth.
    ///
    /// Default: 10. Must be positive.
    pub initial_capacity: usize,
}

impl SequenceConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check that the config describes a constructible sequence.
    pub fn validate(&self) -> Result<(), SeqError> {
        if self.initial_capacity == 0 {
            return Err(SeqError::InvalidCapacity {
                requested: self.initial_capacity,
            });
        }
        Ok(())
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
