//! Bag view over a [`GrowableSequence`]: membership and removal by value.
//!
//! Equality is whatever `T: PartialEq` says it is. Scans run in index order,
//! and removal by value takes only the first match.

use crate::error::SeqError;
use crate::sequence::{expect_contract, GrowableSequence};

impl<T: PartialEq> GrowableSequence<T> {
    /// Whether any element equals `value`.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn contains(&self, value: &T) -> bool {
        expect_contract(self.try_contains(value))
    }

    /// Whether any element equals `value`, or [`SeqError::Empty`].
    pub fn try_contains(&self, value: &T) -> Result<bool, SeqError> {
        if self.is_empty() {
            return Err(SeqError::Empty {
                operation: "contains",
            });
        }
        Ok(self.iter().any(|e| e == value))
    }

    /// Remove the lowest-indexed element equal to `value`, shifting later
    /// elements down. Returns `None` and leaves the sequence unchanged if
    /// there is no match.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        expect_contract(self.try_remove_value(value))
    }

    /// Checked form of [`remove_value`](Self::remove_value).
    pub fn try_remove_value(&mut self, value: &T) -> Result<Option<T>, SeqError> {
        if self.is_empty() {
            return Err(SeqError::Empty {
                operation: "remove_value",
            });
        }
        match self.iter().position(|e| e == value) {
            Some(index) => self.try_remove_at(index).map(Some),
            None => Ok(None),
        }
    }
}
