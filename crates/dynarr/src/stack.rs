//! Stack view over a [`GrowableSequence`].
//!
//! The top of the stack is the last element, so push and pop never shift.

use crate::error::SeqError;
use crate::sequence::{expect_contract, GrowableSequence};

impl<T> GrowableSequence<T> {
    /// Push `value` onto the top of the stack. Same as [`append`](Self::append).
    pub fn push(&mut self, value: T) -> Result<(), SeqError> {
        self.append(value)
    }

    /// Borrow the top of the stack.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn top(&self) -> &T {
        expect_contract(self.try_top())
    }

    /// Borrow the top of the stack, or [`SeqError::Empty`].
    pub fn try_top(&self) -> Result<&T, SeqError> {
        match self.len() {
            0 => Err(SeqError::Empty { operation: "top" }),
            len => self.try_get(len - 1),
        }
    }

    /// Remove and return the top of the stack.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        expect_contract(self.try_pop())
    }

    /// Remove and return the top of the stack, or [`SeqError::Empty`].
    pub fn try_pop(&mut self) -> Result<T, SeqError> {
        match self.len() {
            0 => Err(SeqError::Empty { operation: "pop" }),
            len => self.try_remove_at(len - 1),
        }
    }
}
