//! The growable sequence and its positional operations.
//!
//! [`GrowableSequence`] tracks its own logical capacity rather than relying
//! on `Vec`'s growth policy, so the doubling law is exact: a sequence
//! created with capacity `c` only ever has capacity `c * 2^m`.

use std::fmt;
use std::ops::Index;

use crate::config::SequenceConfig;
use crate::error::SeqError;

/// A single-owner, resizable, indexable sequence.
///
/// Holds `len()` live elements in contiguous storage with room for
/// `capacity()` before the next growth. Capacity is always positive, only
/// changes on [`append`](Self::append) into a full sequence, and never
/// shrinks.
pub struct GrowableSequence<T> {
    /// Live elements, `[0, len)`. Reserved for at least `capacity` elements.
    buf: Vec<T>,
    /// Logical capacity. `buf.len() <= capacity` always.
    capacity: usize,
}

impl<T> GrowableSequence<T> {
    /// Create an empty sequence with room for exactly `capacity` elements.
    ///
    /// Returns [`SeqError::AllocationFailed`] if the backing storage cannot
    /// be allocated.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, SeqError> {
        assert!(
            capacity > 0,
            "{}",
            SeqError::InvalidCapacity {
                requested: capacity
            }
        );
        Ok(Self {
            buf: allocate(capacity)?,
            capacity,
        })
    }

    /// Create an empty sequence from a validated config.
    ///
    /// A zero `initial_capacity` is reported as
    /// [`SeqError::InvalidCapacity`] rather than a panic.
    pub fn from_config(config: &SequenceConfig) -> Result<Self, SeqError> {
        config.validate()?;
        Self::with_capacity(config.initial_capacity)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of elements the sequence can hold before it next grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append `value` after the last element, doubling capacity first if
    /// the sequence is full.
    ///
    /// On error the sequence is left exactly as it was and `value` is
    /// dropped.
    pub fn append(&mut self, value: T) -> Result<(), SeqError> {
        if self.buf.len() == self.capacity {
            self.grow(doubled(self.capacity)?)?;
        }
        // Reserved above, so this never reallocates.
        self.buf.push(value);
        Ok(())
    }

    /// Move every live element into fresh storage of `new_capacity`.
    ///
    /// The new buffer is allocated before anything is moved, so a failed
    /// allocation leaves the sequence untouched.
    fn grow(&mut self, new_capacity: usize) -> Result<(), SeqError> {
        debug_assert!(new_capacity > self.capacity);
        let mut next = allocate(new_capacity)?;
        next.extend(self.buf.drain(..));
        log::trace!(
            "sequence grew from {} to {} ({} live)",
            self.capacity,
            new_capacity,
            next.len()
        );
        self.buf = next;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Borrow the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty or `index >= len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        expect_contract(self.try_get(index))
    }

    /// Borrow the element at `index`, or report why it is not readable.
    pub fn try_get(&self, index: usize) -> Result<&T, SeqError> {
        self.check_index(index, "get")?;
        Ok(&self.buf[index])
    }

    /// Overwrite the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty or `index >= len()`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        expect_contract(self.try_set(index, value));
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, SeqError> {
        self.check_index(index, "set")?;
        Ok(std::mem::replace(&mut self.buf[index], value))
    }

    /// Exchange the elements at `i` and `j`. `i == j` is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty or either index is `>= len()`.
    #[track_caller]
    pub fn swap(&mut self, i: usize, j: usize) {
        expect_contract(self.try_swap(i, j));
    }

    /// Exchange the elements at `i` and `j`, or report an invalid index.
    pub fn try_swap(&mut self, i: usize, j: usize) -> Result<(), SeqError> {
        self.check_index(i, "swap")?;
        self.check_index(j, "swap")?;
        self.buf.swap(i, j);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting every later
    /// element one position toward the front. Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty or `index >= len()`.
    #[track_caller]
    pub fn remove_at(&mut self, index: usize) -> T {
        expect_contract(self.try_remove_at(index))
    }

    /// Remove and return the element at `index`, or report an invalid index.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, SeqError> {
        self.check_index(index, "remove_at")?;
        Ok(self.buf.remove(index))
    }

    /// Remove every element in index order. Capacity is unchanged.
    ///
    /// Elements not consumed from the iterator are dropped with it.
    pub fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.buf.drain(..)
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Iterate over the live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    fn check_index(&self, index: usize, operation: &'static str) -> Result<(), SeqError> {
        if self.buf.is_empty() {
            return Err(SeqError::Empty { operation });
        }
        if index >= self.buf.len() {
            return Err(SeqError::IndexOutOfBounds {
                index,
                len: self.buf.len(),
            });
        }
        Ok(())
    }
}

/// Unwrap the result of a checked operation, treating an error as a
/// contract violation by the caller.
#[track_caller]
pub(crate) fn expect_contract<V>(result: Result<V, SeqError>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

fn doubled(capacity: usize) -> Result<usize, SeqError> {
    capacity
        .checked_mul(2)
        .ok_or(SeqError::CapacityOverflow { current: capacity })
}

fn allocate<T>(capacity: usize) -> Result<Vec<T>, SeqError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| SeqError::AllocationFailed {
            requested: capacity,
        })?;
    Ok(buf)
}

impl<T> Index<usize> for GrowableSequence<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T: Clone> Clone for GrowableSequence<T> {
    /// Clones the live elements and keeps the logical capacity.
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend(self.buf.iter().cloned());
        Self {
            buf,
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    /// Sequences are equal when their live elements are; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for GrowableSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableSequence")
            .field("len", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.buf)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> IntoIterator for GrowableSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_of(values: &[i32]) -> GrowableSequence<i32> {
        let mut seq = GrowableSequence::with_capacity(values.len().max(1)).unwrap();
        for &v in values {
            seq.append(v).unwrap();
        }
        seq
    }

    #[test]
    fn new_sequence_is_empty() {
        let seq = GrowableSequence::<u8>::with_capacity(4).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn zero_capacity_is_a_contract_violation() {
        let _ = GrowableSequence::<u8>::with_capacity(0);
    }

    #[test]
    fn from_config_rejects_zero_capacity() {
        let err = GrowableSequence::<u8>::from_config(&SequenceConfig::new(0)).unwrap_err();
        assert_eq!(err, SeqError::InvalidCapacity { requested: 0 });
    }

    #[test]
    fn from_config_uses_initial_capacity() {
        let seq = GrowableSequence::<u8>::from_config(&SequenceConfig::default()).unwrap();
        assert_eq!(seq.capacity(), SequenceConfig::DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn impossible_allocation_is_an_error_not_a_panic() {
        let err = GrowableSequence::<u64>::with_capacity(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            SeqError::AllocationFailed {
                requested: usize::MAX
            }
        );
    }

    #[test]
    fn append_doubles_when_full() {
        let mut seq = GrowableSequence::with_capacity(2).unwrap();
        seq.append(10).unwrap();
        seq.append(20).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.capacity(), 2);

        seq.append(30).unwrap();
        assert_eq!(seq.capacity(), 4);
        assert_eq!(seq.len(), 3);
        assert_eq!(*seq.get(2), 30);
    }

    #[test]
    fn capacity_one_grows_by_powers_of_two() {
        let mut seq = GrowableSequence::with_capacity(1).unwrap();
        let mut seen = vec![seq.capacity()];
        for i in 0..9 {
            seq.append(i).unwrap();
            if seen.last() != Some(&seq.capacity()) {
                seen.push(seq.capacity());
            }
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn growth_preserves_order() {
        let seq = seq_of(&[1, 2, 3]);
        let mut seq2 = GrowableSequence::with_capacity(1).unwrap();
        for &v in seq.as_slice() {
            seq2.append(v).unwrap();
        }
        assert_eq!(seq2.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn doubling_overflow_reported() {
        assert_eq!(
            doubled(usize::MAX),
            Err(SeqError::CapacityOverflow {
                current: usize::MAX
            })
        );
        assert_eq!(doubled(3), Ok(6));
    }

    #[test]
    fn set_overwrites_without_resizing() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.set(1, 9);
        assert_eq!(seq.as_slice(), &[1, 9, 3]);
        assert_eq!(seq.capacity(), 3);
        assert_eq!(seq.try_set(0, 7), Ok(1));
    }

    #[test]
    fn self_swap_is_noop() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.swap(1, 1);
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
        seq.swap(0, 2);
        assert_eq!(seq.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn remove_at_front_shifts_left() {
        let mut seq = seq_of(&[1, 2, 3]);
        assert_eq!(seq.remove_at(0), 1);
        assert_eq!(seq.as_slice(), &[2, 3]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn removing_only_element_keeps_capacity() {
        let mut seq = GrowableSequence::with_capacity(4).unwrap();
        seq.append('x').unwrap();
        seq.remove_at(0);
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 4);
    }

    #[test]
    fn index_equal_to_len_is_out_of_bounds() {
        let seq = seq_of(&[1, 2, 3]);
        assert_eq!(
            seq.try_get(3),
            Err(SeqError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn empty_sequence_reports_empty() {
        let mut seq = GrowableSequence::<i32>::with_capacity(2).unwrap();
        assert_eq!(seq.try_get(0), Err(SeqError::Empty { operation: "get" }));
        assert_eq!(
            seq.try_remove_at(0),
            Err(SeqError::Empty {
                operation: "remove_at"
            })
        );
        assert_eq!(seq.try_swap(0, 0), Err(SeqError::Empty { operation: "swap" }));
    }

    #[test]
    #[should_panic(expected = "get called on an empty sequence")]
    fn get_on_empty_panics() {
        let seq = GrowableSequence::<i32>::with_capacity(2).unwrap();
        seq.get(0);
    }

    #[test]
    #[should_panic(expected = "remove_at called on an empty sequence")]
    fn remove_at_on_empty_panics() {
        let mut seq = GrowableSequence::<i32>::with_capacity(2).unwrap();
        seq.remove_at(0);
    }

    #[test]
    #[should_panic(expected = "index 5 out of bounds for length 3")]
    fn index_operator_checks_bounds() {
        let seq = seq_of(&[1, 2, 3]);
        let _value = seq[5];
    }

    #[test]
    fn drain_empties_in_order_and_keeps_capacity() {
        let mut seq = seq_of(&[4, 5, 6]);
        let drained: Vec<_> = seq.drain().collect();
        assert_eq!(drained, vec![4, 5, 6]);
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 3);
    }

    #[test]
    fn clone_keeps_capacity() {
        let mut seq = GrowableSequence::with_capacity(8).unwrap();
        seq.append(1).unwrap();
        let copy = seq.clone();
        assert_eq!(copy.capacity(), 8);
        assert_eq!(copy, seq);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn len_counts_appends(
                cap in 1usize..16,
                values in proptest::collection::vec(any::<i32>(), 0..200),
            ) {
                let mut seq = GrowableSequence::with_capacity(cap).unwrap();
                for &v in &values {
                    seq.append(v).unwrap();
                }
                prop_assert_eq!(seq.len(), values.len());
                prop_assert_eq!(seq.as_slice(), values.as_slice());
            }

            #[test]
            fn capacity_is_smallest_doubling_that_fits(
                cap in 1usize..16,
                k in 0usize..300,
            ) {
                let mut seq = GrowableSequence::with_capacity(cap).unwrap();
                for i in 0..k {
                    seq.append(i).unwrap();
                }
                let mut expected = cap;
                while expected < k {
                    expected *= 2;
                }
                prop_assert_eq!(seq.capacity(), expected);
            }

            #[test]
            fn remove_at_deletes_exactly_one_index(
                values in proptest::collection::vec(any::<i16>(), 1..50),
                pick in any::<proptest::sample::Index>(),
            ) {
                let i = pick.index(values.len());
                let mut seq = GrowableSequence::with_capacity(values.len()).unwrap();
                for &v in &values {
                    seq.append(v).unwrap();
                }
                let removed = seq.remove_at(i);

                let mut expected = values.clone();
                let expected_removed = expected.remove(i);
                prop_assert_eq!(removed, expected_removed);
                prop_assert_eq!(seq.as_slice(), expected.as_slice());
                prop_assert_eq!(seq.capacity(), values.len());
            }

            #[test]
            fn swap_is_its_own_inverse(
                values in proptest::collection::vec(any::<u8>(), 1..50),
                a in any::<proptest::sample::Index>(),
                b in any::<proptest::sample::Index>(),
            ) {
                let (i, j) = (a.index(values.len()), b.index(values.len()));
                let mut seq = GrowableSequence::with_capacity(values.len()).unwrap();
                for &v in &values {
                    seq.append(v).unwrap();
                }
                seq.swap(i, j);
                seq.swap(i, j);
                prop_assert_eq!(seq.as_slice(), values.as_slice());
            }
        }
    }
}
