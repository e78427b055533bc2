//! A growable, contiguous, owning sequence.
//!
//! [`GrowableSequence`] is a dynamic array with amortized doubling append,
//! positional removal that compacts the tail, and two views layered on the
//! same storage:
//!
//! - **Stack:** [`push`](GrowableSequence::push),
//!   [`top`](GrowableSequence::top), [`pop`](GrowableSequence::pop).
//! - **Bag:** [`contains`](GrowableSequence::contains) and
//!   [`remove_value`](GrowableSequence::remove_value) (first match only).
//!
//! # Contract violations vs. errors
//!
//! Out-of-range indices and operations on an empty sequence are programmer
//! errors. The plain methods panic on them (see each `# Panics` section);
//! every such method has a `try_` sibling that returns [`SeqError`] instead.
//!
//! Allocation failure is not a programmer error and is always reported as
//! [`SeqError::AllocationFailed`], never as a panic.
//!
//! ```
//! use dynarr::GrowableSequence;
//!
//! let mut seq = GrowableSequence::with_capacity(2)?;
//! seq.append(10)?;
//! seq.append(20)?;
//! seq.append(30)?;
//! assert_eq!(seq.capacity(), 4);
//! assert_eq!(seq.get(2), &30);
//! # Ok::<(), dynarr::SeqError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bag;
pub mod config;
pub mod error;
pub mod sequence;
pub mod stack;

pub use config::SequenceConfig;
pub use error::SeqError;
pub use sequence::GrowableSequence;
