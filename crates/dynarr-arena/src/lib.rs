//! Scope-owned resource registry built on [`GrowableSequence`].
//!
//! Setup code often creates a batch of resources (GPU object names, file
//! handles) that all live until a single teardown point. [`ResourceArena`]
//! owns them, hands back typed [`ResourceKey`]s, and releases every tracked
//! resource exactly once, in insertion order, either through
//! [`ResourceArena::release_all`] or when the arena is dropped.
//!
//! Resources are typed: an arena holds one `R: Release`, never a bag of
//! untyped pointers.
//!
//! [`GrowableSequence`]: dynarr::GrowableSequence

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod key;

pub use arena::{Release, ResourceArena};
pub use key::ResourceKey;
