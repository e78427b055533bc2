//! Typed keys into a [`ResourceArena`](crate::ResourceArena).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Insertion index of a tracked resource.
///
/// Keys are typed by the resource they refer to, so a key from an arena of
/// shaders cannot be used against an arena of buffers. No bounds are placed
/// on `R` for the key to be `Copy`, `Eq`, or `Hash`.
pub struct ResourceKey<R> {
    index: u32,
    _phantom: PhantomData<fn() -> R>,
}

impl<R> ResourceKey<R> {
    pub(crate) fn new(index: u32) -> Self {
        Self {
            index,
            _phantom: PhantomData,
        }
    }

    /// Position of the resource in tracking order.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl<R> Clone for ResourceKey<R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceKey<R> {}

impl<R> PartialEq for ResourceKey<R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<R> Eq for ResourceKey<R> {}

impl<R> Hash for ResourceKey<R> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<R> fmt::Debug for ResourceKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceKey")
            .field("index", &self.index)
            .finish()
    }
}
