//! The resource arena and the [`Release`] trait.

use dynarr::{GrowableSequence, SeqError, SequenceConfig};

use crate::key::ResourceKey;

/// A resource that must be released explicitly rather than just dropped.
///
/// Typical implementors wrap a handle owned by an external API, where
/// release means calling that API's delete function.
pub trait Release {
    /// Release the underlying resource. Called exactly once per tracked
    /// resource.
    fn release(self);
}

/// Owns a set of resources and releases them together at teardown.
///
/// Resources are tracked in insertion order and released in the same
/// order. Teardown happens either explicitly through
/// [`release_all`](Self::release_all) or implicitly on drop; either way each
/// resource is released exactly once.
pub struct ResourceArena<R: Release> {
    tracked: GrowableSequence<R>,
}

impl<R: Release> ResourceArena<R> {
    /// Create an empty arena with the default initial capacity.
    pub fn new() -> Result<Self, SeqError> {
        Self::with_config(&SequenceConfig::default())
    }

    /// Create an empty arena sized by `config`.
    pub fn with_config(config: &SequenceConfig) -> Result<Self, SeqError> {
        Ok(Self {
            tracked: GrowableSequence::from_config(config)?,
        })
    }

    /// Take ownership of `resource` until teardown.
    ///
    /// On error the resource is dropped without being released.
    pub fn track(&mut self, resource: R) -> Result<ResourceKey<R>, SeqError> {
        let index = u32::try_from(self.tracked.len()).map_err(|_| SeqError::CapacityOverflow {
            current: self.tracked.capacity(),
        })?;
        self.tracked.append(resource)?;
        Ok(ResourceKey::new(index))
    }

    /// Borrow a tracked resource.
    pub fn get(&self, key: ResourceKey<R>) -> Option<&R> {
        self.tracked.try_get(key.index()).ok()
    }

    /// Number of tracked resources.
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Iterate over tracked resources in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKey<R>, &R)> {
        self.tracked
            .iter()
            .enumerate()
            .map(|(index, resource)| (ResourceKey::new(index as u32), resource))
    }

    /// Release every tracked resource in insertion order and return how
    /// many were released.
    pub fn release_all(mut self) -> usize {
        self.release_tracked()
    }

    fn release_tracked(&mut self) -> usize {
        let mut released = 0;
        for resource in self.tracked.drain() {
            resource.release();
            released += 1;
        }
        if released > 0 {
            log::debug!("released {released} tracked resources");
        }
        released
    }
}

impl<R: Release> Drop for ResourceArena<R> {
    fn drop(&mut self) {
        self.release_tracked();
    }
}
