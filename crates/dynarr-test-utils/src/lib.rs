//! Test utilities and mock resources for dynarr development.
//!
//! [`ReleaseLog`] hands out [`MockResource`]s that record, in a shared log,
//! when they are released through [`Release`] and when they are dropped
//! without ever being released.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::rc::Rc;

use dynarr_arena::Release;

#[derive(Default)]
struct Entries {
    released: Vec<u32>,
    leaked: Vec<u32>,
}

/// Shared record of what happened to every resource it created.
///
/// Cloning a log shares it; all clones see the same entries.
#[derive(Clone, Default)]
pub struct ReleaseLog {
    entries: Rc<RefCell<Entries>>,
}

impl ReleaseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resource that reports to this log.
    pub fn resource(&self, id: u32) -> MockResource {
        MockResource {
            id,
            released: false,
            log: self.clone(),
        }
    }

    /// Ids of released resources, in release order.
    pub fn released(&self) -> Vec<u32> {
        self.entries.borrow().released.clone()
    }

    /// Ids of resources dropped without being released, in drop order.
    pub fn leaked(&self) -> Vec<u32> {
        self.entries.borrow().leaked.clone()
    }
}

/// A resource standing in for an externally owned handle.
pub struct MockResource {
    id: u32,
    released: bool,
    log: ReleaseLog,
}

impl MockResource {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Release for MockResource {
    fn release(mut self) {
        self.released = true;
        self.log.entries.borrow_mut().released.push(self.id);
    }
}

impl Drop for MockResource {
    fn drop(&mut self) {
        if !self.released {
            self.log.entries.borrow_mut().leaked.push(self.id);
        }
    }
}
