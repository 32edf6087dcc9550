//! Growth observer registry.
//!
//! [`GrowthObservers`] holds the callbacks a buffer fires after it
//! reallocates. Most buffers have one or two observers (the owning
//! store's lookup and perhaps a side table), so the list lives inline.

use std::fmt;

use smallvec::SmallVec;
use tandem_core::{GrowthCallback, ObserverId};

/// Ordered set of growth callbacks.
///
/// Notification order is registration order. Removing an observer keeps
/// the relative order of the remaining ones.
pub struct GrowthObservers {
    entries: SmallVec<[(ObserverId, GrowthCallback); 2]>,
    next_id: u32,
}

impl GrowthObservers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Register a callback and return its handle.
    pub fn subscribe(&mut self, callback: GrowthCallback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, callback));
        id
    }

    /// Remove the callback registered under `id`.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Invoke every callback with `new_capacity`.
    ///
    /// A panicking callback propagates out of this call; callbacks after
    /// it are not run.
    pub fn notify(&mut self, new_capacity: usize) {
        for (_, callback) in self.entries.iter_mut() {
            callback(new_capacity);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GrowthObservers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GrowthObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}
