//! Entity → slot lookup.

use indexmap::IndexMap;
use tandem_core::EntityId;

/// Maps each entity with a live entry to its slot in the dense buffer.
///
/// Removal uses `swap_remove` on the map, so lookup maintenance stays
/// O(1) like the buffer's own swap removal.
#[derive(Clone, Debug, Default)]
pub struct EntityIndex {
    slots: IndexMap<EntityId, usize>,
    /// Largest capacity announced by the buffer this index shadows.
    reserved: usize,
}

impl EntityIndex {
    /// Create an index with room for `capacity` entities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: IndexMap::with_capacity(capacity),
            reserved: capacity,
        }
    }

    /// Slot of `entity`, if it has an entry.
    pub fn get(&self, entity: EntityId) -> Option<usize> {
        self.slots.get(&entity).copied()
    }

    /// Whether `entity` has an entry.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.slots.contains_key(&entity)
    }

    /// Record `entity` at `slot`, returning the slot it previously held.
    pub fn insert(&mut self, entity: EntityId, slot: usize) -> Option<usize> {
        self.slots.insert(entity, slot)
    }

    /// Forget `entity`, returning the slot it held.
    pub fn remove(&mut self, entity: EntityId) -> Option<usize> {
        self.slots.swap_remove(&entity)
    }

    /// Re-point an entity that the buffer moved to `slot`.
    pub fn relocate(&mut self, entity: EntityId, slot: usize) {
        let existing = self.slots.get_mut(&entity);
        debug_assert!(existing.is_some(), "relocating entity {entity} with no entry");
        if let Some(existing) = existing {
            *existing = slot;
        }
    }

    /// Make room for `capacity` entities.
    ///
    /// Called from the buffer's growth notification so the lookup never
    /// rehashes on the insert that follows a reallocation.
    pub fn reserve_to(&mut self, capacity: usize) {
        let additional = capacity.saturating_sub(self.slots.len());
        self.slots.reserve(additional);
        self.reserved = self.reserved.max(capacity);
    }

    /// Largest capacity passed to [`reserve_to`](EntityIndex::reserve_to)
    /// or construction.
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    /// Allocated capacity of the underlying map.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of entities with an entry.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no entity has an entry.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
