//! Entity-keyed component store.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::rc::Rc;

use tandem_buffer::{BufferConfig, MappedBuffer};
use tandem_core::{
    BufferError, EntityId, GrowthCallback, KeyedStore, MappedStorage, ObserverId, StoreError,
};

use crate::index::EntityIndex;

/// Dense storage of one component type, keyed by entity.
///
/// Components live contiguously in a [`MappedBuffer`] for cache-friendly
/// iteration. Each entity has at most one entry; the store rejects
/// duplicates before they reach the buffer.
///
/// The [`EntityIndex`] is shared with a growth observer registered on
/// the buffer, which reserves lookup capacity whenever the buffer
/// reallocates. The store is single-threaded.
pub struct ComponentStore<D> {
    buffer: MappedBuffer<EntityId, D>,
    index: Rc<RefCell<EntityIndex>>,
    index_observer: ObserverId,
}

impl<D: Copy> ComponentStore<D> {
    /// Create a store with room for `initial_capacity` components.
    pub fn new(initial_capacity: usize) -> Self {
        Self::from_buffer(MappedBuffer::new(initial_capacity))
    }

    /// Create a store whose buffer uses `config`.
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        Ok(Self::from_buffer(MappedBuffer::with_config(config)?))
    }

    fn from_buffer(mut buffer: MappedBuffer<EntityId, D>) -> Self {
        let index = Rc::new(RefCell::new(EntityIndex::with_capacity(buffer.capacity())));
        let shadow = Rc::clone(&index);
        let index_observer = buffer.subscribe_growth(Box::new(move |capacity| {
            shadow.borrow_mut().reserve_to(capacity);
        }));
        Self {
            buffer,
            index,
            index_observer,
        }
    }

    /// Attach `component` to `entity` and return its slot.
    pub fn insert(&mut self, entity: EntityId, component: D) -> Result<usize, StoreError> {
        let present = self.index.borrow().contains(entity);
        if present {
            return Err(StoreError::DuplicateEntity { entity });
        }
        let slot = self.buffer.append(entity, component);
        self.index.borrow_mut().insert(entity, slot);
        Ok(slot)
    }

    /// Detach and return the component of `entity`.
    ///
    /// The last component moves into the vacated slot and its entity is
    /// re-pointed; every other slot is unchanged.
    pub fn remove(&mut self, entity: EntityId) -> Result<D, StoreError> {
        let slot = self
            .index_of(entity)
            .ok_or(StoreError::UnknownEntity { entity })?;
        let component = *self.buffer.data_at(slot);
        let (moved, last_slot) = self.buffer.remove_by_index(slot);

        let mut index = self.index.borrow_mut();
        index.remove(entity);
        if last_slot != slot {
            index.relocate(moved, slot);
        }
        Ok(component)
    }

    /// Slot currently holding the component of `entity`.
    pub fn index_of(&self, entity: EntityId) -> Option<usize> {
        self.index.borrow().get(entity)
    }

    /// Whether `entity` has a component in this store.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.index.borrow().contains(entity)
    }

    /// Component of `entity`.
    pub fn get(&self, entity: EntityId) -> Option<&D> {
        let slot = self.index_of(entity)?;
        Some(self.buffer.data_at(slot))
    }

    /// Mutable component of `entity`.
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut D> {
        let slot = self.index_of(entity)?;
        Some(self.buffer.data_at_mut(slot))
    }

    /// Number of stored components.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Slot capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Capacity reserved in the entity lookup.
    pub fn lookup_capacity(&self) -> usize {
        self.index.borrow().reserved()
    }

    /// Entities in slot order.
    pub fn entities(&self) -> &[EntityId] {
        self.buffer.keys()
    }

    /// Components in slot order.
    pub fn components(&self) -> &[D] {
        self.buffer.data()
    }

    /// Components in slot order, mutable.
    pub fn components_mut(&mut self) -> &mut [D] {
        self.buffer.data_mut()
    }

    /// Iterate over `(entity, &component)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &D)> + '_ {
        self.buffer.iter()
    }

    /// The underlying buffer, read-only.
    pub fn buffer(&self) -> &MappedBuffer<EntityId, D> {
        &self.buffer
    }

    /// Reorder components by entity ID.
    ///
    /// Returns the number of entries whose slot changed.
    pub fn sort_by_entity(&mut self) -> usize {
        self.buffer.sort_keys_and_get_moves();
        self.relocate_sorted()
    }

    /// Reorder components by a custom entity ordering.
    ///
    /// Returns the number of entries whose slot changed.
    pub fn sort_by_entity_with<F>(&mut self, compare: F) -> usize
    where
        F: FnMut(&EntityId, &EntityId) -> Ordering,
    {
        self.buffer.sort_keys_by_and_get_moves(compare);
        self.relocate_sorted()
    }

    /// Reorder components by a custom component ordering.
    ///
    /// Returns the number of entries whose slot changed.
    pub fn sort_by_component_with<F>(&mut self, compare: F) -> usize
    where
        F: FnMut(&D, &D) -> Ordering,
    {
        self.buffer.sort_data_by_and_get_moves(compare);
        self.relocate_sorted()
    }

    /// Walk the last move map and re-point only the entries that moved.
    fn relocate_sorted(&mut self) -> usize {
        let mut index = self.index.borrow_mut();
        let mut moved = 0;
        let moves = self.buffer.last_moves();
        for (slot, (&from, &entity)) in moves.iter().zip(self.buffer.keys()).enumerate() {
            if from != slot {
                index.relocate(entity, slot);
                moved += 1;
            }
        }
        tracing::trace!(moved, len = moves.len(), "component store re-pointed after sort");
        moved
    }
}

impl<D: Copy + Ord> ComponentStore<D> {
    /// Reorder components by their natural order.
    ///
    /// Returns the number of entries whose slot changed.
    pub fn sort_by_component(&mut self) -> usize {
        self.buffer.sort_data_and_get_moves();
        self.relocate_sorted()
    }
}

impl<D: Copy> Default for ComponentStore<D> {
    fn default() -> Self {
        Self::from_buffer(MappedBuffer::default())
    }
}

impl<D: Copy + fmt::Debug> KeyedStore for ComponentStore<D> {
    type Key = EntityId;
    type Error = StoreError;

    fn update_key_for_entry(
        &mut self,
        old_key: EntityId,
        new_key: EntityId,
    ) -> Result<(), StoreError> {
        let slot = self
            .index_of(old_key)
            .ok_or(StoreError::UnknownEntity { entity: old_key })?;
        if old_key == new_key {
            return Ok(());
        }
        if self.contains(new_key) {
            return Err(StoreError::DuplicateEntity { entity: new_key });
        }

        self.buffer.update_entry_key(slot, new_key);
        let mut index = self.index.borrow_mut();
        index.remove(old_key);
        index.insert(new_key, slot);
        Ok(())
    }

    fn debug_string(&self, detailed: bool) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "ComponentStore<{}> count={} capacity={}",
            std::any::type_name::<D>(),
            self.buffer.len(),
            self.buffer.capacity()
        );
        if detailed {
            for (slot, (entity, component)) in self.buffer.iter().enumerate() {
                let _ = write!(out, "\n  [{slot}] entity {entity} => {component:?}");
            }
        }
        out
    }
}

impl<D: Copy> MappedStorage for ComponentStore<D> {
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn subscribe_growth(&mut self, callback: GrowthCallback) -> ObserverId {
        self.buffer.subscribe_growth(callback)
    }

    /// The store's own lookup observer cannot be removed through this.
    fn unsubscribe_growth(&mut self, id: ObserverId) -> bool {
        if id == self.index_observer {
            return false;
        }
        self.buffer.unsubscribe_growth(id)
    }
}

impl<D> fmt::Debug for ComponentStore<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentStore")
            .field("buffer", &self.buffer)
            .field("lookup", &self.index.borrow().len())
            .finish()
    }
}
