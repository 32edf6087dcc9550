//! The dense key/data buffer.
//!
//! [`MappedBuffer`] stores component-style records next to the keys that
//! own them. It has no key→index lookup of its own: every operation that
//! reorders entries reports what moved so the owning store can patch its
//! lookup in O(moved) instead of rebuilding it.

use std::cmp::Ordering;
use std::fmt;

use tandem_core::{BufferError, GrowthCallback, MappedStorage, ObserverId};

use crate::config::BufferConfig;
use crate::moves::MoveMap;
use crate::observer::GrowthObservers;

/// Two parallel arrays of keys and data kept in lockstep.
///
/// # Invariants
///
/// - For every live slot `i < len()`, `key_at(i)` is the key that was
///   appended together with `data_at(i)`. Removal and sorting move the
///   pair as a unit.
/// - Keys and data share one capacity, reported by [`capacity`].
/// - Capacity never decreases. It doubles (or jumps to the configured
///   floor) only when an append finds the buffer full.
///
/// # Index stability
///
/// Indices are not stable across [`remove_by_index`] or any sort. Callers
/// that cache indices must apply the returned move information.
///
/// # Key uniqueness
///
/// The buffer does not check for duplicate keys. A store that needs
/// unique keys enforces that in its own lookup before appending.
///
/// [`capacity`]: MappedBuffer::capacity
/// [`remove_by_index`]: MappedBuffer::remove_by_index
pub struct MappedBuffer<K, D> {
    /// Live keys; `keys.len()` is the entry count.
    keys: Vec<K>,
    /// Live data, same length as `keys`.
    data: Vec<D>,
    /// Logical capacity shared by `keys` and `data`.
    capacity: usize,
    config: BufferConfig,
    observers: GrowthObservers,
    moves: MoveMap,
    /// Live length covered by the most recent sort; zero once the
    /// buffer has been appended to or removed from since.
    sorted_len: usize,
}

impl<K: Copy, D: Copy> MappedBuffer<K, D> {
    /// Create a buffer with `initial_capacity` slots and default growth.
    ///
    /// A zero capacity is valid: the first append grows to
    /// [`BufferConfig::DEFAULT_MIN_GROW_CAPACITY`].
    pub fn new(initial_capacity: usize) -> Self {
        Self::from_valid_config(BufferConfig::new(initial_capacity))
    }

    /// Create a buffer from an explicit configuration.
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BufferConfig) -> Self {
        let capacity = config.initial_capacity;
        Self {
            keys: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
            capacity,
            config,
            observers: GrowthObservers::new(),
            moves: MoveMap::new(),
            sorted_len: 0,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the buffer holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of slots allocated for keys and data.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The configuration this buffer was built with.
    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Append an entry and return its slot index.
    ///
    /// If the buffer is full, both arrays are reallocated first and every
    /// growth observer is notified with the new capacity before the entry
    /// is written.
    pub fn append(&mut self, key: K, data: D) -> usize {
        let index = self.keys.len();
        if index >= self.capacity {
            self.grow();
        }
        self.sorted_len = 0;
        self.keys.push(key);
        self.data.push(data);
        index
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = self.config.grown_capacity(old_capacity);
        let live = self.keys.len();
        self.keys.reserve_exact(new_capacity - live);
        self.data.reserve_exact(new_capacity - live);
        self.capacity = new_capacity;
        tracing::debug!(
            old_capacity,
            new_capacity,
            observers = self.observers.len(),
            "mapped buffer grew"
        );
        self.observers.notify(new_capacity);
    }

    /// Remove the entry at `index` by moving the last entry into its slot.
    ///
    /// Returns the key that now occupies `index` together with the slot it
    /// came from, `(replacing_key, last_index)`. When `index` was the last
    /// slot, `replacing_key` is the removed key itself and nothing moved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_by_index(&mut self, index: usize) -> (K, usize) {
        let last_index = self.keys.len() - 1;
        let last_key = self.keys[last_index];
        self.keys.swap_remove(index);
        self.data.swap_remove(index);
        self.sorted_len = 0;
        (last_key, last_index)
    }

    /// Checked variant of [`remove_by_index`](MappedBuffer::remove_by_index).
    pub fn try_remove_by_index(&mut self, index: usize) -> Result<(K, usize), BufferError> {
        self.check_index(index)?;
        Ok(self.remove_by_index(index))
    }

    /// Key stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn key_at(&self, index: usize) -> K {
        self.keys[index]
    }

    /// Data stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn data_at(&self, index: usize) -> &D {
        &self.data[index]
    }

    /// Mutable data stored at `index`, for in-place updates.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn data_at_mut(&mut self, index: usize) -> &mut D {
        &mut self.data[index]
    }

    /// Key and data at `index`, if it is live.
    pub fn get(&self, index: usize) -> Option<(K, &D)> {
        let key = *self.keys.get(index)?;
        Some((key, &self.data[index]))
    }

    /// Key and mutable data at `index`, if it is live.
    pub fn get_mut(&mut self, index: usize) -> Option<(K, &mut D)> {
        let key = *self.keys.get(index)?;
        Some((key, &mut self.data[index]))
    }

    /// Overwrite the key at `index` without touching its data.
    ///
    /// Intended for stores that rekey an entry in place; the store is
    /// responsible for updating its own lookup.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn update_entry_key(&mut self, index: usize, key: K) {
        self.keys[index] = key;
    }

    /// Live keys in slot order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Live data in slot order.
    pub fn data(&self) -> &[D] {
        &self.data
    }

    /// Live data in slot order, mutable.
    pub fn data_mut(&mut self) -> &mut [D] {
        &mut self.data
    }

    /// Iterate over `(key, &data)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &D)> + '_ {
        self.keys.iter().copied().zip(self.data.iter())
    }

    /// Sort the live range by key using a custom ordering.
    ///
    /// Data moves with its key. Returns the move map for the live range:
    /// after the call, the entry at slot `i` was at slot `moves[i]`
    /// before it. Equal keys keep their relative order.
    pub fn sort_keys_by_and_get_moves<F>(&mut self, mut compare: F) -> &[usize]
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        let count = self.keys.len();
        let keys = &self.keys;
        let order = self.moves.reset(self.capacity, count);
        order.sort_unstable_by(|&a, &b| compare(&keys[a], &keys[b]).then(a.cmp(&b)));
        self.moves.permute(&mut self.keys, &mut self.data);
        self.sorted_len = count;
        tracing::trace!(count, "sorted mapped buffer by key");
        self.moves.moves(count)
    }

    /// Sort the live range by data using a custom ordering.
    ///
    /// Keys move with their data. Returns the move map as for
    /// [`sort_keys_by_and_get_moves`](MappedBuffer::sort_keys_by_and_get_moves).
    pub fn sort_data_by_and_get_moves<F>(&mut self, mut compare: F) -> &[usize]
    where
        F: FnMut(&D, &D) -> Ordering,
    {
        let count = self.data.len();
        let data = &self.data;
        let order = self.moves.reset(self.capacity, count);
        order.sort_unstable_by(|&a, &b| compare(&data[a], &data[b]).then(a.cmp(&b)));
        self.moves.permute(&mut self.keys, &mut self.data);
        self.sorted_len = count;
        tracing::trace!(count, "sorted mapped buffer by data");
        self.moves.moves(count)
    }

    /// Move map of the most recent sort, borrowed immutably.
    ///
    /// Lets a store read the moves alongside [`keys`](MappedBuffer::keys)
    /// after sorting. Empty once an append or removal has happened since
    /// that sort, because the recorded slots no longer describe the
    /// live range.
    pub fn last_moves(&self) -> &[usize] {
        self.moves.moves(self.sorted_len)
    }

    /// Register a growth observer. See [`MappedStorage::subscribe_growth`].
    pub fn subscribe_growth(&mut self, callback: GrowthCallback) -> ObserverId {
        self.observers.subscribe(callback)
    }

    /// Remove a growth observer. See [`MappedStorage::unsubscribe_growth`].
    pub fn unsubscribe_growth(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn check_index(&self, index: usize) -> Result<(), BufferError> {
        let len = self.keys.len();
        if index >= len {
            return Err(BufferError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }
}

impl<K: Copy + Ord, D: Copy> MappedBuffer<K, D> {
    /// Sort the live range by the natural order of the keys.
    pub fn sort_keys_and_get_moves(&mut self) -> &[usize] {
        self.sort_keys_by_and_get_moves(K::cmp)
    }
}

impl<K: Copy, D: Copy + Ord> MappedBuffer<K, D> {
    /// Sort the live range by the natural order of the data.
    pub fn sort_data_and_get_moves(&mut self) -> &[usize] {
        self.sort_data_by_and_get_moves(D::cmp)
    }
}

impl<K: Copy, D: Copy> Default for MappedBuffer<K, D> {
    fn default() -> Self {
        Self::from_valid_config(BufferConfig::default())
    }
}

impl<K: Copy, D: Copy> MappedStorage for MappedBuffer<K, D> {
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn subscribe_growth(&mut self, callback: GrowthCallback) -> ObserverId {
        self.observers.subscribe(callback)
    }

    fn unsubscribe_growth(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl<K, D> fmt::Debug for MappedBuffer<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedBuffer")
            .field("len", &self.keys.len())
            .field("capacity", &self.capacity)
            .field("observers", &self.observers.len())
            .finish()
    }
}
