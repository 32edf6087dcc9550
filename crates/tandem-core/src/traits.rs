//! Capability traits shared by dense buffers and the stores built on them.

use crate::id::ObserverId;

/// Callback invoked with the new capacity after a buffer reallocates.
///
/// Callbacks run synchronously inside the append that triggered growth,
/// before the new entry is written. A callback must not append to the
/// buffer that is notifying it. With plain `&mut` access this cannot
/// compile; through shared interior mutability it panics on the nested
/// borrow.
pub type GrowthCallback = Box<dyn FnMut(usize)>;

/// Capacity and growth surface of a dense, index-mapped storage.
///
/// External structures that keep per-slot parallel arrays subscribe to
/// growth so they can resize in lockstep with the storage they shadow.
pub trait MappedStorage {
    /// Number of live entries.
    fn len(&self) -> usize;

    /// Whether the storage holds no live entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Physical capacity of the backing arrays, in elements.
    fn capacity(&self) -> usize;

    /// Register a growth observer.
    ///
    /// Observers are notified in registration order.
    fn subscribe_growth(&mut self, callback: GrowthCallback) -> ObserverId;

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if the handle is unknown or was already removed.
    fn unsubscribe_growth(&mut self, id: ObserverId) -> bool;
}

/// A store that maps keys to slots of a dense buffer.
///
/// The dense buffer itself has no key→index lookup, so rekeying and
/// diagnostics are supplied by the concrete store. Key uniqueness is also
/// the implementor's responsibility: the underlying buffer accepts
/// duplicate keys.
pub trait KeyedStore {
    /// Key type stored alongside each entry.
    type Key: Copy;

    /// Error returned when a rekey cannot be applied.
    type Error: std::error::Error;

    /// Replace `old_key` with `new_key` for the entry currently keyed by
    /// `old_key`, leaving its slot index and data untouched.
    fn update_key_for_entry(
        &mut self,
        old_key: Self::Key,
        new_key: Self::Key,
    ) -> Result<(), Self::Error>;

    /// Human-readable dump of the store's contents.
    ///
    /// `detailed` adds one line per live slot. Must not mutate state.
    fn debug_string(&self, detailed: bool) -> String;
}
