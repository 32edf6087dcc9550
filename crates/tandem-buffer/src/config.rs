//! Buffer configuration parameters.

use tandem_core::BufferError;

/// Configuration for a [`MappedBuffer`](crate::MappedBuffer).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Number of slots allocated up front for keys and data.
    ///
    /// Default: 16. Zero is allowed; the first append then grows to
    /// `min_grow_capacity`.
    pub initial_capacity: usize,

    /// Smallest capacity a reallocation may produce.
    ///
    /// Growth targets `max(capacity * 2, min_grow_capacity)`, so this is
    /// what lets a zero-capacity buffer grow at all. Must be at least 1.
    ///
    /// Default: 1.
    pub min_grow_capacity: usize,
}

impl BufferConfig {
    /// Default initial capacity in slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Default growth floor.
    pub const DEFAULT_MIN_GROW_CAPACITY: usize = 1;

    /// Create a config with the given initial capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            min_grow_capacity: Self::DEFAULT_MIN_GROW_CAPACITY,
        }
    }

    /// Check the config for values that would break growth.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.min_grow_capacity == 0 {
            return Err(BufferError::InvalidConfig {
                reason: "min_grow_capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Capacity that a full buffer of `current` slots grows to.
    pub fn grown_capacity(&self, current: usize) -> usize {
        current.saturating_mul(2).max(self.min_grow_capacity)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
