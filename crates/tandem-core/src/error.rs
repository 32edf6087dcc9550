//! Error types for the Tandem storage primitives.
//!
//! Organized by subsystem: the dense buffer itself and the keyed stores
//! built on top of it. The buffer's hot-path accessors panic on invalid
//! indices; these errors are returned only by the checked counterparts.

use std::error::Error;
use std::fmt;

use crate::id::EntityId;

/// Errors from checked `MappedBuffer` operations and configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// An index outside the live range `0..len` was supplied.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live entries at the time of the call.
        len: usize,
    },
    /// A `BufferConfig` failed validation.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for {len} live entries")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid buffer config: {reason}"),
        }
    }
}

impl Error for BufferError {}

/// Errors from entity-keyed component stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The entity has no entry in the store.
    UnknownEntity {
        /// The entity that was looked up.
        entity: EntityId,
    },
    /// The entity already has an entry; keys must be unique per store.
    DuplicateEntity {
        /// The entity that was already present.
        entity: EntityId,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEntity { entity } => write!(f, "entity {entity} not found in store"),
            Self::DuplicateEntity { entity } => {
                write!(f, "entity {entity} already has an entry in store")
            }
        }
    }
}

impl Error for StoreError {}
