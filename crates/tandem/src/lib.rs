//! Tandem: dense, index-mapped key/data storage for entity-component systems.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tandem sub-crates. For most users, adding `tandem` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tandem::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Velocity(f32, f32);
//!
//! let mut store: ComponentStore<Velocity> = ComponentStore::new(4);
//! store.insert(EntityId(30), Velocity(1.0, 0.0)).unwrap();
//! store.insert(EntityId(10), Velocity(0.0, 1.0)).unwrap();
//! store.insert(EntityId(20), Velocity(1.0, 1.0)).unwrap();
//!
//! // Swap removal: entity 20 moves into the vacated slot 0.
//! store.remove(EntityId(30)).unwrap();
//! assert_eq!(store.index_of(EntityId(20)), Some(0));
//!
//! // Sorting patches the entity lookup from the move map.
//! store.sort_by_entity();
//! assert_eq!(store.entities(), &[EntityId(10), EntityId(20)]);
//! assert_eq!(store.get(EntityId(20)), Some(&Velocity(1.0, 1.0)));
//! ```
//!
//! The bare buffer reports moves directly:
//!
//! ```rust
//! use tandem::prelude::*;
//!
//! let mut buf: MappedBuffer<u32, char> = MappedBuffer::new(4);
//! buf.append(30, 'c');
//! buf.append(10, 'a');
//! buf.append(20, 'b');
//! assert_eq!(buf.sort_keys_and_get_moves(), &[1, 2, 0]);
//! assert_eq!(buf.data(), &['a', 'b', 'c']);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tandem-core` | IDs, error types, core traits |
//! | [`buffer`] | `tandem-buffer` | `MappedBuffer`, config, growth observers, move map |
//! | [`store`] | `tandem-store` | Entity-keyed `ComponentStore` and its lookup |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`tandem-core`).
///
/// Contains [`types::EntityId`], the error enums, and the capability traits
/// [`types::MappedStorage`] and [`types::KeyedStore`].
pub use tandem_core as types;

/// The dense key/data buffer (`tandem-buffer`).
pub use tandem_buffer as buffer;

/// Entity-keyed component stores (`tandem-store`).
pub use tandem_store as store;

/// Common imports for typical Tandem usage.
///
/// ```rust
/// use tandem::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tandem_core::{EntityId, GrowthCallback, KeyedStore, MappedStorage, ObserverId};

    // Errors
    pub use tandem_core::{BufferError, StoreError};

    // Buffer
    pub use tandem_buffer::{BufferConfig, MappedBuffer};

    // Store
    pub use tandem_store::ComponentStore;
}
