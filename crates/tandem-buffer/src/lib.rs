//! Dense, index-mapped key/data storage.
//!
//! [`MappedBuffer`] keeps two contiguous arrays in lockstep: slot `i`
//! of the data array always belongs to slot `i` of the key array.
//!
//! # Architecture
//!
//! ```text
//! MappedBuffer<K, D>
//! ├── keys: Vec<K>        (live prefix, len == count)
//! ├── data: Vec<D>        (live prefix, len == count)
//! ├── capacity            (shared, doubles on demand, never shrinks)
//! ├── GrowthObservers     (notified synchronously on reallocation)
//! └── MoveMap             (sort scratch, reused across calls)
//! ```
//!
//! # Index stability
//!
//! Removal is O(1) by moving the last entry into the vacated slot, and
//! sorting reorders the live range. Neither keeps indices stable; both
//! report exactly what moved so an external key→index lookup can be
//! patched instead of rebuilt.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod moves;
pub mod observer;

// Public re-exports for the primary API surface.
pub use buffer::MappedBuffer;
pub use config::BufferConfig;
pub use moves::MoveMap;
pub use observer::GrowthObservers;
