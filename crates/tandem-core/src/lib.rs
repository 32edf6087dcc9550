//! Core types and traits for the Tandem dense storage primitives.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: entity and
//! observer identifiers, error types, and the capability traits that
//! concrete stores implement on top of a `MappedBuffer`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{BufferError, StoreError};
pub use id::{EntityId, ObserverId};
pub use traits::{GrowthCallback, KeyedStore, MappedStorage};
