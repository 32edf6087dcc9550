//! Entity-keyed component stores built on [`MappedBuffer`].
//!
//! [`ComponentStore`] pairs a dense buffer with an [`EntityIndex`] that
//! maps each entity to its slot. The index subscribes to the buffer's
//! growth notifications and is patched from the move information that
//! removals and sorts report, so it is never rebuilt from scratch.
//!
//! [`MappedBuffer`]: tandem_buffer::MappedBuffer

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod index;
pub mod store;

pub use index::EntityIndex;
pub use store::ComponentStore;
