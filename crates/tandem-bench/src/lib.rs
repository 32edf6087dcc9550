//! Benchmark workloads for the Tandem dense storage primitives.
//!
//! Provides deterministic, seed-driven populations for benchmarks:
//!
//! - [`shuffled_entities`]: a permutation of `0..n` as entity IDs
//! - [`populated_buffer`]: a `MappedBuffer` filled in shuffled key order
//! - [`populated_store`]: a `ComponentStore` filled the same way

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tandem_buffer::MappedBuffer;
use tandem_core::EntityId;
use tandem_store::ComponentStore;

/// A component sized like a typical transform: 16 bytes, `Copy`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
}

impl Transform {
    fn seeded(n: u32) -> Self {
        let f = n as f32;
        Self {
            x: f,
            y: -f,
            rotation: f * 0.5,
            scale: 1.0,
        }
    }
}

/// Entity IDs `0..n` in a seed-determined order (Fisher–Yates).
pub fn shuffled_entities(n: u32, seed: u64) -> Vec<EntityId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ids: Vec<EntityId> = (0..n).map(EntityId).collect();
    for i in (1..ids.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        ids.swap(i, j);
    }
    ids
}

/// A buffer holding `n` transforms keyed by shuffled entity IDs.
pub fn populated_buffer(n: u32, seed: u64) -> MappedBuffer<EntityId, Transform> {
    let mut buffer = MappedBuffer::new(n as usize);
    for entity in shuffled_entities(n, seed) {
        buffer.append(entity, Transform::seeded(entity.0));
    }
    buffer
}

/// A store holding `n` transforms for shuffled entity IDs.
pub fn populated_store(n: u32, seed: u64) -> ComponentStore<Transform> {
    let mut store = ComponentStore::new(n as usize);
    for entity in shuffled_entities(n, seed) {
        // IDs from `shuffled_entities` are unique.
        let _ = store.insert(entity, Transform::seeded(entity.0));
    }
    store
}
