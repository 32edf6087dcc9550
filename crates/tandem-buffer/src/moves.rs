//! Reusable move-map scratch for permutation-reporting sorts.
//!
//! [`MoveMap`] owns the index array a sort reorders in place of the
//! entries themselves. After the sort, `order[i]` names the slot that
//! the entry now at `i` came from; [`MoveMap::permute`] then applies
//! that permutation to the key and data arrays. The backing allocation
//! grows to the buffer's capacity and is reused across sorts, so a
//! steady-state sort never touches the heap.

/// Scratch permutation shared by every sort on one buffer.
///
/// Contents outside the live range are meaningless between calls; every
/// sort starts from [`reset`](MoveMap::reset).
#[derive(Clone, Debug, Default)]
pub struct MoveMap {
    /// `order[i]` is the pre-sort slot of the entry at `i`.
    order: Vec<usize>,
    /// Cycle-walk markers for [`permute`](MoveMap::permute).
    visited: Vec<bool>,
}

impl MoveMap {
    /// Create an empty move map. Nothing is allocated until the first sort.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            visited: Vec::new(),
        }
    }

    /// Create a move map pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: vec![0; capacity],
            visited: vec![false; capacity],
        }
    }

    /// Grow to at least `capacity` slots and write the identity
    /// permutation over `0..count`.
    ///
    /// Returns the live prefix for the caller to reorder.
    ///
    /// # Panics
    ///
    /// Panics if `count > capacity`.
    pub fn reset(&mut self, capacity: usize, count: usize) -> &mut [usize] {
        assert!(count <= capacity, "count {count} exceeds capacity {capacity}");
        if self.order.len() < capacity {
            self.order.resize(capacity, 0);
            self.visited.resize(capacity, false);
        }
        let live = &mut self.order[..count];
        for (i, slot) in live.iter_mut().enumerate() {
            *slot = i;
        }
        live
    }

    /// Rearrange `keys` and `data` so that slot `i` receives what was at
    /// `order[i]`.
    ///
    /// Walks each permutation cycle once, moving one element per step,
    /// so both arrays are permuted in place with a single saved pair per
    /// cycle. `keys` and `data` must be the same length and no longer
    /// than the prefix last passed to [`reset`](MoveMap::reset).
    pub fn permute<K: Copy, D: Copy>(&mut self, keys: &mut [K], data: &mut [D]) {
        debug_assert_eq!(keys.len(), data.len());
        let count = keys.len();
        let order = &self.order[..count];
        let visited = &mut self.visited[..count];
        visited.fill(false);

        for start in 0..count {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            if order[start] == start {
                continue;
            }

            let saved_key = keys[start];
            let saved_data = data[start];
            let mut hole = start;
            loop {
                let src = order[hole];
                if src == start {
                    keys[hole] = saved_key;
                    data[hole] = saved_data;
                    break;
                }
                keys[hole] = keys[src];
                data[hole] = data[src];
                visited[src] = true;
                hole = src;
            }
        }
    }

    /// The live prefix of the most recent permutation.
    pub fn moves(&self, count: usize) -> &[usize] {
        &self.order[..count]
    }

    /// Number of slots the scratch currently holds.
    pub fn capacity(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_writes_identity_prefix() {
        let mut map = MoveMap::new();
        let live = map.reset(8, 5);
        assert_eq!(live, &[0, 1, 2, 3, 4]);
        assert_eq!(map.capacity(), 8);
    }

    #[test]
    fn reset_overwrites_previous_permutation() {
        let mut map = MoveMap::new();
        map.reset(4, 4).copy_from_slice(&[3, 2, 1, 0]);
        let live = map.reset(4, 3);
        assert_eq!(live, &[0, 1, 2]);
    }

    #[test]
    fn scratch_grows_but_never_shrinks() {
        let mut map = MoveMap::with_capacity(16);
        map.reset(4, 2);
        assert_eq!(map.capacity(), 16);
        map.reset(32, 2);
        assert_eq!(map.capacity(), 32);
    }

    #[test]
    fn permute_follows_order() {
        let mut map = MoveMap::new();
        map.reset(3, 3).copy_from_slice(&[1, 2, 0]);
        let mut keys = [30, 10, 20];
        let mut data = ['c', 'a', 'b'];
        map.permute(&mut keys, &mut data);
        assert_eq!(keys, [10, 20, 30]);
        assert_eq!(data, ['a', 'b', 'c']);
    }

    #[test]
    fn permute_handles_multiple_cycles() {
        let mut map = MoveMap::new();
        // Two 2-cycles and a fixed point.
        map.reset(5, 5).copy_from_slice(&[1, 0, 2, 4, 3]);
        let mut keys = [0, 1, 2, 3, 4];
        let mut data = [10, 11, 12, 13, 14];
        map.permute(&mut keys, &mut data);
        assert_eq!(keys, [1, 0, 2, 4, 3]);
        assert_eq!(data, [11, 10, 12, 14, 13]);
    }

    #[test]
    fn identity_permute_is_noop() {
        let mut map = MoveMap::new();
        map.reset(4, 4);
        let mut keys = [4, 3, 2, 1];
        let mut data = [1u8, 2, 3, 4];
        map.permute(&mut keys, &mut data);
        assert_eq!(keys, [4, 3, 2, 1]);
        assert_eq!(data, [1, 2, 3, 4]);
    }

    #[test]
    fn empty_permute() {
        let mut map = MoveMap::new();
        assert!(map.reset(0, 0).is_empty());
        let mut keys: [u32; 0] = [];
        let mut data: [u32; 0] = [];
        map.permute(&mut keys, &mut data);
        assert!(map.moves(0).is_empty());
    }
}
