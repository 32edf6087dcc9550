//! End-to-end scenarios for `MappedBuffer`: growth, swap removal, and
//! permutation-reporting sorts driven through the public API only.

use tandem_buffer::{BufferConfig, MappedBuffer};
use tandem_core::{EntityId, MappedStorage};
use tandem_test_utils::{entities, GrowthRecorder, Health, Position};

#[test]
fn growth_from_four_to_eight_notifies_once() {
    let mut buf: MappedBuffer<u32, Health> = MappedBuffer::new(4);
    let recorder = GrowthRecorder::new();
    buf.subscribe_growth(recorder.callback());

    for key in [10, 20, 30, 40] {
        buf.append(key, Health(key));
    }
    assert_eq!(recorder.count(), 0);
    assert_eq!(buf.capacity(), 4);

    buf.append(50, Health(50));
    assert_eq!(recorder.capacities(), vec![8]);
    assert_eq!(buf.capacity(), 8);
    assert_eq!(buf.keys(), &[10, 20, 30, 40, 50]);
}

#[test]
fn every_observer_is_notified_in_order() {
    let mut buf: MappedBuffer<u32, Health> = MappedBuffer::new(1);
    let first = GrowthRecorder::new();
    let second = GrowthRecorder::new();
    buf.subscribe_growth(first.callback());
    buf.subscribe_growth(second.callback());

    for key in 0..9 {
        buf.append(key, Health(0));
    }
    assert_eq!(first.capacities(), vec![2, 4, 8, 16]);
    assert_eq!(second.capacities(), first.capacities());
}

#[test]
fn removal_scenario_returns_replacing_key() {
    let mut buf: MappedBuffer<char, u8> = MappedBuffer::new(4);
    for (i, key) in ['A', 'B', 'C', 'D'].into_iter().enumerate() {
        buf.append(key, i as u8);
    }

    let (replacing, last) = buf.remove_by_index(1);
    assert_eq!((replacing, last), ('D', 3));
    assert_eq!(buf.keys(), &['A', 'D', 'C']);
    assert_eq!(buf.data(), &[0, 3, 2]);
    assert_eq!(buf.len(), 3);
}

#[test]
fn sort_scenario_reports_origin_slots() {
    let mut buf: MappedBuffer<u32, Position> = MappedBuffer::new(4);
    buf.append(30, Position::new(3, 0));
    buf.append(10, Position::new(1, 0));
    buf.append(20, Position::new(2, 0));

    let moves = buf.sort_keys_and_get_moves().to_vec();
    assert_eq!(moves, vec![1, 2, 0]);
    assert_eq!(buf.keys(), &[10, 20, 30]);
    assert_eq!(
        buf.data(),
        &[Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
    );
}

#[test]
fn move_map_lets_external_lookup_be_patched() {
    // A caller-owned entity → slot table kept in sync purely from what
    // the buffer reports.
    let ids = entities([42, 7, 19, 3, 25]);
    let mut buf: MappedBuffer<EntityId, Health> = MappedBuffer::new(2);
    let mut lookup = std::collections::HashMap::new();
    for (n, &entity) in ids.iter().enumerate() {
        let slot = buf.append(entity, Health(n as u32));
        lookup.insert(entity, slot);
    }

    let removed_slot = lookup.remove(&EntityId(7)).unwrap();
    let (moved, last) = buf.remove_by_index(removed_slot);
    if last != removed_slot {
        lookup.insert(moved, removed_slot);
    }

    let moves = buf.sort_keys_and_get_moves().to_vec();
    for (slot, &from) in moves.iter().enumerate() {
        if from != slot {
            lookup.insert(buf.key_at(slot), slot);
        }
    }

    assert_eq!(buf.len(), 4);
    for (slot, &entity) in buf.keys().iter().enumerate() {
        assert_eq!(lookup[&entity], slot);
    }
    assert_eq!(buf.keys(), entities([3, 19, 25, 42]).as_slice());
}

#[test]
fn sort_scratch_is_reused_across_calls() {
    let mut buf: MappedBuffer<u32, u32> = MappedBuffer::new(8);
    for key in [5, 1, 4, 2, 3] {
        buf.append(key, key);
    }
    buf.sort_keys_by_and_get_moves(|a, b| b.cmp(a));
    assert_eq!(buf.keys(), &[5, 4, 3, 2, 1]);

    // Second sort starts from identity, not from the previous permutation.
    let moves = buf.sort_keys_and_get_moves().to_vec();
    assert_eq!(moves, vec![4, 3, 2, 1, 0]);
    assert_eq!(buf.keys(), &[1, 2, 3, 4, 5]);
    assert_eq!(buf.data(), &[1, 2, 3, 4, 5]);
}

#[test]
fn zero_capacity_buffer_with_custom_floor() {
    let config = BufferConfig {
        initial_capacity: 0,
        min_grow_capacity: 8,
    };
    let mut buf: MappedBuffer<u32, u32> = MappedBuffer::with_config(config).unwrap();
    let recorder = GrowthRecorder::new();
    buf.subscribe_growth(recorder.callback());

    for key in 0..9 {
        buf.append(key, key);
    }
    assert_eq!(recorder.capacities(), vec![8, 16]);
}

#[test]
fn storage_trait_reports_shape() {
    fn shape(storage: &dyn MappedStorage) -> (usize, usize, bool) {
        (storage.len(), storage.capacity(), storage.is_empty())
    }

    let mut buf: MappedBuffer<u32, u32> = MappedBuffer::new(4);
    assert_eq!(shape(&buf), (0, 4, true));
    buf.append(1, 1);
    assert_eq!(shape(&buf), (1, 4, false));
}
