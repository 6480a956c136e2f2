//! Single-pass compaction followed by one bulk truncation.
//!
//! Both strategies gather survivors at the front in their original order,
//! drop the dead tail with a single [`Vec::truncate`] and then hand the
//! freed tail back to the allocator. They differ
//! in how the front is built: [`remove_erase`] overwrites slots with copies
//! (the dead values are lost), while [`partition_erase`] swaps, so the dead
//! entities still exist after the partition phase until the erase phase
//! drops them.

use cull_core::World;

/// Pairwise compaction of live entities to the front, then truncate.
///
/// A write cursor trails the read cursor; each live entity is copied down
/// to the write cursor unless the two coincide.
///
/// This is the loop [`Vec::retain`] runs internally, spelled out so the
/// compaction and the truncation are separate, visible phases.
pub fn remove_erase(world: &mut World) {
    let entities = world.entities_mut();
    let mut write = 0;
    for read in 0..entities.len() {
        if entities[read].alive {
            if read != write {
                entities[write] = entities[read];
            }
            write += 1;
        }
    }
    entities.truncate(write);
    entities.shrink_to_fit();
}

/// Stable partition of live entities before dead ones, then truncate.
///
/// The partition point found by the first phase becomes the new length.
pub fn partition_erase(world: &mut World) {
    let entities = world.entities_mut();
    let split = stable_partition(entities, |e| e.alive);
    entities.truncate(split);
    entities.shrink_to_fit();
}

/// Move every element matching `pred` before every element that does not,
/// keeping the matching elements in their original relative order.
///
/// Returns the index of the first non-matching element. Non-matching
/// elements end up after the split in unspecified order.
fn stable_partition<T, F>(items: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut split = 0;
    for i in 0..items.len() {
        if pred(&items[i]) {
            items.swap(split, i);
            split += 1;
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use cull_test_utils::{indices, world_from_pattern};

    const ALTERNATING: [bool; 6] = [true, false, true, false, true, false];

    #[test]
    fn remove_erase_keeps_survivor_order() {
        let mut world = world_from_pattern(&ALTERNATING);
        remove_erase(&mut world);
        assert_eq!(indices(&world), vec![0, 2, 4]);
    }

    #[test]
    fn partition_erase_keeps_survivor_order() {
        let mut world = world_from_pattern(&ALTERNATING);
        partition_erase(&mut world);
        assert_eq!(indices(&world), vec![0, 2, 4]);
    }

    #[test]
    fn truncation_releases_dead_tail() {
        for prune in [remove_erase as fn(&mut World), partition_erase] {
            let mut world = world_from_pattern(&ALTERNATING);
            prune(&mut world);
            assert_eq!(world.len(), 3);
            assert_eq!(world.capacity(), world.len());
        }
    }

    #[test]
    fn all_dead_truncation_frees_storage() {
        for prune in [remove_erase as fn(&mut World), partition_erase] {
            let mut world = world_from_pattern(&[false; 1000]);
            prune(&mut world);
            assert_eq!(world.len(), 0);
            assert_eq!(world.capacity(), 0);
        }
    }

    #[test]
    fn remove_erase_matches_retain() {
        let pattern = [false, true, true, false, false, true, false, true];
        let mut world = world_from_pattern(&pattern);
        let mut expected = world.entities().to_vec();
        expected.retain(|e| e.alive);
        remove_erase(&mut world);
        assert_eq!(world.entities(), expected.as_slice());
    }

    #[test]
    fn stable_partition_places_rejects_after_split() {
        let mut items = vec![1, 2, 3, 4, 5, 6, 7];
        let split = stable_partition(&mut items, |v| v % 2 == 1);
        assert_eq!(split, 4);
        assert_eq!(&items[..split], &[1, 3, 5, 7]);
        let mut rest = items[split..].to_vec();
        rest.sort_unstable();
        assert_eq!(rest, vec![2, 4, 6]);
    }

    #[test]
    fn stable_partition_of_empty_slice() {
        let mut items: Vec<u8> = Vec::new();
        assert_eq!(stable_partition(&mut items, |_| true), 0);
    }
}
