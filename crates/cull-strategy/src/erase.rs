//! Erase-in-place strategies.
//!
//! Each dead entity is removed with [`Vec::remove`], which shifts the
//! whole tail left by one slot. Survivors keep their relative order, but
//! the cost is O(n·d) for `n` entities and `d` dead ones. Walking from
//! the back shortens the tail each erase has to shift.

use cull_core::World;

/// Forward walk, erasing each dead entity as it is encountered.
///
/// The cursor only advances past live entities; after an erase the next
/// candidate has already slid into the current slot.
pub fn erase_forward(world: &mut World) {
    let entities = world.entities_mut();
    let mut i = 0;
    while i < entities.len() {
        if entities[i].alive {
            i += 1;
        } else {
            entities.remove(i);
        }
    }
}

/// Backward walk over a reversed index range, erasing dead entities.
///
/// Erasing slot `i` only moves slots above `i`, all of which have
/// already been visited, so the remaining range stays valid.
pub fn erase_reverse(world: &mut World) {
    let entities = world.entities_mut();
    for i in (0..entities.len()).rev() {
        if !entities[i].alive {
            entities.remove(i);
        }
    }
}

/// Backward walk with an explicit decrementing index.
///
/// Same visit order and erase action as [`erase_reverse`]; exists to
/// show that the iterator adaptor costs nothing over a hand-written index.
pub fn erase_reverse_index(world: &mut World) {
    let entities = world.entities_mut();
    let mut cursor = entities.len();
    while let Some(i) = cursor.checked_sub(1) {
        if !entities[i].alive {
            entities.remove(i);
        }
        cursor = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cull_test_utils::{indices, world_from_pattern};

    const PATTERN: [bool; 7] = [false, true, false, false, true, true, false];

    #[test]
    fn forward_keeps_survivor_order() {
        let mut world = world_from_pattern(&PATTERN);
        erase_forward(&mut world);
        assert_eq!(indices(&world), vec![1, 4, 5]);
    }

    #[test]
    fn reverse_keeps_survivor_order() {
        let mut world = world_from_pattern(&PATTERN);
        erase_reverse(&mut world);
        assert_eq!(indices(&world), vec![1, 4, 5]);
    }

    #[test]
    fn reverse_index_keeps_survivor_order() {
        let mut world = world_from_pattern(&PATTERN);
        erase_reverse_index(&mut world);
        assert_eq!(indices(&world), vec![1, 4, 5]);
    }

    #[test]
    fn consecutive_dead_run_is_fully_removed() {
        let mut world = world_from_pattern(&[true, false, false, false, true]);
        erase_forward(&mut world);
        assert_eq!(indices(&world), vec![0, 4]);
    }

    #[test]
    fn erase_keeps_capacity() {
        let mut world = world_from_pattern(&PATTERN);
        let capacity = world.capacity();
        erase_reverse(&mut world);
        assert_eq!(world.capacity(), capacity);
    }
}
