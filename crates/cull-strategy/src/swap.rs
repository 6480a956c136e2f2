//! Swap-and-pop removal.

use cull_core::World;

/// Overwrite each dead entity with the current last entity, then pop.
///
/// The cursor does not advance after a removal because the entity moved
/// into slot `i` has not been inspected yet. Every entity is touched at
/// most once, so this is O(n) with no extra allocation, but survivors
/// from the back end up in the holes at the front: relative order is
/// **not** preserved.
pub fn swap_pop(world: &mut World) {
    let entities = world.entities_mut();
    let mut i = 0;
    while i < entities.len() {
        if entities[i].alive {
            i += 1;
        } else {
            entities.swap_remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cull_test_utils::{indices, world_from_pattern};

    #[test]
    fn alternating_pattern_fills_holes_from_the_back() {
        // [T,F,T,F,T,F]: slot 1 takes 5 (dead), then 4; slot 3 is last and popped.
        let mut world = world_from_pattern(&[true, false, true, false, true, false]);
        swap_pop(&mut world);
        assert_eq!(indices(&world), vec![0, 4, 2]);
    }

    #[test]
    fn leading_dead_entity_reorders_survivors() {
        let mut world = world_from_pattern(&[false, true, true]);
        swap_pop(&mut world);
        assert_eq!(indices(&world), vec![2, 1]);
    }

    #[test]
    fn hole_filled_by_last_entity_keeps_order_by_coincidence() {
        let mut world = world_from_pattern(&[true, false, true]);
        swap_pop(&mut world);
        assert_eq!(indices(&world), vec![0, 2]);
    }

    #[test]
    fn trailing_dead_entities_are_popped() {
        let mut world = world_from_pattern(&[true, true, false, false]);
        swap_pop(&mut world);
        assert_eq!(indices(&world), vec![0, 1]);
    }
}
