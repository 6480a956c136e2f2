//! Test fixtures for cull development.
//!
//! Populated worlds from [`World::populate`] are indistinguishable apart
//! from their liveness flags, which makes reordering invisible. The
//! fixtures here stamp each entity with its original index instead, so
//! tests can check exactly which entities survived and in what order.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::BTreeMap;

use cull_core::{Entity, World};

/// Build an entity whose fields all encode `index`.
///
/// `position[0]` holds the index itself; the other fields hold distinct
/// derived values so that a strategy copying only some fields would be
/// caught by [`fingerprint`] comparisons.
pub fn tagged_entity(index: usize, alive: bool) -> Entity {
    let i = index as f32;
    Entity {
        position: [i, i + 0.25, -i],
        extent: [i * 2.0 + 1.0, i + 0.5],
        alive,
    }
}

/// Build a world whose entity `i` is [`tagged_entity(i, pattern[i])`](tagged_entity).
///
/// Capacity equals length.
pub fn world_from_pattern(pattern: &[bool]) -> World {
    World::from_entities(
        pattern
            .iter()
            .enumerate()
            .map(|(i, &alive)| tagged_entity(i, alive))
            .collect(),
    )
}

/// Original index of each entity in a world built by [`world_from_pattern`].
pub fn indices(world: &World) -> Vec<usize> {
    world
        .entities()
        .iter()
        .map(|e| e.position[0] as usize)
        .collect()
}

/// Bit-exact, totally ordered key of every field of an entity.
pub type Fingerprint = ([u32; 3], [u32; 2], bool);

/// The bit-exact field values of `entity`.
pub fn fingerprint(entity: &Entity) -> Fingerprint {
    (
        entity.position.map(f32::to_bits),
        entity.extent.map(f32::to_bits),
        entity.alive,
    )
}

/// Multiset of entity field values, as fingerprint → occurrence count.
pub type Multiset = BTreeMap<Fingerprint, usize>;

/// Multiset of every entity in `entities`.
pub fn multiset<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Multiset {
    let mut counts = Multiset::new();
    for e in entities {
        *counts.entry(fingerprint(e)).or_insert(0) += 1;
    }
    counts
}

/// Multiset of the live entities in `world`.
pub fn live_multiset(world: &World) -> Multiset {
    multiset(world.entities().iter().filter(|e| e.alive))
}

/// Fingerprints of the live entities in `world`, in storage order.
pub fn live_sequence(world: &World) -> Vec<Fingerprint> {
    world
        .entities()
        .iter()
        .filter(|e| e.alive)
        .map(fingerprint)
        .collect()
}

/// Fingerprints of every entity in `world`, in storage order.
pub fn sequence(world: &World) -> Vec<Fingerprint> {
    world.entities().iter().map(fingerprint).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_world_round_trips_indices() {
        let world = world_from_pattern(&[true, false, true]);
        assert_eq!(indices(&world), vec![0, 1, 2]);
        assert_eq!(world.capacity(), 3);
    }

    #[test]
    fn fingerprints_distinguish_tagged_entities() {
        let a = fingerprint(&tagged_entity(3, true));
        let b = fingerprint(&tagged_entity(4, true));
        assert_ne!(a, b);
    }

    #[test]
    fn multiset_counts_duplicates() {
        let e = Entity::new(true);
        let counts = multiset([e, e, e].iter());
        assert_eq!(counts.get(&fingerprint(&e)), Some(&3));
    }

    #[test]
    fn live_multiset_skips_dead() {
        let world = world_from_pattern(&[true, false, false]);
        assert_eq!(live_multiset(&world).len(), 1);
        assert_eq!(live_sequence(&world).len(), 1);
        assert_eq!(sequence(&world).len(), 3);
    }
}
