//! The contiguous entity collection pruned by every removal strategy.
//!
//! A [`World`] goes through the same lifecycle for every benchmark
//! sample: created empty, [`populate`](World::populate)d with a seeded
//! liveness pattern, pruned once, then [`depopulate`](World::depopulate)d
//! so the next sample starts from a zero-capacity baseline.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::entity::Entity;
use crate::error::WorldError;

/// Seed used by the benchmark harness unless configured otherwise.
pub const DEFAULT_SEED: u64 = 1;

/// Probability that a freshly populated entity is alive (a fair coin).
pub const LIVENESS_PROBABILITY: f64 = 0.5;

/// An owned, contiguous, growable sequence of entities.
///
/// Live and dead entities coexist until a removal strategy runs.
/// Capacity may exceed length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    entities: Vec<Entity>,
}

impl World {
    /// Largest number of entities a single world can hold.
    pub const MAX_ENTITIES: usize = isize::MAX as usize / std::mem::size_of::<Entity>();

    /// Create an empty world with no allocated storage.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Wrap an existing entity vector, keeping its capacity.
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Fill the world with `count` fresh entities whose liveness is drawn
    /// from a `ChaCha8Rng` seeded with `seed`.
    ///
    /// The same `(count, seed)` always yields the same liveness sequence,
    /// so every strategy measured at a given size sees identical input.
    /// Storage for exactly `count` entities is reserved before filling.
    pub fn populate(&mut self, count: usize, seed: u64) -> Result<(), WorldError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.populate_with(count, &mut rng)
    }

    /// Like [`populate`](Self::populate), drawing liveness from `rng`.
    ///
    /// Each entity consumes one Bernoulli([`LIVENESS_PROBABILITY`]) draw.
    pub fn populate_with<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), WorldError> {
        if !self.entities.is_empty() {
            return Err(WorldError::AlreadyPopulated {
                len: self.entities.len(),
            });
        }
        if count > Self::MAX_ENTITIES {
            return Err(WorldError::CountOverflow {
                requested: count,
                max: Self::MAX_ENTITIES,
            });
        }
        self.entities
            .try_reserve_exact(count)
            .map_err(|e| WorldError::allocation(count, e))?;
        self.entities.extend(
            (0..count).map(|_| Entity::new(rng.random_bool(LIVENESS_PROBABILITY))),
        );
        Ok(())
    }

    /// Release all storage. Length and capacity are both zero afterwards.
    pub fn depopulate(&mut self) {
        self.entities = Vec::new();
    }

    /// Number of entities, live or dead.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities the backing storage can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entities.capacity()
    }

    /// Number of live entities.
    pub fn alive_count(&self) -> usize {
        self.entities.iter().filter(|e| e.alive).count()
    }

    /// Borrow the entities.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutably borrow the backing vector. Removal strategies operate on this.
    pub fn entities_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.entities
    }

    /// Consume the world, returning the backing vector.
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}

/// The liveness sequence [`World::populate`] produces for `(count, seed)`.
pub fn liveness(count: usize, seed: u64) -> Vec<bool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random_bool(LIVENESS_PROBABILITY))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_world_has_no_storage() {
        let world = World::new();
        assert!(world.is_empty());
        assert_eq!(world.capacity(), 0);
    }

    #[test]
    fn populate_reserves_exactly() {
        let mut world = World::new();
        world.populate(1000, DEFAULT_SEED).unwrap();
        assert_eq!(world.len(), 1000);
        assert_eq!(world.capacity(), 1000);
    }

    #[test]
    fn populate_zero_is_empty() {
        let mut world = World::new();
        world.populate(0, DEFAULT_SEED).unwrap();
        assert!(world.is_empty());
    }

    #[test]
    fn populate_fills_reference_values() {
        let mut world = World::new();
        world.populate(64, DEFAULT_SEED).unwrap();
        for e in world.entities() {
            assert_eq!(e.position, Entity::ORIGIN);
            assert_eq!(e.extent, Entity::UNIT_EXTENT);
        }
    }

    #[test]
    fn populate_is_roughly_fair() {
        let mut world = World::new();
        world.populate(10_000, DEFAULT_SEED).unwrap();
        let alive = world.alive_count();
        assert!(
            (4_500..=5_500).contains(&alive),
            "expected about half alive, got {alive}"
        );
    }

    #[test]
    fn populate_matches_liveness() {
        let mut world = World::new();
        world.populate(257, 9).unwrap();
        let flags: Vec<bool> = world.entities().iter().map(|e| e.alive).collect();
        assert_eq!(flags, liveness(257, 9));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(liveness(256, 1), liveness(256, 2));
    }

    #[test]
    fn populate_rejects_non_empty_world() {
        let mut world = World::new();
        world.populate(4, DEFAULT_SEED).unwrap();
        assert_eq!(
            world.populate(4, DEFAULT_SEED),
            Err(WorldError::AlreadyPopulated { len: 4 })
        );
    }

    #[test]
    fn populate_rejects_unrepresentable_count() {
        let mut world = World::new();
        let err = world.populate(usize::MAX, DEFAULT_SEED).unwrap_err();
        assert_eq!(
            err,
            WorldError::CountOverflow {
                requested: usize::MAX,
                max: World::MAX_ENTITIES,
            }
        );
        assert!(world.is_empty());
    }

    #[test]
    fn depopulate_releases_storage() {
        let mut world = World::new();
        world.populate(500, DEFAULT_SEED).unwrap();
        world.depopulate();
        assert_eq!(world.len(), 0);
        assert_eq!(world.capacity(), 0);

        // Repopulation starts from a clean baseline.
        world.populate(10, DEFAULT_SEED).unwrap();
        assert_eq!(world.capacity(), 10);
    }

    proptest! {
        #[test]
        fn populate_is_deterministic(count in 0usize..2_000, seed in any::<u64>()) {
            let mut a = World::new();
            let mut b = World::new();
            a.populate(count, seed).unwrap();
            b.populate(count, seed).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn shorter_population_is_a_prefix(count in 1usize..1_000, cut in 0usize..1_000) {
            let cut = cut % count;
            let long = liveness(count, DEFAULT_SEED);
            let short = liveness(cut, DEFAULT_SEED);
            prop_assert_eq!(&long[..cut], &short[..]);
        }
    }
}
