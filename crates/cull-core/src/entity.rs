//! The fixed-size record stored in a [`World`](crate::World).

/// One simulated entity.
///
/// The position and extent fields carry no behavior. They exist so that
/// an `Entity` has the size and copy cost of a realistic game record
/// (24 bytes with padding), which is part of what the removal
/// benchmarks measure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    /// World-space position `(x, y, z)`.
    pub position: [f32; 3],
    /// Bounding extent `(w, h)`.
    pub extent: [f32; 2],
    /// Liveness flag. Dead entities are removed by every strategy.
    pub alive: bool,
}

impl Entity {
    /// Position given to freshly populated entities.
    pub const ORIGIN: [f32; 3] = [0.0, 0.0, 0.0];

    /// Extent given to freshly populated entities.
    pub const UNIT_EXTENT: [f32; 2] = [1.0, 1.0];

    /// Create an entity at the origin with unit extent.
    pub fn new(alive: bool) -> Self {
        Self {
            position: Self::ORIGIN,
            extent: Self::UNIT_EXTENT,
            alive,
        }
    }

    /// Whether the entity survives pruning.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_has_reference_layout_values() {
        let e = Entity::new(false);
        assert_eq!(e.position, [0.0, 0.0, 0.0]);
        assert_eq!(e.extent, [1.0, 1.0]);
        assert!(!e.is_alive());
    }

    #[test]
    fn entity_is_a_realistic_record_size() {
        // Five f32 fields plus a bool, padded to f32 alignment.
        assert_eq!(std::mem::size_of::<Entity>(), 24);
    }
}
