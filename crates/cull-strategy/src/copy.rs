//! Copy-select strategies.
//!
//! Survivors are copied into a fresh vector that replaces the old one.
//! The new vector is reserved at the *original* length: the survivor
//! count is unknown until filtering finishes, and counting first would
//! cost a second pass. That over-allocation is the trade-off these two
//! variants measure. The result is shrunk to fit before it is swapped in.

use cull_core::{Entity, World};

/// Manual loop pushing each live entity into the new vector.
pub fn copy_for(world: &mut World) {
    let entities = world.entities_mut();
    let mut survivors: Vec<Entity> = Vec::with_capacity(entities.len());
    for entity in entities.iter() {
        if entity.alive {
            survivors.push(*entity);
        }
    }
    survivors.shrink_to_fit();
    *entities = survivors;
}

/// Iterator `filter` extended into the new vector.
pub fn copy_if(world: &mut World) {
    let entities = world.entities_mut();
    let mut survivors: Vec<Entity> = Vec::with_capacity(entities.len());
    survivors.extend(entities.iter().filter(|e| e.alive).copied());
    survivors.shrink_to_fit();
    *entities = survivors;
}
