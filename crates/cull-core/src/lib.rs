//! Core types for the cull removal benchmarks.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the record being pruned ([`Entity`]), the contiguous collection that
//! owns them ([`World`]), and the population error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod entity;
pub mod error;
pub mod world;

pub use entity::Entity;
pub use error::WorldError;
pub use world::{liveness, World, DEFAULT_SEED, LIVENESS_PROBABILITY};
