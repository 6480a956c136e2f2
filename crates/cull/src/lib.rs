//! Cull: measuring how to remove dead entities from a contiguous world.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the cull sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use cull::prelude::*;
//!
//! // Prune one populated world with each strategy.
//! for strategy in Strategy::ALL {
//!     let mut world = World::new();
//!     world.populate(1_000, DEFAULT_SEED).unwrap();
//!     let alive = world.alive_count();
//!     strategy.prune(&mut world);
//!     assert_eq!(world.len(), alive);
//! }
//!
//! // Time every strategy over a tiny sweep.
//! let sweep = Sweep::Dense { start: 100, end: 300, step: 100 };
//! let driver = Driver::new(DriverConfig::fixed_iterations(1), sweep).unwrap();
//! let report = driver.run(&registry()).unwrap();
//! assert_eq!(report.len(), 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cull-core` | `Entity`, `World`, population errors |
//! | [`strategy`] | `cull-strategy` | The eight removal strategies and their registrations |
//! | [`bench`] | `cull-bench` | Sweep driver, complexity fitting, reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Entity records and the world that owns them (`cull-core`).
pub use cull_core as types;

/// Removal strategies (`cull-strategy`).
///
/// [`strategy::Strategy`] tags each algorithm; [`strategy::registry`]
/// returns harness registrations for all of them.
pub use cull_strategy as strategy;

/// Benchmark driver and complexity estimation (`cull-bench`).
pub use cull_bench as bench;

/// Common imports for running removal benchmarks.
pub mod prelude {
    pub use cull_bench::{
        BenchError, Complexity, ComplexityFit, Driver, DriverConfig, Measurement, Report, Sweep,
    };
    pub use cull_core::{Entity, World, WorldError, DEFAULT_SEED};
    pub use cull_strategy::{registry, Registration, Strategy};
}
