//! Sweep driver and complexity estimation for the cull removal benchmarks.
//!
//! - [`Sweep`]: the ascending sizes every strategy is measured at
//! - [`Driver`]: repeats populate → prune → depopulate cycles per
//!   (strategy, size) until [`DriverConfig`] thresholds are met
//! - [`complexity`]: least-squares growth-curve fitting over the results
//! - [`Report`]: measurements and fits in registration order
//!
//! The criterion bench target (`benches/removal.rs`) drives the same
//! strategies through criterion's own sampling for comparison.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod complexity;
pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod sweep;

pub use clock::{Clock, MonotonicClock};
pub use complexity::{fit, fit_model, Complexity, ComplexityFit, FitError};
pub use config::{ConfigError, DriverConfig};
pub use driver::{Driver, Phase, SampleCycle};
pub use error::BenchError;
pub use report::{Measurement, Report, StrategyReport};
pub use sweep::Sweep;
