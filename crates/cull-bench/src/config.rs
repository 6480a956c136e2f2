//! Driver configuration, validation, and error types.
//!
//! Every threshold is fixed for the whole run. [`DriverConfig::validate`]
//! and [`Sweep::validate`](crate::Sweep::validate) run before the first
//! sample is taken, so a bad configuration never produces a partial report.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use cull_core::DEFAULT_SEED;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`DriverConfig`] or a
/// [`Sweep`](crate::Sweep).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Sweep starts at zero entities.
    ZeroStart,
    /// Sweep `start` exceeds `end`.
    EmptyRange {
        /// Configured first size.
        start: usize,
        /// Configured last size.
        end: usize,
    },
    /// Sweep `end` exceeds the largest world that can be populated.
    EndTooLarge {
        /// Configured last size.
        end: usize,
        /// Largest representable world.
        max: usize,
    },
    /// Dense sweep would visit more sizes than a run accepts.
    TooManySizes {
        /// Number of sizes the sweep would produce.
        count: usize,
        /// Largest accepted number of sizes.
        max: usize,
    },
    /// Dense sweep step is zero.
    ZeroStep,
    /// Multiplicative sweep factor below 2.
    InvalidMultiplier {
        /// The configured factor.
        multiplier: usize,
    },
    /// `min_iterations` is zero.
    ZeroMinIterations,
    /// `max_iterations` is below `min_iterations`.
    IterationBounds {
        /// Configured minimum.
        min: u64,
        /// Configured maximum.
        max: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStart => write!(f, "sweep must start at one entity or more"),
            Self::EmptyRange { start, end } => {
                write!(f, "sweep start {start} exceeds end {end}")
            }
            Self::EndTooLarge { end, max } => {
                write!(f, "sweep end {end} exceeds the largest world ({max} entities)")
            }
            Self::TooManySizes { count, max } => {
                write!(f, "sweep visits {count} sizes, at most {max} allowed")
            }
            Self::ZeroStep => write!(f, "dense sweep step must be at least 1"),
            Self::InvalidMultiplier { multiplier } => {
                write!(f, "sweep multiplier must be at least 2, got {multiplier}")
            }
            Self::ZeroMinIterations => write!(f, "min_iterations must be at least 1"),
            Self::IterationBounds { min, max } => {
                write!(f, "max_iterations {max} is below min_iterations {min}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── DriverConfig ───────────────────────────────────────────────────

/// Sampling thresholds for the benchmark driver.
///
/// A (strategy, size) pair is sampled until at least `min_iterations`
/// samples have been taken *and* their summed time reaches
/// `min_duration`, or until `max_iterations` samples have been taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Seed for every population. Default: 1.
    pub seed: u64,
    /// Minimum samples per pair. Default: 1.
    pub min_iterations: u64,
    /// Hard cap on samples per pair. Default: 1 000 000.
    pub max_iterations: u64,
    /// Minimum summed strategy time per pair. Default: 500 ms.
    pub min_duration: Duration,
    /// Fit a complexity model to each strategy's series. Default: true.
    pub fit_complexity: bool,
}

impl DriverConfig {
    /// Default minimum summed strategy time per pair.
    pub const DEFAULT_MIN_DURATION: Duration = Duration::from_millis(500);

    /// Default sample cap per pair.
    pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

    /// A configuration taking exactly `n` samples per pair, regardless
    /// of elapsed time. Useful for smoke runs and tests.
    pub fn fixed_iterations(n: u64) -> Self {
        Self {
            min_iterations: n,
            max_iterations: n,
            min_duration: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Validate the iteration bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_iterations == 0 {
            return Err(ConfigError::ZeroMinIterations);
        }
        if self.max_iterations < self.min_iterations {
            return Err(ConfigError::IterationBounds {
                min: self.min_iterations,
                max: self.max_iterations,
            });
        }
        Ok(())
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            min_iterations: 1,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            min_duration: Self::DEFAULT_MIN_DURATION,
            fit_complexity: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = DriverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, 1);
        assert_eq!(config.min_duration, Duration::from_millis(500));
    }

    #[test]
    fn fixed_iterations_pins_both_bounds() {
        let config = DriverConfig::fixed_iterations(3);
        assert_eq!(config.min_iterations, 3);
        assert_eq!(config.max_iterations, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_min_iterations_rejected() {
        let config = DriverConfig {
            min_iterations: 0,
            ..DriverConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinIterations));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let config = DriverConfig {
            min_iterations: 10,
            max_iterations: 5,
            ..DriverConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::IterationBounds { min: 10, max: 5 })
        );
    }
}
