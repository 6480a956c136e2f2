//! The benchmark driver.
//!
//! For every registration and every sweep size the driver repeats one
//! sample cycle until the configured thresholds are met:
//!
//! ```text
//! Idle ──populate──▶ Populated ──start clock──▶ Measuring ──prune, stop clock──▶ Sampled
//!  ▲                                                                              │
//!  └──────────────────────────────── depopulate ──────────────────────────────────┘
//! ```
//!
//! Each cycle owns a brand new [`World`], so no strategy ever sees storage
//! left behind by an earlier sample or by another strategy.

use std::collections::HashSet;
use std::time::Duration;

use cull_core::{World, WorldError};
use cull_strategy::Registration;

use crate::clock::{Clock, MonotonicClock};
use crate::complexity::{self, MIN_SAMPLES};
use crate::config::DriverConfig;
use crate::error::BenchError;
use crate::report::{Measurement, Report, StrategyReport};
use crate::sweep::Sweep;

/// Where a [`SampleCycle`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No entities; ready to populate.
    Idle,
    /// Populated; ready to be measured.
    Populated,
    /// The strategy is running under the clock.
    Measuring,
    /// Pruned and timed; ready to depopulate.
    Sampled,
}

/// One populate → time → depopulate pass over a private world.
///
/// Calling a step out of order is a programming error and panics in
/// debug builds.
#[derive(Debug)]
pub struct SampleCycle {
    world: World,
    phase: Phase,
}

impl SampleCycle {
    /// A cycle over a fresh, empty world.
    pub fn new() -> Self {
        Self {
            world: World::new(),
            phase: Phase::Idle,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The world under measurement.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// `Idle → Populated`. On error the cycle stays `Idle`.
    pub fn populate(&mut self, size: usize, seed: u64) -> Result<(), WorldError> {
        debug_assert_eq!(self.phase, Phase::Idle, "populate outside Idle");
        self.world.populate(size, seed)?;
        self.phase = Phase::Populated;
        Ok(())
    }

    /// `Populated → Measuring → Sampled`. Times exactly one prune.
    pub fn measure<C: Clock + ?Sized>(&mut self, strategy: &Registration, clock: &C) -> Duration {
        debug_assert_eq!(self.phase, Phase::Populated, "measure before populate");
        self.phase = Phase::Measuring;
        let start = clock.now();
        strategy.prune(&mut self.world);
        let end = clock.now();
        self.phase = Phase::Sampled;
        end.saturating_sub(start)
    }

    /// `Sampled → Idle`. Releases all storage and returns the number of
    /// entities the strategy left behind.
    pub fn depopulate(&mut self) -> usize {
        debug_assert_eq!(self.phase, Phase::Sampled, "depopulate before measure");
        let survivors = self.world.len();
        self.world.depopulate();
        self.phase = Phase::Idle;
        survivors
    }
}

impl Default for SampleCycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives registered strategies across a [`Sweep`].
#[derive(Debug)]
pub struct Driver<C = MonotonicClock> {
    config: DriverConfig,
    sizes: Vec<usize>,
    clock: C,
}

impl Driver<MonotonicClock> {
    /// A driver timing with [`MonotonicClock`].
    pub fn new(config: DriverConfig, sweep: Sweep) -> Result<Self, BenchError> {
        Self::with_clock(config, sweep, MonotonicClock::new())
    }
}

impl<C: Clock> Driver<C> {
    /// A driver timing with `clock`. Validates `config` and `sweep`;
    /// a rejection surfaces as [`BenchError::Config`].
    pub fn with_clock(config: DriverConfig, sweep: Sweep, clock: C) -> Result<Self, BenchError> {
        config.validate()?;
        let sizes = sweep.sizes()?;
        Ok(Self {
            config,
            sizes,
            clock,
        })
    }

    /// The configuration in force.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The ascending sizes every strategy is measured at.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Measure every registration at every size, then fit complexity
    /// curves if configured.
    ///
    /// Strategies run one after another in registration order, each over
    /// the full sweep in ascending size.
    pub fn run(&self, registrations: &[Registration]) -> Result<Report, BenchError> {
        if registrations.is_empty() {
            return Err(BenchError::NoStrategies);
        }
        let mut seen = HashSet::new();
        for reg in registrations {
            if !seen.insert(reg.name()) {
                return Err(BenchError::DuplicateStrategy {
                    name: reg.name().to_string(),
                });
            }
        }

        let mut report = Report::default();
        for reg in registrations {
            tracing::info!(
                strategy = reg.name(),
                sizes = self.sizes.len(),
                "measuring strategy"
            );
            let measurements = self
                .sizes
                .iter()
                .map(|&size| self.measure(reg, size))
                .collect::<Result<Vec<_>, _>>()?;
            let mut strategy_report = StrategyReport {
                measurements,
                complexity: None,
            };
            if self.config.fit_complexity && self.sizes.len() >= MIN_SAMPLES {
                let fit = complexity::fit(&strategy_report.series()).map_err(|source| {
                    BenchError::Fit {
                        strategy: reg.name().to_string(),
                        source,
                    }
                })?;
                tracing::info!(strategy = reg.name(), fit = %fit, "complexity");
                strategy_report.complexity = Some(fit);
            }
            report.insert(reg.name().to_string(), strategy_report);
        }
        Ok(report)
    }

    /// Sample one strategy at one size until the thresholds are met.
    pub fn measure(&self, strategy: &Registration, size: usize) -> Result<Measurement, BenchError> {
        let mut iterations = 0u64;
        let mut total = Duration::ZERO;
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;
        let mut survivors;

        loop {
            let mut cycle = SampleCycle::new();
            cycle
                .populate(size, self.config.seed)
                .map_err(|source| BenchError::Populate {
                    strategy: strategy.name().to_string(),
                    size,
                    source,
                })?;
            let elapsed = cycle.measure(strategy, &self.clock);
            survivors = cycle.depopulate();

            iterations += 1;
            total = total.saturating_add(elapsed);
            min = min.min(elapsed);
            max = max.max(elapsed);

            if iterations >= self.config.min_iterations && total >= self.config.min_duration {
                break;
            }
            if iterations >= self.config.max_iterations {
                tracing::warn!(
                    strategy = strategy.name(),
                    size,
                    iterations,
                    total_ns = total.as_nanos() as u64,
                    "iteration cap reached before min_duration"
                );
                break;
            }
        }

        let mean = mean(total, iterations);
        tracing::debug!(
            strategy = strategy.name(),
            size,
            iterations,
            mean_ns = mean.as_nanos() as u64,
            survivors,
            "measured"
        );
        Ok(Measurement {
            strategy: strategy.name().to_string(),
            size,
            iterations,
            total,
            mean,
            min,
            max,
            survivors,
        })
    }
}

fn mean(total: Duration, iterations: u64) -> Duration {
    let nanos = total.as_nanos() / u128::from(iterations.max(1));
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
