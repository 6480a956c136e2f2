//! Per-(strategy, size) measurements and the report they roll up into.

use std::time::Duration;

use indexmap::IndexMap;

use crate::complexity::ComplexityFit;

/// Timing summary for one strategy at one size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Registered strategy name.
    pub strategy: String,
    /// Number of entities populated before each sample.
    pub size: usize,
    /// Number of samples taken.
    pub iterations: u64,
    /// Summed strategy time across all samples.
    pub total: Duration,
    /// Mean time per invocation. The representative time for this pair.
    pub mean: Duration,
    /// Fastest single sample.
    pub min: Duration,
    /// Slowest single sample.
    pub max: Duration,
    /// Entities left after the last sample's prune.
    pub survivors: usize,
}

impl Measurement {
    /// Mean time per invocation in nanoseconds, as a float.
    pub fn mean_nanos(&self) -> f64 {
        self.mean.as_nanos() as f64
    }
}

/// Everything measured for one strategy across the sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyReport {
    /// One measurement per sweep size, ascending.
    pub measurements: Vec<Measurement>,
    /// Growth-curve fit over `(size, mean)`, when requested and the
    /// sweep has enough points.
    pub complexity: Option<ComplexityFit>,
}

impl StrategyReport {
    /// The measurement at `size`, if it was swept.
    pub fn at(&self, size: usize) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.size == size)
    }

    /// `(size, mean nanoseconds)` pairs, the input to a complexity fit.
    pub fn series(&self) -> Vec<(usize, f64)> {
        self.measurements
            .iter()
            .map(|m| (m.size, m.mean_nanos()))
            .collect()
    }
}

/// Results of a full driver run, keyed by strategy name in registration
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    strategies: IndexMap<String, StrategyReport>,
}

impl Report {
    pub(crate) fn insert(&mut self, name: String, report: StrategyReport) {
        self.strategies.insert(name, report);
    }

    /// Report for the strategy registered as `name`.
    pub fn get(&self, name: &str) -> Option<&StrategyReport> {
        self.strategies.get(name)
    }

    /// Strategy reports in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StrategyReport)> {
        self.strategies.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of strategies measured.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether no strategy was measured.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy names ordered by mean time at `size`, fastest first.
    ///
    /// Strategies not measured at `size` are omitted. Equal means keep
    /// registration order.
    pub fn ranking_at(&self, size: usize) -> Vec<(&str, Duration)> {
        let mut ranked: Vec<(&str, Duration)> = self
            .iter()
            .filter_map(|(name, r)| r.at(size).map(|m| (name, m.mean)))
            .collect();
        ranked.sort_by_key(|&(_, mean)| mean);
        ranked
    }
}
