//! Input-size sweeps shared by every measured strategy.

use cull_core::World;

use crate::config::ConfigError;

/// An ascending, endpoint-inclusive range of entity counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// `start, start + step, start + 2·step, …`, plus `end` if the
    /// stride does not land on it.
    Dense {
        /// First size. Must be at least 1.
        start: usize,
        /// Last size. Must be at least `start`.
        end: usize,
        /// Increment between sizes. Must be at least 1.
        step: usize,
    },
    /// `start, start·m, start·m², …`, plus `end` if the progression
    /// does not land on it.
    Multiplicative {
        /// First size. Must be at least 1.
        start: usize,
        /// Last size. Must be at least `start`.
        end: usize,
        /// Growth factor between sizes. Must be at least 2.
        multiplier: usize,
    },
}

impl Sweep {
    /// First size of the reference sweep.
    pub const REFERENCE_START: usize = 10_000;
    /// Last size of the reference sweep.
    pub const REFERENCE_END: usize = 250_000;
    /// Step of the reference sweep.
    pub const REFERENCE_STEP: usize = 10_000;
    /// Most sizes a single sweep may visit.
    pub const MAX_SIZES: usize = 10_000;

    /// The reference sweep: 10 000 to 250 000 entities in steps of 10 000.
    pub fn reference() -> Self {
        Self::Dense {
            start: Self::REFERENCE_START,
            end: Self::REFERENCE_END,
            step: Self::REFERENCE_STEP,
        }
    }

    /// Check the range is non-empty, excludes zero, advances, and stays
    /// within what can be populated and listed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (start, end, step) = match *self {
            Self::Dense { start, end, step } => {
                if step == 0 {
                    return Err(ConfigError::ZeroStep);
                }
                (start, end, Some(step))
            }
            Self::Multiplicative {
                start,
                end,
                multiplier,
            } => {
                if multiplier < 2 {
                    return Err(ConfigError::InvalidMultiplier { multiplier });
                }
                (start, end, None)
            }
        };
        if start == 0 {
            return Err(ConfigError::ZeroStart);
        }
        if start > end {
            return Err(ConfigError::EmptyRange { start, end });
        }
        if end > World::MAX_ENTITIES {
            return Err(ConfigError::EndTooLarge {
                end,
                max: World::MAX_ENTITIES,
            });
        }
        if let Some(step) = step {
            // strides past the start, the start itself, and `end` if missed
            let count = ((end - start) / step).saturating_add(2);
            if count > Self::MAX_SIZES {
                return Err(ConfigError::TooManySizes {
                    count,
                    max: Self::MAX_SIZES,
                });
            }
        }
        Ok(())
    }

    /// The ascending sequence of sizes.
    pub fn sizes(&self) -> Result<Vec<usize>, ConfigError> {
        self.validate()?;
        let mut sizes = Vec::new();
        match *self {
            Self::Dense { start, end, step } => {
                let mut n = start;
                loop {
                    sizes.push(n);
                    match n.checked_add(step) {
                        Some(next) if next <= end => n = next,
                        _ => break,
                    }
                }
            }
            Self::Multiplicative {
                start,
                end,
                multiplier,
            } => {
                let mut n = start;
                loop {
                    sizes.push(n);
                    match n.checked_mul(multiplier) {
                        Some(next) if next <= end => n = next,
                        _ => break,
                    }
                }
            }
        }
        if sizes.last() != Some(&self.end()) {
            sizes.push(self.end());
        }
        Ok(sizes)
    }

    /// First size.
    pub fn start(&self) -> usize {
        match *self {
            Self::Dense { start, .. } | Self::Multiplicative { start, .. } => start,
        }
    }

    /// Last size.
    pub fn end(&self) -> usize {
        match *self {
            Self::Dense { end, .. } | Self::Multiplicative { end, .. } => end,
        }
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::reference()
    }
}
