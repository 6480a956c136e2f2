//! Empirical growth-curve fitting.
//!
//! Each canonical model `f(n)` is fitted through the origin by least
//! squares, `t ≈ coef · f(n)`, giving
//!
//! ```text
//! coef = Σ t·f(n) / Σ f(n)²
//! rms  = sqrt(Σ (t − coef·f(n))² / k) / mean(t)
//! ```
//!
//! and the model with the smallest normalized rms wins. Logarithms are
//! base 2. The result is advisory: it ranks scaling behavior, it does not
//! prove an asymptotic bound.

use std::error::Error;
use std::fmt;

/// A canonical asymptotic growth model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// O(1).
    Constant,
    /// O(lg N).
    Logarithmic,
    /// O(N).
    Linear,
    /// O(N lg N).
    LogLinear,
    /// O(N²).
    Quadratic,
    /// O(N³).
    Cubic,
}

impl Complexity {
    /// Every model, in the order ties are broken (simplest first).
    pub const ALL: [Complexity; 6] = [
        Complexity::Constant,
        Complexity::Logarithmic,
        Complexity::Linear,
        Complexity::LogLinear,
        Complexity::Quadratic,
        Complexity::Cubic,
    ];

    /// Big-O notation, e.g. `"O(N lgN)"`.
    pub fn notation(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(lgN)",
            Self::Linear => "O(N)",
            Self::LogLinear => "O(NlgN)",
            Self::Quadratic => "O(N^2)",
            Self::Cubic => "O(N^3)",
        }
    }

    /// The model's characteristic function evaluated at `n`.
    pub fn curve(self, n: f64) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Logarithmic => n.log2(),
            Self::Linear => n,
            Self::LogLinear => n * n.log2(),
            Self::Quadratic => n * n,
            Self::Cubic => n * n * n,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// Result of fitting a (size, time) series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexityFit {
    /// Best-matching model.
    pub complexity: Complexity,
    /// Fitted coefficient, in the series' time unit per unit of `f(n)`.
    pub coefficient: f64,
    /// Root-mean-square residual normalized by the mean time.
    pub rms: f64,
}

impl fmt::Display for ComplexityFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} {} (rms {:.1}%)",
            self.coefficient,
            self.complexity,
            self.rms * 100.0
        )
    }
}

/// Reasons a series cannot be fitted.
#[derive(Clone, Debug, PartialEq)]
pub enum FitError {
    /// Fewer than two points.
    TooFewSamples {
        /// Points supplied.
        count: usize,
    },
    /// A point has size zero or a negative or non-finite time.
    InvalidSample {
        /// Offending size.
        size: usize,
        /// Offending time.
        time: f64,
    },
    /// The model's curve is zero at every size, so no coefficient exists.
    DegenerateModel {
        /// The model that could not be fitted.
        complexity: Complexity,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSamples { count } => {
                write!(f, "complexity fit needs at least 2 samples, got {count}")
            }
            Self::InvalidSample { size, time } => {
                write!(f, "invalid sample: size {size}, time {time}")
            }
            Self::DegenerateModel { complexity } => {
                write!(f, "{complexity} is zero at every sampled size")
            }
        }
    }
}

impl Error for FitError {}

/// Minimum number of points a fit requires.
pub const MIN_SAMPLES: usize = 2;

/// Fit every model to `samples` and return the best.
///
/// `samples` are `(size, time)` pairs; time may be in any unit and the
/// coefficient is reported in that unit. Models whose curve vanishes at
/// every size are skipped. Ties go to the simpler model.
pub fn fit(samples: &[(usize, f64)]) -> Result<ComplexityFit, FitError> {
    check(samples)?;
    let mut best: Option<ComplexityFit> = None;
    for complexity in Complexity::ALL {
        let Some(candidate) = least_squares(complexity, samples) else {
            continue;
        };
        if best.is_none_or(|b| candidate.rms < b.rms) {
            best = Some(candidate);
        }
    }
    // Constant is never degenerate, so at least one model was fitted.
    best.ok_or(FitError::DegenerateModel {
        complexity: Complexity::Constant,
    })
}

/// Fit a single named model to `samples`.
pub fn fit_model(
    complexity: Complexity,
    samples: &[(usize, f64)],
) -> Result<ComplexityFit, FitError> {
    check(samples)?;
    least_squares(complexity, samples).ok_or(FitError::DegenerateModel { complexity })
}

fn check(samples: &[(usize, f64)]) -> Result<(), FitError> {
    if samples.len() < MIN_SAMPLES {
        return Err(FitError::TooFewSamples {
            count: samples.len(),
        });
    }
    for &(size, time) in samples {
        if size == 0 || !time.is_finite() || time < 0.0 {
            return Err(FitError::InvalidSample { size, time });
        }
    }
    Ok(())
}

fn least_squares(complexity: Complexity, samples: &[(usize, f64)]) -> Option<ComplexityFit> {
    let mut sigma_gn_squared = 0.0;
    let mut sigma_time = 0.0;
    let mut sigma_time_gn = 0.0;
    for &(size, time) in samples {
        let gn = complexity.curve(size as f64);
        sigma_gn_squared += gn * gn;
        sigma_time += time;
        sigma_time_gn += time * gn;
    }
    if sigma_gn_squared == 0.0 || !sigma_gn_squared.is_finite() {
        return None;
    }
    let coefficient = sigma_time_gn / sigma_gn_squared;

    let residual: f64 = samples
        .iter()
        .map(|&(size, time)| {
            let fit = coefficient * complexity.curve(size as f64);
            (time - fit).powi(2)
        })
        .sum();
    let count = samples.len() as f64;
    let mean = sigma_time / count;
    let rms = (residual / count).sqrt();
    let rms = if mean > 0.0 { rms / mean } else { rms };

    Some(ComplexityFit {
        complexity,
        coefficient,
        rms,
    })
}
