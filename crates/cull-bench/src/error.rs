//! Errors surfaced by a driver run.

use std::error::Error;
use std::fmt;

use cull_core::WorldError;

use crate::complexity::FitError;
use crate::config::ConfigError;

/// Errors from [`Driver::run`](crate::Driver::run) and
/// [`Driver::measure`](crate::Driver::measure).
///
/// Any of these halts the run. Nothing is retried and no partial
/// measurement is reported for the failing (strategy, size) pair.
#[derive(Clone, Debug, PartialEq)]
pub enum BenchError {
    /// Configuration rejected before measuring.
    Config(ConfigError),
    /// `run` was called with no registrations.
    NoStrategies,
    /// Two registrations share a name.
    DuplicateStrategy {
        /// The repeated name.
        name: String,
    },
    /// Populating the world for a sample failed.
    Populate {
        /// Strategy being measured.
        strategy: String,
        /// Size being populated.
        size: usize,
        /// The underlying population error.
        source: WorldError,
    },
    /// The complexity fit over a strategy's series failed.
    Fit {
        /// Strategy whose series was fitted.
        strategy: String,
        /// The underlying fit error.
        source: FitError,
    },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::NoStrategies => write!(f, "no strategies registered"),
            Self::DuplicateStrategy { name } => {
                write!(f, "strategy '{name}' registered more than once")
            }
            Self::Populate {
                strategy,
                size,
                source,
            } => {
                write!(f, "populating {size} entities for '{strategy}': {source}")
            }
            Self::Fit { strategy, source } => {
                write!(f, "complexity fit for '{strategy}': {source}")
            }
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Populate { source, .. } => Some(source),
            Self::Fit { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
