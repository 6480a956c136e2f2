//! Error types for world population.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Errors from [`World::populate`](crate::World::populate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// The requested entity count cannot be represented as a single
    /// contiguous allocation.
    CountOverflow {
        /// Number of entities requested.
        requested: usize,
        /// Largest entity count a `World` can hold.
        max: usize,
    },
    /// Reserving storage for the requested entities failed.
    AllocationFailed {
        /// Number of entities requested.
        requested: usize,
        /// Allocator diagnostic.
        reason: String,
    },
    /// Population was attempted on a world that still holds entities.
    AlreadyPopulated {
        /// Number of entities already present.
        len: usize,
    },
}

impl WorldError {
    pub(crate) fn allocation(requested: usize, err: TryReserveError) -> Self {
        Self::AllocationFailed {
            requested,
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOverflow { requested, max } => {
                write!(f, "entity count {requested} exceeds maximum of {max}")
            }
            Self::AllocationFailed { requested, reason } => {
                write!(f, "failed to reserve {requested} entities: {reason}")
            }
            Self::AlreadyPopulated { len } => {
                write!(f, "world already holds {len} entities; depopulate first")
            }
        }
    }
}

impl Error for WorldError {}
