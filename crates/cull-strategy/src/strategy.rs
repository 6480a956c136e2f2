//! Strategy tags and harness registration.
//!
//! [`Strategy`] names each built-in algorithm; [`Registration`] is the
//! shape a benchmark harness consumes: a name and a plain function
//! pointer that prunes a [`World`] in place.

use std::borrow::Cow;
use std::fmt;

use cull_core::World;

use crate::{compact, copy, erase, swap};

/// Signature shared by every removal strategy.
pub type PruneFn = fn(&mut World);

/// The built-in removal strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Forward walk, erase each dead entity in place.
    Erase,
    /// Backward range iterator, erase each dead entity in place.
    EraseReverse,
    /// Backward explicit index, erase each dead entity in place.
    EraseReverseIndex,
    /// Manual loop copying survivors into a full-length new vector.
    CopyFor,
    /// Iterator filter copying survivors into a full-length new vector.
    CopyIf,
    /// Overwrite each dead entity with the last one and pop. Reorders.
    Swap,
    /// Compact survivors to the front, then one bulk truncation.
    Remove,
    /// Stable partition survivors to the front, then one bulk truncation.
    Partition,
}

impl Strategy {
    /// Every built-in strategy, in canonical benchmark order.
    pub const ALL: [Strategy; 8] = [
        Strategy::Erase,
        Strategy::EraseReverse,
        Strategy::EraseReverseIndex,
        Strategy::CopyFor,
        Strategy::CopyIf,
        Strategy::Swap,
        Strategy::Remove,
        Strategy::Partition,
    ];

    /// Benchmark name, e.g. `"EraseReverse"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Erase => "Erase",
            Self::EraseReverse => "EraseReverse",
            Self::EraseReverseIndex => "EraseReverseIndex",
            Self::CopyFor => "CopyFor",
            Self::CopyIf => "CopyIf",
            Self::Swap => "Swap",
            Self::Remove => "Remove",
            Self::Partition => "Partition",
        }
    }

    /// Look a strategy up by its [`name`](Self::name), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// The function implementing this strategy.
    pub fn prune_fn(self) -> PruneFn {
        match self {
            Self::Erase => erase::erase_forward,
            Self::EraseReverse => erase::erase_reverse,
            Self::EraseReverseIndex => erase::erase_reverse_index,
            Self::CopyFor => copy::copy_for,
            Self::CopyIf => copy::copy_if,
            Self::Swap => swap::swap_pop,
            Self::Remove => compact::remove_erase,
            Self::Partition => compact::partition_erase,
        }
    }

    /// Remove every dead entity from `world`.
    pub fn prune(self, world: &mut World) {
        (self.prune_fn())(world);
    }

    /// Whether survivors keep their relative order.
    pub fn preserves_order(self) -> bool {
        !matches!(self, Self::Swap)
    }

    /// Harness registration for this strategy.
    pub fn registration(self) -> Registration {
        Registration::new(self.name(), self.prune_fn())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named removal function handed to a benchmark harness.
///
/// Built-in strategies come from [`Strategy::registration`]; any other
/// `fn(&mut World)` can be registered under its own name.
#[derive(Clone, Debug)]
pub struct Registration {
    name: Cow<'static, str>,
    prune: PruneFn,
}

impl Registration {
    /// Register `prune` under `name`.
    pub fn new(name: impl Into<Cow<'static, str>>, prune: PruneFn) -> Self {
        Self {
            name: name.into(),
            prune,
        }
    }

    /// The registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the registered function on `world`.
    #[inline]
    pub fn prune(&self, world: &mut World) {
        (self.prune)(world);
    }
}

/// Registrations for every built-in strategy, in [`Strategy::ALL`] order.
pub fn registry() -> Vec<Registration> {
    Strategy::ALL.into_iter().map(Strategy::registration).collect()
}
