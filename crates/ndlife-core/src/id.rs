//! Coordinates, cell sets, and the [`GenerationId`] counter.

use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;

/// A coordinate on the toroidal grid.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for worlds up to
/// 4 dimensions. Higher-dimensional worlds spill to the heap transparently.
/// Equality and hashing are structural, so a `Coord` works directly as a
/// set element or map key.
pub type Coord = SmallVec<[i32; 4]>;

/// The set of live cells of a world.
///
/// Dead cells are implicit (absence). `IndexSet` keeps iteration order
/// deterministic for a given insertion history; equality is still set
/// equality, independent of order.
pub type CellSet = IndexSet<Coord>;

/// Monotonically increasing generation counter.
///
/// Zero for a freshly constructed world, incremented once per step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenerationId(pub u64);

impl GenerationId {
    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
