//! Lazily-filled neighbour lists and the live-neighbour counting paths.

use std::sync::Arc;

use indexmap::IndexMap;
use ndlife_core::{CellSet, Coord};

use crate::offsets::neighbour_offsets;
use crate::torus::Torus;

/// Hit/miss counters for [`NeighbourCache::neighbours_of`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from an existing entry.
    pub hits: u64,
    /// Lookups that computed and stored a new entry.
    pub misses: u64,
}

/// Per-coordinate memo of wrapped Moore neighbours on a [`Torus`].
///
/// An entry depends only on the torus shape, which never changes, so
/// entries are never invalidated and the cache only grows. Filling an
/// entry twice yields the same list.
///
/// Lists are stored exactly as the offsets produce them: on axes of size 1
/// or 2 several offsets land on the same cell (possibly the cell itself),
/// and every such landing is kept and counted.
///
/// # Examples
///
/// ```
/// use ndlife_space::{NeighbourCache, Torus};
///
/// let mut cache = NeighbourCache::new(Torus::new(&[2]).unwrap());
/// let origin: ndlife_core::Coord = vec![0].into();
/// let other: ndlife_core::Coord = vec![1].into();
/// // Both directions wrap onto the single other cell.
/// assert_eq!(cache.neighbours_of(&origin), &[other.clone(), other]);
/// ```
#[derive(Clone, Debug)]
pub struct NeighbourCache {
    torus: Torus,
    offsets: Arc<[Coord]>,
    entries: IndexMap<Coord, Vec<Coord>>,
    stats: CacheStats,
}

impl NeighbourCache {
    /// Create an empty cache for `torus`, generating its offset vectors.
    pub fn new(torus: Torus) -> Self {
        let offsets: Arc<[Coord]> = neighbour_offsets(torus.ndim()).into();
        Self {
            torus,
            offsets,
            entries: IndexMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// The torus this cache wraps coordinates on.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// The `3^d - 1` offset vectors, in generation order.
    pub fn offsets(&self) -> &[Coord] {
        &self.offsets
    }

    /// Number of coordinates with a stored neighbour list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no neighbour list has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cumulative hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Wrapped neighbours of `coord`, one per offset, computed on first use.
    ///
    /// `coord` must lie inside the torus; out-of-range input produces
    /// wrapped but otherwise meaningless results.
    pub fn neighbours_of(&mut self, coord: &Coord) -> &[Coord] {
        if self.entries.contains_key(coord) {
            self.stats.hits += 1;
            return &self.entries[coord];
        }
        self.stats.misses += 1;
        let list: Vec<Coord> = self
            .offsets
            .iter()
            .map(|offset| self.torus.wrap(coord, offset))
            .collect();
        self.entries.entry(coord.clone()).or_insert(list)
    }

    /// Number of neighbour entries of `coord` that are in `live`.
    pub fn count_live(&mut self, coord: &Coord, live: &CellSet) -> usize {
        self.neighbours_of(coord)
            .iter()
            .filter(|nb| live.contains(*nb))
            .count()
    }

    /// Full live-neighbour count of `coord`; every neighbour entry not in
    /// `live` is added to `dead_out`.
    pub fn count_live_collecting(
        &mut self,
        coord: &Coord,
        live: &CellSet,
        dead_out: &mut CellSet,
    ) -> usize {
        let mut count = 0;
        for nb in self.neighbours_of(coord) {
            if live.contains(nb) {
                count += 1;
            } else if !dead_out.contains(nb) {
                dead_out.insert(nb.clone());
            }
        }
        count
    }

    /// Live-neighbour count of `coord` that stops as soon as it reaches `cap`.
    ///
    /// The result equals `min(count_live(coord, live), cap)`.
    pub fn count_live_capped(&mut self, coord: &Coord, live: &CellSet, cap: usize) -> usize {
        if cap == 0 {
            return 0;
        }
        let mut count = 0;
        for nb in self.neighbours_of(coord) {
            if live.contains(nb) {
                count += 1;
                if count == cap {
                    break;
                }
            }
        }
        count
    }
}
