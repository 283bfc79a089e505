//! Neighbour-cache compliance test helpers.
//!
//! These functions verify that a [`NeighbourCache`] satisfies the
//! invariants the stepping engine relies on. Reused across test modules
//! for tori of different shapes.

use crate::cache::NeighbourCache;
use crate::offsets::offset_count;
use crate::torus::Torus;
use indexmap::IndexSet;
use ndlife_core::Coord;

/// Assert that every cell has exactly `3^d - 1` neighbour entries.
pub fn assert_neighbour_count(cache: &mut NeighbourCache) {
    let expected = offset_count(cache.torus().ndim()).expect("offset count fits");
    for coord in cache.torus().canonical_ordering() {
        let n = cache.neighbours_of(&coord).len();
        assert_eq!(n, expected, "N({coord:?}) has {n} entries, expected {expected}");
    }
}

/// Assert that every neighbour entry lies inside the torus.
pub fn assert_neighbours_in_bounds(cache: &mut NeighbourCache) {
    let torus = cache.torus().clone();
    for coord in torus.canonical_ordering() {
        for nb in cache.neighbours_of(&coord) {
            assert!(torus.contains(nb), "neighbour {nb:?} of {coord:?} out of bounds");
        }
    }
}

/// Assert that `b` appears in `N(a)` exactly as often as `a` appears in `N(b)`.
pub fn assert_neighbours_symmetric(cache: &mut NeighbourCache) {
    let cells = cache.torus().canonical_ordering();
    for a in &cells {
        let na = cache.neighbours_of(a).to_vec();
        let distinct: IndexSet<&Coord> = na.iter().collect();
        for b in distinct {
            let ab = na.iter().filter(|c| *c == b).count();
            let ba = cache.neighbours_of(b).iter().filter(|c| *c == a).count();
            assert_eq!(
                ab, ba,
                "multiplicity of {b:?} in N({a:?}) is {ab}, of {a:?} in N({b:?}) is {ba}"
            );
        }
    }
}

/// Assert that a fresh cache computes the same lists as the memoized one.
pub fn assert_lists_deterministic(cache: &mut NeighbourCache) {
    let torus: Torus = cache.torus().clone();
    let mut fresh = NeighbourCache::new(torus.clone());
    for coord in torus.canonical_ordering() {
        assert_eq!(
            cache.neighbours_of(&coord),
            fresh.neighbours_of(&coord),
            "neighbour list of {coord:?} is non-deterministic"
        );
    }
}

/// Run all compliance checks on a cache.
pub fn run_full_compliance(cache: &mut NeighbourCache) {
    assert_neighbour_count(cache);
    assert_neighbours_in_bounds(cache);
    assert_neighbours_symmetric(cache);
    assert_lists_deterministic(cache);
}
