//! Test utilities for NDLife development.
//!
//! Provides canonical patterns with their expected renderings and
//! neighbour counts (see [`fixtures`]) plus small helpers for building
//! cell sets by hand.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use ndlife_core::{CellSet, Coord};

/// Build a [`CellSet`] from coordinate slices.
pub fn cells(coords: &[&[i32]]) -> CellSet {
    coords.iter().map(|c| Coord::from_slice(c)).collect()
}

/// The same set, inserted in reverse order.
///
/// Stepping must not depend on iteration order; comparing a world built
/// from `set` with one built from `reversed(set)` exercises that.
pub fn reversed(set: &CellSet) -> CellSet {
    set.iter().rev().cloned().collect()
}

/// Cells of a 2-D or higher grid whose `mask` bit is set, in canonical
/// order (leftmost axis slowest). Bits past the end of the grid are ignored.
pub fn cells_from_mask(dims: &[u32], mask: &[bool]) -> CellSet {
    let mut out = CellSet::new();
    let total: usize = dims.iter().map(|&d| d as usize).product();
    for (rank, _) in mask.iter().take(total).enumerate().filter(|(_, on)| **on) {
        let mut rem = rank;
        let mut coord = Coord::from_elem(0, dims.len());
        for axis in (0..dims.len()).rev() {
            let len = dims[axis] as usize;
            coord[axis] = (rem % len) as i32;
            rem /= len;
        }
        out.insert(coord);
    }
    out
}
