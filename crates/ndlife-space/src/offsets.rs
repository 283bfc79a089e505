//! Moore-neighbourhood offset vectors for an arbitrary number of axes.

use ndlife_core::Coord;

/// Number of neighbour offsets in `ndim` dimensions: `3^ndim - 1`.
///
/// Returns `None` if the count does not fit in a `usize`.
pub fn offset_count(ndim: usize) -> Option<usize> {
    let exp = u32::try_from(ndim).ok()?;
    3usize.checked_pow(exp).map(|n| n - 1)
}

/// Every vector in `{-1, 0, 1}^ndim` except the zero vector.
///
/// Built by a fixed recursion (leftmost axis slowest, `-1 < 0 < 1` per
/// axis), so the order is identical on every call. For `ndim = 2`:
///
/// ```text
/// [-1,-1] [-1,0] [-1,1] [0,-1] [0,1] [1,-1] [1,0] [1,1]
/// ```
///
/// # Examples
///
/// ```
/// let offsets = ndlife_space::neighbour_offsets(3);
/// assert_eq!(offsets.len(), 26);
/// assert!(offsets.iter().all(|o| o.iter().any(|&v| v != 0)));
/// ```
pub fn neighbour_offsets(ndim: usize) -> Vec<Coord> {
    let mut out = Vec::with_capacity(offset_count(ndim).unwrap_or(0));
    let mut prefix = Coord::with_capacity(ndim);
    extend_offsets(ndim, &mut prefix, &mut out);
    out
}

fn extend_offsets(ndim: usize, prefix: &mut Coord, out: &mut Vec<Coord>) {
    if prefix.len() == ndim {
        if prefix.iter().any(|&v| v != 0) {
            out.push(prefix.clone());
        }
        return;
    }
    for delta in [-1, 0, 1] {
        prefix.push(delta);
        extend_offsets(ndim, prefix, out);
        prefix.pop();
    }
}
