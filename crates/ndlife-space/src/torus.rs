//! N-dimensional torus: modular coordinate arithmetic over fixed axis sizes.

use crate::error::SpaceError;
use ndlife_core::Coord;
use smallvec::SmallVec;

/// Axis sizes of a torus. Inline for up to 4 axes, like [`Coord`].
pub type Dims = SmallVec<[u32; 4]>;

/// An N-dimensional toroidal grid where every axis wraps around.
///
/// The shape is fixed at construction. Everything derived from it (wrapped
/// neighbour lists in particular) stays valid for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use ndlife_space::Torus;
///
/// let t = Torus::new(&[5, 3]).unwrap();
/// assert_eq!(t.cell_count(), 15);
///
/// // Negative offsets wrap to the far edge.
/// let origin: ndlife_core::Coord = vec![0, 0].into();
/// let up_left: ndlife_core::Coord = vec![-1, -1].into();
/// assert_eq!(t.wrap(&origin, &up_left).as_slice(), &[4, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Torus {
    dims: Dims,
    cell_count: u64,
}

impl Torus {
    /// Maximum axis size: coordinates use `i32`, so every index must fit.
    pub const MAX_AXIS: u32 = i32::MAX as u32;

    /// Create a torus with the given axis sizes.
    ///
    /// Zero-length axes are accepted; such a torus has no cells. Returns
    /// `Err(SpaceError::DimensionTooLarge)` if an axis exceeds
    /// [`MAX_AXIS`](Self::MAX_AXIS) and `Err(SpaceError::CellCountOverflow)`
    /// if the cell count does not fit in a `u64`.
    pub fn new(dims: &[u32]) -> Result<Self, SpaceError> {
        let mut cell_count: u64 = 1;
        for (axis, &len) in dims.iter().enumerate() {
            if len > Self::MAX_AXIS {
                return Err(SpaceError::DimensionTooLarge {
                    axis,
                    value: len,
                    max: Self::MAX_AXIS,
                });
            }
            cell_count = cell_count
                .checked_mul(u64::from(len))
                .ok_or(SpaceError::CellCountOverflow)?;
        }
        Ok(Self {
            dims: SmallVec::from_slice(dims),
            cell_count,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Axis sizes, outermost first.
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// Total number of cells (product of all axis sizes).
    pub fn cell_count(&self) -> u64 {
        self.cell_count
    }

    /// Whether `coord` has the right arity and every component is in range.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.dims.len()
            && coord
                .iter()
                .zip(&self.dims)
                .all(|(&c, &len)| c >= 0 && (c as u32) < len)
    }

    /// Like [`contains`](Self::contains), but reports why a coordinate is rejected.
    pub fn check_bounds(&self, coord: &Coord) -> Result<(), SpaceError> {
        if coord.len() != self.dims.len() {
            return Err(SpaceError::CoordOutOfBounds {
                coord: coord.clone(),
                bounds: format!(
                    "expected {}D coordinate, got {}D",
                    self.dims.len(),
                    coord.len()
                ),
            });
        }
        if !self.contains(coord) {
            return Err(SpaceError::CoordOutOfBounds {
                coord: coord.clone(),
                bounds: format!("each axis in [0, dims) with dims = {:?}", self.dims),
            });
        }
        Ok(())
    }

    /// Translate `coord` by `offset`, wrapping every axis.
    ///
    /// Both slices must have length [`ndim`](Self::ndim) and every axis of
    /// `coord` must be non-empty.
    pub fn wrap(&self, coord: &[i32], offset: &[i32]) -> Coord {
        debug_assert_eq!(coord.len(), self.dims.len());
        debug_assert_eq!(offset.len(), self.dims.len());
        coord
            .iter()
            .zip(offset)
            .zip(&self.dims)
            .map(|((&c, &v), &len)| wrap_axis(c, v, len))
            .collect()
    }

    /// All cells in lexicographic order, leftmost axis slowest.
    ///
    /// Materializes `cell_count()` coordinates; intended for small tori.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        if self.cell_count == 0 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.cell_count as usize);
        let mut current: Coord = smallvec::smallvec![0; self.dims.len()];
        loop {
            out.push(current.clone());
            // Odometer increment, rightmost axis fastest.
            let mut axis = self.dims.len();
            loop {
                if axis == 0 {
                    return out;
                }
                axis -= 1;
                current[axis] += 1;
                if (current[axis] as u32) < self.dims[axis] {
                    break;
                }
                current[axis] = 0;
            }
        }
    }
}

/// `((c + v) mod len + len) mod len`, computed in `i64` so that neither the
/// sum nor the remainder can overflow.
pub(crate) fn wrap_axis(c: i32, v: i32, len: u32) -> i32 {
    debug_assert!(len > 0, "cannot wrap along an empty axis");
    (i64::from(c) + i64::from(v)).rem_euclid(i64::from(len)) as i32
}
