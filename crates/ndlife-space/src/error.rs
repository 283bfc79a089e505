//! Error types for space operations.

use ndlife_core::Coord;
use std::fmt;

/// Errors arising from space construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// An axis is too long to be addressed with `i32` coordinates.
    DimensionTooLarge {
        /// Index of the offending axis.
        axis: usize,
        /// The value that was provided.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The product of all axis sizes does not fit in a `u64`.
    CellCountOverflow,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "axis {axis} has size {value}, exceeds maximum {max}")
            }
            Self::CellCountOverflow => write!(f, "total cell count overflows u64"),
        }
    }
}

impl std::error::Error for SpaceError {}
