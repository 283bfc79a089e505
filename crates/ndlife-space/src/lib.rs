//! Toroidal space for NDLife.
//!
//! This crate owns everything that depends only on the grid shape:
//!
//! - [`Torus`]: per-axis modular arithmetic over fixed axis sizes
//! - [`neighbour_offsets`]: the `3^d - 1` Moore offsets for `d` axes
//! - [`NeighbourCache`]: memoized wrapped neighbour lists plus the
//!   live-neighbour counting paths used by the stepping engine
//!
//! Nothing here knows about rules or generations; the engine crate
//! combines these pieces with a live-cell set.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod offsets;
pub mod torus;

#[cfg(test)]
pub(crate) mod compliance;

pub use cache::{CacheStats, NeighbourCache};
pub use error::SpaceError;
pub use offsets::{neighbour_offsets, offset_count};
pub use torus::{Dims, Torus};
