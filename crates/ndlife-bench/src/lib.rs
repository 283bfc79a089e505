//! Benchmark profiles for NDLife.
//!
//! - [`reference_profile`]: the 5×5×10×20 world (5 000 cells, 80 neighbours each)
//! - [`conway_profile`]: a 128×128 plane for comparison with classic life
//! - [`seeded_world`]: any shape, deterministically seeded

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ndlife_engine::{ConfigError, World, WorldConfig};

/// Axis sizes of the reference profile.
pub const REFERENCE_DIMS: [u32; 4] = [5, 5, 10, 20];

/// A 25 % populated world of shape `dims` seeded with `seed`.
pub fn seeded_world(dims: &[u32], seed: u64) -> Result<World, ConfigError> {
    World::new(WorldConfig::with_dimensions(dims).seed(seed))
}

/// 4-D reference world.
pub fn reference_profile(seed: u64) -> Result<World, ConfigError> {
    seeded_world(&REFERENCE_DIMS, seed)
}

/// 2-D 128×128 world.
pub fn conway_profile(seed: u64) -> Result<World, ConfigError> {
    seeded_world(&[128, 128], seed)
}
