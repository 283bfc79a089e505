//! NDLife: Conway's Game of Life generalised to a torus of any number of
//! dimensions.
//!
//! This is the facade crate that re-exports the public API of the NDLife
//! sub-crates. Adding `ndlife` as a single dependency is enough for most
//! uses.
//!
//! # Quick start
//!
//! ```rust
//! use ndlife::prelude::*;
//!
//! // A blinker on a 5×5 torus.
//! let mut world = World::from_pattern([
//!     "     ",
//!     "  *  ",
//!     "  *  ",
//!     "  *  ",
//!     "     ",
//! ])
//! .unwrap();
//! assert_eq!(world.rules().to_string(), "B3-3/S2-3");
//!
//! let metrics = world.step();
//! assert_eq!(metrics.births, 2);
//! assert_eq!(world.dump(), "     \n     \n *** \n     \n     ");
//!
//! // Random 4-D world, reproducible from its seed.
//! let config = WorldConfig::with_dimensions([5, 5, 10, 20]).seed(7);
//! let world = World::new(config).unwrap();
//! assert_eq!(world.population(), 5 * 5 * 10 * 20 / 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ndlife-core` | Coordinates, cell sets, cell state, patterns |
//! | [`space`] | `ndlife-space` | Torus arithmetic, neighbour offsets and cache |
//! | [`engine`] | `ndlife-engine` | World, rules, rendering, driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`ndlife-core`).
///
/// [`types::Coord`], [`types::CellSet`], [`types::CellState`] and the
/// nested text [`types::Pattern`].
pub use ndlife_core as types;

/// Toroidal space (`ndlife-space`).
///
/// [`space::Torus`] wraps coordinates; [`space::NeighbourCache`] memoizes
/// neighbour lists and counts live neighbours.
pub use ndlife_space as space;

/// Simulation (`ndlife-engine`).
///
/// [`engine::World`] for stepping, [`engine::Driver`] for running until
/// extinction or repetition.
pub use ndlife_engine as engine;

/// Common imports for typical NDLife usage.
///
/// ```rust
/// use ndlife::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ndlife_core::{CellSet, CellState, Coord, GenerationId, Pattern};

    // Errors
    pub use ndlife_engine::ConfigError;
    pub use ndlife_space::SpaceError;

    // Engine
    pub use ndlife_engine::{
        Driver, Frame, Outcome, RuleOverrides, RuleSet, RunReport, StepMetrics, World,
        WorldConfig,
    };
}
