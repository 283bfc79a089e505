//! Game of Life on an N-dimensional torus.
//!
//! Provides the [`World`] that owns the live cells and steps them one
//! generation at a time, the dimension-scaled [`RuleSet`], the folded text
//! [`render`]er, and a [`Driver`] that runs a world until it dies out or
//! starts repeating.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod metrics;
pub mod render;
pub mod rules;
pub mod world;

pub use config::{ConfigError, Shape, WorldConfig};
pub use driver::{Driver, Frame, Outcome, RunReport};
pub use metrics::StepMetrics;
pub use rules::{RuleOverrides, RuleSet};
pub use world::World;
