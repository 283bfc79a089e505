//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for constructing a [`World`](crate::World).
//! [`validate()`](WorldConfig::validate) checks structural invariants that
//! do not require building the grid; [`World::new`](crate::World::new)
//! runs it first and then reports any failure from building the torus.

use std::error::Error;
use std::fmt;

use ndlife_core::Pattern;
use ndlife_space::SpaceError;

use crate::rules::{RuleOverrides, RuleSet};

/// Percentage of cells seeded alive when no pattern is given.
pub const DEFAULT_PCT_ALIVE: u32 = 25;

/// Axis sizes used by [`WorldConfig::default()`]: a 4×4×4×4×4×4 torus.
pub const DEFAULT_DIMENSIONS: [u32; 6] = [4; 6];

/// Largest supported number of axes.
///
/// Every neighbour list holds `3^d - 1` coordinates; at 16 axes that is
/// already about 43 million per cell.
pub const MAX_NDIM: usize = 16;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`WorldConfig`] or building a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid shape could not be built.
    Space(SpaceError),
    /// More axes than [`MAX_NDIM`].
    TooManyDimensions {
        /// The configured number of axes.
        ndim: usize,
        /// The supported maximum.
        max: usize,
    },
    /// `pct_alive` is above 100.
    InvalidPctAlive {
        /// The invalid value.
        value: u32,
    },
    /// Threshold overrides produced `min > max` for birth or survival.
    InvalidRules {
        /// The resulting thresholds.
        rules: RuleSet,
    },
    /// An explicit axis size of zero.
    EmptyAxis {
        /// Index of the zero-size axis.
        axis: usize,
    },
    /// The random seeding target does not fit in memory addressing.
    PopulationTooLarge {
        /// Number of cells that would have to be seeded.
        target: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::TooManyDimensions { ndim, max } => {
                write!(f, "{ndim} dimensions exceeds the maximum of {max}")
            }
            Self::InvalidPctAlive { value } => {
                write!(f, "pct_alive must be in [0, 100], got {value}")
            }
            Self::InvalidRules { rules } => {
                write!(f, "inconsistent thresholds {rules}: min exceeds max")
            }
            Self::EmptyAxis { axis } => {
                write!(f, "axis {axis} has size 0; dimensions must be positive")
            }
            Self::PopulationTooLarge { target } => {
                write!(f, "cannot seed {target} live cells")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── Shape ──────────────────────────────────────────────────────────

/// Where a world's shape and initial cells come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Explicit axis sizes; cells are seeded randomly per `pct_alive`.
    Dimensions(Vec<u32>),
    /// An explicit initial state; axis sizes are inferred from it.
    Pattern(Pattern),
}

impl Shape {
    /// Number of axes this shape describes.
    pub fn ndim(&self) -> usize {
        match self {
            Self::Dimensions(dims) => dims.len(),
            Self::Pattern(p) => p.depth(),
        }
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Grid shape and initial-state source.
    pub shape: Shape,
    /// Percentage of cells seeded alive for [`Shape::Dimensions`]. Default: 25.
    pub pct_alive: u32,
    /// Seed for random seeding. `None` draws a fresh seed, which the world
    /// records so the run can be reproduced.
    pub seed: Option<u64>,
    /// Replacements for the derived thresholds.
    pub rules: RuleOverrides,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Dimensions(DEFAULT_DIMENSIONS.to_vec()),
            pct_alive: DEFAULT_PCT_ALIVE,
            seed: None,
            rules: RuleOverrides::default(),
        }
    }
}

impl WorldConfig {
    /// A randomly seeded world with the given axis sizes.
    pub fn with_dimensions(dims: impl Into<Vec<u32>>) -> Self {
        Self {
            shape: Shape::Dimensions(dims.into()),
            ..Self::default()
        }
    }

    /// A world whose shape and cells come from `pattern`.
    pub fn with_pattern(pattern: impl Into<Pattern>) -> Self {
        Self {
            shape: Shape::Pattern(pattern.into()),
            ..Self::default()
        }
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the seeded percentage.
    pub fn pct_alive(mut self, pct: u32) -> Self {
        self.pct_alive = pct;
        self
    }

    /// Set threshold overrides.
    pub fn rules(mut self, rules: RuleOverrides) -> Self {
        self.rules = rules;
        self
    }

    /// Thresholds for this configuration: derived from the dimensionality,
    /// then overridden.
    pub fn resolved_rules(&self) -> RuleSet {
        RuleSet::for_ndim(self.shape.ndim()).with_overrides(&self.rules)
    }

    /// Validate all structural invariants.
    ///
    /// Pattern input is never rejected for its content; only the number of
    /// axes it implies is checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensionality bounded so neighbour lists stay allocatable.
        let ndim = self.shape.ndim();
        if ndim > MAX_NDIM {
            return Err(ConfigError::TooManyDimensions {
                ndim,
                max: MAX_NDIM,
            });
        }
        // 2. A percentage above 100 could never be reached.
        if self.pct_alive > 100 {
            return Err(ConfigError::InvalidPctAlive {
                value: self.pct_alive,
            });
        }
        // 3. Overrides must leave non-empty ranges.
        let rules = self.resolved_rules();
        if !rules.is_consistent() {
            return Err(ConfigError::InvalidRules { rules });
        }
        // 4. Explicit axes must be non-empty; only an absorbed pattern may
        //    produce a zero-size axis.
        if let Shape::Dimensions(dims) = &self.shape {
            if let Some(axis) = dims.iter().position(|&len| len == 0) {
                return Err(ConfigError::EmptyAxis { axis });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> WorldConfig {
        WorldConfig::with_dimensions([10, 10]).seed(42)
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn default_is_six_dimensional_quarter_full() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.shape, Shape::Dimensions(vec![4, 4, 4, 4, 4, 4]));
        assert_eq!(cfg.pct_alive, 25);
        assert_eq!(cfg.seed, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_pct_above_100_fails() {
        let cfg = valid_config().pct_alive(101);
        match cfg.validate() {
            Err(ConfigError::InvalidPctAlive { value: 101 }) => {}
            other => panic!("expected InvalidPctAlive, got {other:?}"),
        }
    }

    #[test]
    fn validate_pct_100_succeeds() {
        assert!(valid_config().pct_alive(100).validate().is_ok());
    }

    #[test]
    fn validate_too_many_dimensions_fails() {
        let cfg = WorldConfig::with_dimensions(vec![2; MAX_NDIM + 1]);
        match cfg.validate() {
            Err(ConfigError::TooManyDimensions { ndim, max }) => {
                assert_eq!(ndim, MAX_NDIM + 1);
                assert_eq!(max, MAX_NDIM);
            }
            other => panic!("expected TooManyDimensions, got {other:?}"),
        }
    }

    #[test]
    fn validate_inverted_birth_range_fails() {
        let cfg = valid_config().rules(RuleOverrides {
            min_born: Some(4),
            max_born: Some(2),
            ..RuleOverrides::default()
        });
        match cfg.validate() {
            Err(ConfigError::InvalidRules { rules }) => {
                assert_eq!(rules.min_born, 4);
                assert_eq!(rules.max_born, 2);
            }
            other => panic!("expected InvalidRules, got {other:?}"),
        }
    }

    #[test]
    fn validate_inverted_survival_range_fails() {
        let cfg = valid_config().rules(RuleOverrides {
            min_survive: Some(9),
            ..RuleOverrides::default()
        });
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRules { .. })
        ));
    }

    #[test]
    fn pattern_shape_takes_dimensionality_from_depth() {
        let cfg = WorldConfig::with_pattern([["*  ", " * "], ["   ", "  *"]]);
        assert_eq!(cfg.shape.ndim(), 3);
        assert_eq!(cfg.resolved_rules(), RuleSet::for_ndim(3));
    }

    #[test]
    fn validate_zero_size_axis_fails() {
        let cfg = WorldConfig::with_dimensions([3, 0, 2]).seed(1);
        match cfg.validate() {
            Err(ConfigError::EmptyAxis { axis: 1 }) => {}
            other => panic!("expected EmptyAxis, got {other:?}"),
        }
    }

    #[test]
    fn empty_pattern_axis_is_valid() {
        assert!(WorldConfig::with_pattern("").validate().is_ok());
        assert!(WorldConfig::with_pattern(["", ""]).validate().is_ok());
    }

    #[test]
    fn ragged_pattern_is_valid() {
        let cfg = WorldConfig::with_pattern(vec!["*", "***", ""]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn space_error_is_wrapped_with_source() {
        let err = ConfigError::from(SpaceError::CellCountOverflow);
        assert!(err.to_string().starts_with("space:"));
        assert!(err.source().is_some());
    }
}
