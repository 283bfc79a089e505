//! Birth and survival thresholds scaled to the number of dimensions.

use std::fmt;

use ndlife_core::CellState;
use ndlife_space::offset_count;

/// Inclusive neighbour-count bounds for survival and birth.
///
/// [`for_ndim`](Self::for_ndim) scales Conway's B3/S23 to `d` dimensions by
/// measuring every threshold in units of `part = (3^d - 1) / 8`, the number
/// of neighbours per "2-D neighbour":
///
/// | threshold     | factor |
/// |---------------|--------|
/// | `max_born`    | 2.75   |
/// | `min_born`    | 2.50   |
/// | `max_survive` | 3.00   |
/// | `min_survive` | 1.50   |
///
/// Each product is rounded half away from zero. For `d = 2`, `part = 1`
/// and the result is exactly B3/S23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Fewest live neighbours a live cell needs to survive.
    pub min_survive: u32,
    /// Most live neighbours a live cell tolerates and survives.
    pub max_survive: u32,
    /// Fewest live neighbours that bring a dead cell to life.
    pub min_born: u32,
    /// Most live neighbours that still bring a dead cell to life.
    pub max_born: u32,
}

/// Optional per-threshold replacements for the derived [`RuleSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleOverrides {
    /// Replaces [`RuleSet::max_born`].
    pub max_born: Option<u32>,
    /// Replaces [`RuleSet::min_born`].
    pub min_born: Option<u32>,
    /// Replaces [`RuleSet::max_survive`].
    pub max_survive: Option<u32>,
    /// Replaces [`RuleSet::min_survive`].
    pub min_survive: Option<u32>,
}

impl RuleSet {
    /// Derive thresholds for a `ndim`-dimensional Moore neighbourhood.
    pub fn for_ndim(ndim: usize) -> Self {
        let neighbours = offset_count(ndim).map_or(u64::MAX, |n| n as u64);
        let part = (neighbours / 8) as f64;
        let scaled = |factor: f64| (factor * part).round() as u32;
        Self {
            max_born: scaled(2.75),
            min_born: scaled(2.50),
            max_survive: scaled(3.00),
            min_survive: scaled(1.50),
        }
    }

    /// Apply any overridden thresholds on top of `self`.
    pub fn with_overrides(self, overrides: &RuleOverrides) -> Self {
        Self {
            max_born: overrides.max_born.unwrap_or(self.max_born),
            min_born: overrides.min_born.unwrap_or(self.min_born),
            max_survive: overrides.max_survive.unwrap_or(self.max_survive),
            min_survive: overrides.min_survive.unwrap_or(self.min_survive),
        }
    }

    /// `min <= max` holds for both the birth and the survival range.
    pub fn is_consistent(&self) -> bool {
        self.min_born <= self.max_born && self.min_survive <= self.max_survive
    }

    /// State of a cell in the next generation given its live-neighbour count.
    pub fn next_state(&self, current: CellState, live_neighbours: usize) -> CellState {
        let (min, max) = match current {
            CellState::Alive => (self.min_survive, self.max_survive),
            CellState::Dead => (self.min_born, self.max_born),
        };
        CellState::from((min as usize..=max as usize).contains(&live_neighbours))
    }

    /// Count at which a dead cell is certainly too crowded to be born.
    ///
    /// Counting a dead cell's neighbours can stop here: any count at or
    /// above the cap yields the same verdict.
    pub fn birth_cap(&self) -> usize {
        self.max_born as usize + 1
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{}-{}/S{}-{}",
            self.min_born, self.max_born, self.min_survive, self.max_survive
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn conway() -> RuleSet {
        RuleSet::for_ndim(2)
    }

    // ── Derivation ──────────────────────────────────────────────

    #[test]
    fn two_dimensions_is_conway() {
        let r = conway();
        assert_eq!(r.max_born, 3);
        assert_eq!(r.min_born, 3);
        assert_eq!(r.max_survive, 3);
        assert_eq!(r.min_survive, 2);
    }

    #[test]
    fn three_dimensions_rounds_half_up() {
        // part = 26 / 8 = 3; 2.5 * 3 = 7.5 -> 8, 1.5 * 3 = 4.5 -> 5.
        let r = RuleSet::for_ndim(3);
        assert_eq!(
            r,
            RuleSet {
                min_survive: 5,
                max_survive: 9,
                min_born: 8,
                max_born: 8,
            }
        );
    }

    #[test]
    fn four_dimensions() {
        // part = 80 / 8 = 10.
        let r = RuleSet::for_ndim(4);
        assert_eq!(
            r,
            RuleSet {
                min_survive: 15,
                max_survive: 30,
                min_born: 25,
                max_born: 28,
            }
        );
    }

    #[test]
    fn one_dimension_has_zero_thresholds() {
        let r = RuleSet::for_ndim(1);
        assert_eq!(r, RuleSet::for_ndim(0));
        assert_eq!(r.max_born, 0);
        assert_eq!(r.min_survive, 0);
    }

    #[test]
    fn overrides_replace_only_given_thresholds() {
        let r = conway().with_overrides(&RuleOverrides {
            max_born: Some(4),
            min_survive: Some(1),
            ..RuleOverrides::default()
        });
        assert_eq!(r.max_born, 4);
        assert_eq!(r.min_born, 3);
        assert_eq!(r.max_survive, 3);
        assert_eq!(r.min_survive, 1);
    }

    #[test]
    fn consistency() {
        assert!(conway().is_consistent());
        let bad = conway().with_overrides(&RuleOverrides {
            min_born: Some(5),
            ..RuleOverrides::default()
        });
        assert!(!bad.is_consistent());
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(conway().to_string(), "B3-3/S2-3");
    }

    // ── Evaluation ──────────────────────────────────────────────

    #[test]
    fn cell_dies_with_too_few_neighbours() {
        let r = conway();
        let n = r.min_survive as usize - 1;
        assert_eq!(r.next_state(CellState::Alive, n), CellState::Dead);
    }

    #[test]
    fn cell_survives_with_just_enough_neighbours() {
        let r = conway();
        let n = r.min_survive as usize;
        assert_eq!(r.next_state(CellState::Alive, n), CellState::Alive);
    }

    #[test]
    fn cell_survives_with_just_few_enough_neighbours() {
        let r = conway();
        let n = r.max_survive as usize;
        assert_eq!(r.next_state(CellState::Alive, n), CellState::Alive);
    }

    #[test]
    fn cell_dies_with_too_many_neighbours() {
        let r = conway();
        let n = r.max_survive as usize + 1;
        assert_eq!(r.next_state(CellState::Alive, n), CellState::Dead);
    }

    #[test]
    fn birth_bounds_are_inclusive() {
        let r = RuleSet::for_ndim(4);
        let lo = r.min_born as usize;
        let hi = r.max_born as usize;
        assert_eq!(r.next_state(CellState::Dead, lo - 1), CellState::Dead);
        assert_eq!(r.next_state(CellState::Dead, lo), CellState::Alive);
        assert_eq!(r.next_state(CellState::Dead, hi), CellState::Alive);
        assert_eq!(r.next_state(CellState::Dead, hi + 1), CellState::Dead);
    }

    #[test]
    fn birth_cap_is_one_past_max_born() {
        assert_eq!(conway().birth_cap(), 4);
        assert_eq!(
            conway().next_state(CellState::Dead, conway().birth_cap()),
            CellState::Dead
        );
    }

    proptest! {
        #[test]
        fn derived_thresholds_are_consistent(ndim in 0usize..12) {
            let r = RuleSet::for_ndim(ndim);
            prop_assert!(r.is_consistent());
            prop_assert!(r.min_survive <= r.min_born);
            prop_assert!(r.max_born <= r.max_survive);
        }

        #[test]
        fn verdict_is_stable_at_and_above_cap(ndim in 2usize..6, extra in 0usize..50) {
            let r = RuleSet::for_ndim(ndim);
            prop_assert_eq!(
                r.next_state(CellState::Dead, r.birth_cap() + extra),
                CellState::Dead
            );
        }
    }
}
