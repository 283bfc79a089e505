//! The simulation world: live cells on a torus plus the rules that evolve them.
//!
//! # Stepping
//!
//! [`World::step`] computes the next generation purely from the current
//! one. Live cells are evaluated first; while counting their neighbours,
//! every dead neighbour is collected as a birth candidate. Candidates are
//! then evaluated with a count that stops at [`RuleSet::birth_cap`]. The new
//! cell set is built separately and swapped in at the end, so no cell ever
//! observes another cell's next-generation state and the result does not
//! depend on iteration order.
//!
//! A dead cell with no live neighbour is never a candidate, so a birth
//! range starting at zero only births cells adjacent to life.

use std::time::Instant;

use ndlife_core::{CellSet, CellState, Coord, GenerationId, Pattern};
use ndlife_space::{NeighbourCache, SpaceError, Torus};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::{ConfigError, Shape, WorldConfig, MAX_NDIM};
use crate::metrics::StepMetrics;
use crate::render;
use crate::rules::RuleSet;

/// An N-dimensional toroidal Game of Life.
///
/// Created from a [`WorldConfig`] via [`new()`](World::new). The shape and
/// thresholds are fixed for the lifetime of the world; only the live-cell
/// set changes, once per [`step()`](World::step).
///
/// # Example
///
/// ```
/// use ndlife_engine::{World, WorldConfig};
///
/// let mut world = World::new(WorldConfig::with_pattern([
///     "     ",
///     "  *  ",
///     "  *  ",
///     "  *  ",
///     "     ",
/// ]))
/// .unwrap();
/// world.step();
/// assert_eq!(world.dump(), "     \n     \n *** \n     \n     ");
/// ```
#[derive(Clone, Debug)]
pub struct World {
    cells: CellSet,
    rules: RuleSet,
    cache: NeighbourCache,
    generation: GenerationId,
    seed: Option<u64>,
    last_metrics: StepMetrics,
}

impl World {
    /// Build a world from `config`.
    ///
    /// Validates the configuration, builds the torus, and either absorbs
    /// the pattern or seeds `pct_alive` percent of the cells at random.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = config.resolved_rules();
        let (torus, cells, seed) = match &config.shape {
            Shape::Pattern(pattern) => {
                let absorbed = pattern.absorb();
                (Torus::new(&absorbed.dims)?, absorbed.cells, None)
            }
            Shape::Dimensions(dims) => {
                let torus = Torus::new(dims)?;
                let seed = config.seed.unwrap_or_else(|| rand::rng().random());
                let cells = seed_cells(&torus, config.pct_alive, seed)?;
                (torus, cells, Some(seed))
            }
        };
        debug!(
            dims = ?torus.dims(),
            rules = %rules,
            population = cells.len(),
            seed = ?seed,
            "world constructed"
        );
        Ok(Self {
            cells,
            rules,
            cache: NeighbourCache::new(torus),
            generation: GenerationId::default(),
            seed,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Shorthand for [`World::new`] with [`WorldConfig::with_pattern`].
    pub fn from_pattern(pattern: impl Into<Pattern>) -> Result<Self, ConfigError> {
        Self::new(WorldConfig::with_pattern(pattern))
    }

    /// A world with an explicit shape, cell set, and thresholds.
    ///
    /// Every cell must lie inside `dims`, and `dims` may have at most
    /// [`MAX_NDIM`] axes.
    pub fn from_cells(dims: &[u32], cells: CellSet, rules: RuleSet) -> Result<Self, ConfigError> {
        if dims.len() > MAX_NDIM {
            return Err(ConfigError::TooManyDimensions {
                ndim: dims.len(),
                max: MAX_NDIM,
            });
        }
        let torus = Torus::new(dims)?;
        for coord in &cells {
            torus.check_bounds(coord)?;
        }
        if !rules.is_consistent() {
            return Err(ConfigError::InvalidRules { rules });
        }
        Ok(Self {
            cells,
            rules,
            cache: NeighbourCache::new(torus),
            generation: GenerationId::default(),
            seed: None,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance one generation.
    ///
    /// Returns the metrics for this step; they are also kept until the next
    /// step and available through [`last_metrics()`](Self::last_metrics).
    pub fn step(&mut self) -> StepMetrics {
        let start = Instant::now();
        let cache_before = self.cache.stats();
        let live = &self.cells;
        let mut next = CellSet::with_capacity(live.len());
        let mut dead_candidates = CellSet::new();

        for coord in live {
            let n = self
                .cache
                .count_live_collecting(coord, live, &mut dead_candidates);
            if self.rules.next_state(CellState::Alive, n).is_alive() {
                next.insert(coord.clone());
            }
        }
        let survivors = next.len();

        let cap = self.rules.birth_cap();
        for coord in &dead_candidates {
            let n = self.cache.count_live_capped(coord, live, cap);
            if self.rules.next_state(CellState::Dead, n).is_alive() {
                next.insert(coord.clone());
            }
        }

        let live_before = live.len();
        let births = next.len() - survivors;
        self.cells = next;
        self.generation = self.generation.next();

        let cache_after = self.cache.stats();
        let metrics = StepMetrics {
            total_us: elapsed_us(start),
            live_before,
            live_after: self.cells.len(),
            dead_candidates: dead_candidates.len(),
            births,
            deaths: live_before - survivors,
            cache_entries: self.cache.len(),
            cache_hits: cache_after.hits - cache_before.hits,
            cache_misses: cache_after.misses - cache_before.misses,
        };
        trace!(
            generation = %self.generation,
            live = metrics.live_after,
            births = metrics.births,
            deaths = metrics.deaths,
            candidates = metrics.dead_candidates,
            total_us = metrics.total_us,
            "step"
        );
        self.last_metrics = metrics;
        metrics
    }

    /// Render the live cells as folded 2-D text.
    ///
    /// See [`render`](crate::render) for the layout.
    pub fn dump(&self) -> String {
        render::dump(&self.cells, self.dimensions())
    }

    /// Live-neighbour count of `coord` against the current generation.
    ///
    /// Every neighbour entry is counted, including repeats that arise on
    /// axes of size 1 or 2. Returns `Err(SpaceError::CoordOutOfBounds)` for
    /// coordinates outside the grid.
    pub fn count_neighbours(&mut self, coord: &Coord) -> Result<usize, SpaceError> {
        self.cache.torus().check_bounds(coord)?;
        Ok(self.cache.count_live(coord, &self.cells))
    }

    /// Next state of a cell in `state` with `live_neighbours` live neighbours.
    pub fn next_cell_state(&self, state: CellState, live_neighbours: usize) -> CellState {
        self.rules.next_state(state, live_neighbours)
    }

    /// The current live cells.
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Whether `coord` is alive in the current generation.
    pub fn is_alive(&self, coord: &Coord) -> bool {
        self.cells.contains(coord)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        self.cells.is_empty()
    }

    /// Axis sizes, outermost first.
    pub fn dimensions(&self) -> &[u32] {
        self.cache.torus().dims()
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.cache.torus().ndim()
    }

    /// Birth and survival thresholds.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Most live neighbours that still bring a dead cell to life.
    pub fn max_born(&self) -> u32 {
        self.rules.max_born
    }

    /// Fewest live neighbours that bring a dead cell to life.
    pub fn min_born(&self) -> u32 {
        self.rules.min_born
    }

    /// Most live neighbours a live cell tolerates.
    pub fn max_survive(&self) -> u32 {
        self.rules.max_survive
    }

    /// Fewest live neighbours a live cell needs.
    pub fn min_survive(&self) -> u32 {
        self.rules.min_survive
    }

    /// Generations stepped since construction.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Seed used for random seeding, if the world was seeded randomly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Metrics from the most recent step (all zero before the first).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The neighbour cache, for inspection.
    pub fn neighbour_cache(&self) -> &NeighbourCache {
        &self.cache
    }
}

/// Pick `floor(cell_count * pct / 100)` distinct cells uniformly at random.
///
/// Each draw picks every axis independently; a draw that lands on an
/// already-live cell is simply absorbed by the set.
fn seed_cells(torus: &Torus, pct_alive: u32, seed: u64) -> Result<CellSet, ConfigError> {
    // pct_alive <= 100 after validation, so the quotient fits in u64.
    let target = (u128::from(torus.cell_count()) * u128::from(pct_alive) / 100) as u64;
    let target_len =
        usize::try_from(target).map_err(|_| ConfigError::PopulationTooLarge { target })?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = CellSet::with_capacity(target_len);
    while cells.len() < target_len {
        let coord: Coord = torus
            .dims()
            .iter()
            .map(|&len| rng.random_range(0..len) as i32)
            .collect();
        cells.insert(coord);
    }
    Ok(cells)
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}
