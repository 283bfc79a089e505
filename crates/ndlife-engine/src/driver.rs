//! Run a world until it dies out, repeats itself, or hits a limit.
//!
//! [`Driver`] numbers generations from 1 (the initial state) and remembers
//! the dump of every generation it has shown. A run ends when:
//!
//! - the world has no live cells ([`Outcome::Extinct`]),
//! - the new dump equals an earlier one, so the world is still or cycling
//!   ([`Outcome::Repeated`]),
//! - the optional step limit is reached ([`Outcome::LimitReached`]).

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::world::World;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No live cells remain in `generation`.
    Extinct {
        /// Generation with no live cells.
        generation: u64,
    },
    /// `generation` renders identically to `first_seen`.
    Repeated {
        /// The generation that repeated.
        generation: u64,
        /// The earliest generation with the same dump.
        first_seen: u64,
    },
    /// The step limit was reached with `generation` as the final state.
    LimitReached {
        /// The final generation.
        generation: u64,
    },
}

impl Outcome {
    /// The generation at which the run ended.
    pub fn generation(&self) -> u64 {
        match *self {
            Self::Extinct { generation }
            | Self::Repeated { generation, .. }
            | Self::LimitReached { generation } => generation,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extinct { .. } => write!(f, "All dead...."),
            Self::Repeated {
                generation,
                first_seen,
            } => write!(
                f,
                "Stability reached!  Generation {generation} is the same as generation {first_seen}"
            ),
            Self::LimitReached { generation } => {
                write!(f, "Stopped at generation {generation}")
            }
        }
    }
}

/// One displayed generation.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Generation number, starting at 1.
    pub generation: u64,
    /// Live cells in this generation.
    pub population: usize,
    /// Rendered grid.
    pub dump: &'a str,
}

/// Summary of a finished run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    /// Why the run ended.
    pub outcome: Outcome,
    /// Steps taken.
    pub generations: u64,
    /// Sum of [`StepMetrics::total_us`](crate::StepMetrics::total_us) over all steps.
    pub total_step_us: u64,
    /// Sum of the population of every stepped generation.
    pub cells_processed: u64,
}

impl RunReport {
    /// Average step time per live cell processed, in microseconds.
    pub fn mean_us_per_cell(&self) -> f64 {
        if self.cells_processed == 0 {
            return 0.0;
        }
        self.total_step_us as f64 / self.cells_processed as f64
    }
}

/// Steps a [`World`] and detects extinction and repetition.
#[derive(Debug)]
pub struct Driver {
    world: World,
    history: IndexMap<String, u64>,
    generation: u64,
    current: String,
    repeat_of: Option<u64>,
    limit: Option<u64>,
    steps: u64,
    total_step_us: u64,
    cells_processed: u64,
}

impl Driver {
    /// Start driving `world` from its current state as generation 1.
    pub fn new(world: World) -> Self {
        let current = world.dump();
        Self {
            world,
            history: IndexMap::new(),
            generation: 1,
            current,
            repeat_of: None,
            limit: None,
            steps: 0,
            total_step_us: 0,
            cells_processed: 0,
        }
    }

    /// Stop after at most `steps` steps.
    pub fn with_limit(mut self, steps: u64) -> Self {
        self.limit = Some(steps);
        self
    }

    /// The driven world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current generation number.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Dump of the current generation.
    pub fn current_dump(&self) -> &str {
        &self.current
    }

    /// The current generation as a [`Frame`].
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            generation: self.generation,
            population: self.world.population(),
            dump: &self.current,
        }
    }

    /// Why the run is over, or `None` if it can continue.
    pub fn outcome(&self) -> Option<Outcome> {
        let generation = self.generation;
        if self.world.is_extinct() {
            return Some(Outcome::Extinct { generation });
        }
        if let Some(first_seen) = self.repeat_of {
            return Some(Outcome::Repeated {
                generation,
                first_seen,
            });
        }
        match self.limit {
            Some(limit) if self.steps >= limit => Some(Outcome::LimitReached { generation }),
            _ => None,
        }
    }

    /// Record the current generation and advance the world by one.
    ///
    /// Does nothing once the run is over. Returns the outcome after the step.
    pub fn step(&mut self) -> Option<Outcome> {
        if let Some(done) = self.outcome() {
            return Some(done);
        }
        self.cells_processed += self.world.population() as u64;
        let shown = std::mem::take(&mut self.current);
        self.history.entry(shown).or_insert(self.generation);

        let metrics = self.world.step();
        self.steps += 1;
        self.generation += 1;
        self.total_step_us += metrics.total_us;
        self.current = self.world.dump();
        self.repeat_of = self.history.get(&self.current).copied();
        self.outcome()
    }

    /// Run to completion, calling `on_frame` for every generation that is
    /// stepped from.
    pub fn run(&mut self, mut on_frame: impl FnMut(Frame<'_>)) -> RunReport {
        let outcome = loop {
            if let Some(done) = self.outcome() {
                break done;
            }
            on_frame(self.frame());
            self.step();
        };
        debug!(
            %outcome,
            steps = self.steps,
            total_step_us = self.total_step_us,
            "run finished"
        );
        RunReport {
            outcome,
            generations: self.steps,
            total_step_us: self.total_step_us,
            cells_processed: self.cells_processed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndlife_test_utils::fixtures;

    fn driver(p: impl Into<ndlife_core::Pattern>) -> Driver {
        Driver::new(World::from_pattern(p).unwrap())
    }

    #[test]
    fn empty_world_is_extinct_immediately() {
        let mut d = driver(["   ", "   "]);
        let mut frames = 0;
        let report = d.run(|_| frames += 1);
        assert_eq!(frames, 0);
        assert_eq!(report.outcome, Outcome::Extinct { generation: 1 });
        assert_eq!(report.generations, 0);
        assert_eq!(report.mean_us_per_cell(), 0.0);
    }

    #[test]
    fn lone_cell_dies_in_generation_two() {
        let mut d = driver(["   ", " * ", "   "]);
        let report = d.run(|_| {});
        assert_eq!(report.outcome, Outcome::Extinct { generation: 2 });
        assert_eq!(report.cells_processed, 1);
    }

    #[test]
    fn block_repeats_immediately() {
        let mut d = driver(fixtures::block());
        let report = d.run(|_| {});
        assert_eq!(
            report.outcome,
            Outcome::Repeated {
                generation: 2,
                first_seen: 1
            }
        );
        assert_eq!(report.cells_processed, 4);
    }

    #[test]
    fn blinker_repeats_with_period_two() {
        let (vertical, _) = fixtures::blinker();
        let mut d = driver(vertical);
        let mut seen = Vec::new();
        let report = d.run(|f| seen.push((f.generation, f.population)));
        assert_eq!(seen, vec![(1, 3), (2, 3)]);
        assert_eq!(
            report.outcome,
            Outcome::Repeated {
                generation: 3,
                first_seen: 1
            }
        );
        assert_eq!(
            report.outcome.to_string(),
            "Stability reached!  Generation 3 is the same as generation 1"
        );
    }

    #[test]
    fn glider_wraps_back_to_start() {
        let mut d = driver(fixtures::glider());
        let report = d.run(|_| {});
        assert_eq!(
            report.outcome,
            Outcome::Repeated {
                generation: 25,
                first_seen: 1
            }
        );
        assert_eq!(report.generations, 24);
        assert_eq!(report.cells_processed, 24 * 5);
    }

    #[test]
    fn limit_stops_the_run() {
        let mut d = driver(fixtures::glider()).with_limit(5);
        let mut frames = 0;
        let report = d.run(|_| frames += 1);
        assert_eq!(frames, 5);
        assert_eq!(report.outcome, Outcome::LimitReached { generation: 6 });
        assert_eq!(d.generation(), 6);
    }

    #[test]
    fn step_after_finish_is_a_no_op() {
        let mut d = driver(fixtures::block());
        assert_eq!(d.step(), Some(Outcome::Repeated { generation: 2, first_seen: 1 }));
        let dump = d.current_dump().to_owned();
        assert_eq!(d.step(), Some(Outcome::Repeated { generation: 2, first_seen: 1 }));
        assert_eq!(d.current_dump(), dump);
        assert_eq!(d.world().generation().0, 1);
    }

    #[test]
    fn frame_reflects_current_state() {
        let d = driver(["* ", " *"]);
        let f = d.frame();
        assert_eq!(f.generation, 1);
        assert_eq!(f.population, 2);
        assert_eq!(f.dump, "* \n *");
    }
}
