//! Per-generation performance metrics.
//!
//! [`StepMetrics`] captures timing, population, and cache data for a single
//! call to [`World::step`](crate::World::step).

/// Timing and bookkeeping collected during one generation step.
///
/// Durations are in microseconds. Cache counters cover this step only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Live cells before the step.
    pub live_before: usize,
    /// Live cells after the step.
    pub live_after: usize,
    /// Distinct dead cells adjacent to at least one live cell.
    pub dead_candidates: usize,
    /// Dead cells that became alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Neighbour lists stored in the cache after the step.
    pub cache_entries: usize,
    /// Neighbour lookups served from the cache during the step.
    pub cache_hits: u64,
    /// Neighbour lists computed during the step.
    pub cache_misses: u64,
}

impl StepMetrics {
    /// Live cells that stayed alive.
    pub fn survivors(&self) -> usize {
        self.live_before - self.deaths
    }

    /// Cells whose neighbourhood was evaluated (live cells plus candidates).
    pub fn cells_evaluated(&self) -> usize {
        self.live_before + self.dead_candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.live_before, 0);
        assert_eq!(m.live_after, 0);
        assert_eq!(m.dead_candidates, 0);
        assert_eq!(m.births, 0);
        assert_eq!(m.deaths, 0);
        assert_eq!(m.cache_entries, 0);
        assert_eq!(m.cache_hits, 0);
        assert_eq!(m.cache_misses, 0);
    }

    #[test]
    fn derived_counts() {
        let m = StepMetrics {
            live_before: 10,
            live_after: 9,
            dead_candidates: 30,
            births: 2,
            deaths: 3,
            ..StepMetrics::default()
        };
        assert_eq!(m.survivors(), 7);
        assert_eq!(m.cells_evaluated(), 40);
    }
}
