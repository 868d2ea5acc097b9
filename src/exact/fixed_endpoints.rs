//! Permutation enumeration with fixed endpoints.
//!
//! # Algorithm
//!
//! A route and its reverse have the same length and the same feasibility,
//! so it is enough to look at one orientation of each. For every unordered
//! pair `{i, j}` the route is pinned to start at `i` and end at `j`, and the
//! remaining `n - 2` points in between are permuted with Heap's algorithm.
//!
//! # Complexity
//!
//! `n(n-1)/2 · (n-2)!  =  n!/2` routes, each O(n) to test.

use super::HeapPermutations;
use crate::error::Result;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Exhaustive search over one orientation of every route.
#[derive(Debug, Clone, Default)]
pub struct FixedEndpointsSolver {
    time_limit_ms: u64,
}

impl FixedEndpointsSolver {
    /// Creates a solver without a time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time limit in milliseconds (0 = unlimited).
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}

impl RouteSolver for FixedEndpointsSolver {
    fn name(&self) -> &'static str {
        "fixed_endpoints"
    }

    fn solve_with_stats(&self, points: &[Point]) -> Result<SearchOutcome> {
        let instance = Instance::new(points)?;
        if let Some(outcome) = trivial_outcome(&instance) {
            return Ok(outcome);
        }
        let mut deadline = Deadline::from_millis(self.time_limit_ms);
        let eval = instance.evaluator();
        let mut incumbent = Incumbent::new();
        let mut stats = SearchStats::default();
        let n = instance.len();
        let mut order = Vec::with_capacity(n);

        for start in 0..n {
            for end in (start + 1)..n {
                order.clear();
                order.push(start);
                order.extend((0..n).filter(|&k| k != start && k != end));
                order.push(end);

                let mut heap = HeapPermutations::new(n - 2);
                loop {
                    stats.nodes += 1;
                    stats.complete_routes += 1;
                    if eval.is_feasible(&order) && incumbent.offer(&order, eval.length(&order)) {
                        stats.improvements += 1;
                    }
                    deadline.check()?;
                    if !heap.advance(&mut order[1..n - 1]) {
                        break;
                    }
                }
            }
        }

        Ok(finish(self.name(), &instance, incumbent, stats, &deadline))
    }
}
