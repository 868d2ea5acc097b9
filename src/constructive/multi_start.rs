//! Multi-start nearest-neighbor.
//!
//! Runs the greedy construction once from every point and keeps the
//! shortest route that completes. O(n³) overall.

use super::nearest_neighbor::construct_from;
use crate::error::Result;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Greedy construction from every start point.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::constructive::MultiStartSolver;
/// use u_turnroute::solver::RouteSolver;
///
/// let points = vec![Point::new([1.0]), Point::new([0.0]), Point::new([2.0])];
/// let route = MultiStartSolver::new().solve(&points).unwrap().unwrap();
/// assert!((route.length() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiStartSolver {
    time_limit_ms: u64,
}

impl MultiStartSolver {
    /// Creates a solver without a time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time limit in milliseconds (0 = unlimited), checked between
    /// restarts.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}

impl RouteSolver for MultiStartSolver {
    fn name(&self) -> &'static str {
        "multi_start"
    }

    fn solve_with_stats(&self, points: &[Point]) -> Result<SearchOutcome> {
        let instance = Instance::new(points)?;
        if let Some(outcome) = trivial_outcome(&instance) {
            return Ok(outcome);
        }
        let mut deadline = Deadline::from_millis(self.time_limit_ms);
        let eval = instance.evaluator();
        let mut stats = SearchStats::default();
        let mut incumbent = Incumbent::new();
        let n = instance.len();

        for start in 0..n {
            deadline.check_coarse()?;
            let Some(route) = construct_from(&eval, start, n, &mut stats) else {
                continue;
            };
            stats.complete_routes += 1;
            if incumbent.offer(&route, eval.length(&route)) {
                stats.improvements += 1;
            }
        }

        Ok(finish(self.name(), &instance, incumbent, stats, &deadline))
    }
}
