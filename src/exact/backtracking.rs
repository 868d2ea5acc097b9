//! Unpruned recursive backtracking.
//!
//! # Algorithm
//!
//! Chooses each position in turn from the points not yet used, recurses,
//! then un-chooses. Feasibility and length are tested only once a route is
//! complete. Same result as [`BruteForceSolver`](super::BruteForceSolver),
//! structured recursively; it is the baseline for
//! [`BranchAndBoundSolver`](super::BranchAndBoundSolver).
//!
//! # Complexity
//!
//! O(n! · n) time, O(n) recursion depth.

use crate::error::Result;
use crate::evaluation::RouteEvaluator;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Exhaustive recursive enumeration without pruning.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSolver {
    time_limit_ms: u64,
}

impl BacktrackingSolver {
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

impl RouteSolver for BacktrackingSolver {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn solve_with_stats(&self, points: &[Point]) -> Result<SearchOutcome> {
        let instance = Instance::new(points)?;
        if let Some(outcome) = trivial_outcome(&instance) {
            return Ok(outcome);
        }
        let n = instance.len();
        let mut search = Search {
            eval: instance.evaluator(),
            incumbent: Incumbent::new(),
            stats: SearchStats::default(),
            deadline: Deadline::from_millis(self.time_limit_ms),
        };
        let mut route = Vec::with_capacity(n);
        let mut used = vec![false; n];
        search.explore(&mut route, &mut used)?;

        let Search {
            incumbent,
            stats,
            deadline,
            ..
        } = search;
        Ok(finish(self.name(), &instance, incumbent, stats, &deadline))
    }
}

struct Search<'a> {
    eval: RouteEvaluator<'a>,
    incumbent: Incumbent,
    stats: SearchStats,
    deadline: Deadline,
}

impl Search<'_> {
    fn explore(&mut self, route: &mut Vec<usize>, used: &mut [bool]) -> Result<()> {
        self.stats.nodes += 1;
        self.deadline.check()?;

        if route.len() == used.len() {
            self.stats.complete_routes += 1;
            if self.eval.is_feasible(route)
                && self.incumbent.offer(route, self.eval.length(route))
            {
                self.stats.improvements += 1;
            }
            return Ok(());
        }

        for next in 0..used.len() {
            if used[next] {
                continue;
            }
            used[next] = true;
            route.push(next);
            self.explore(route, used)?;
            route.pop();
            used[next] = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|c| Point::new(*c)).collect()
    }

    #[test]
    fn test_visits_full_tree() {
        let out = BacktrackingSolver::new()
            .solve_with_stats(&pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]))
            .expect("valid");
        // 1 + 4 + 12 + 24 + 24 nodes, 24 leaves
        assert_eq!(out.stats.nodes, 65);
        assert_eq!(out.stats.complete_routes, 24);
        let route = out.route.expect("feasible");
        assert!((route.length() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_square() {
        let route = BacktrackingSolver::new()
            .solve(&pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]))
            .expect("valid")
            .expect("feasible");
        assert!((route.length() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_result_is_permutation() {
        let route = BacktrackingSolver::new()
            .solve(&pts(&[[0.0, 0.0], [3.0, 1.0], [3.0, 4.0], [-1.0, 5.0], [-2.0, -2.0]]))
            .expect("valid")
            .expect("feasible");
        let mut order = route.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
