//! Multi-start nearest-neighbor seeded by ordered point pairs.
//!
//! Every ordered pair `(i, j)`, `i != j`, is used as the first two points of
//! a route, which is then completed greedily. Fixing the first leg as well
//! as the start gives much better routes than [`MultiStartSolver`] at the
//! cost of O(n²) restarts, O(n⁴) overall.
//!
//! [`MultiStartSolver`]: super::MultiStartSolver

use super::nearest_neighbor::greedy_extend;
use crate::error::Result;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Greedy construction from every ordered starting pair.
#[derive(Debug, Clone, Default)]
pub struct PairedStartSolver {
    time_limit_ms: u64,
}

impl PairedStartSolver {
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

impl RouteSolver for PairedStartSolver {
    fn name(&self) -> &'static str {
        "paired_start"
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
        let mut route = Vec::with_capacity(n);
        let mut used = vec![false; n];

        for first in 0..n {
            for second in 0..n {
                if first == second {
                    continue;
                }
                deadline.check_coarse()?;
                route.clear();
                route.extend([first, second]);
                used.fill(false);
                used[first] = true;
                used[second] = true;
                stats.nodes += 1;
                if !greedy_extend(&eval, &mut route, &mut used, &mut stats) {
                    continue;
                }
                stats.complete_routes += 1;
                if incumbent.offer(&route, eval.length(&route)) {
                    stats.improvements += 1;
                }
            }
        }

        Ok(finish(self.name(), &instance, incumbent, stats, &deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::MultiStartSolver;
    use crate::exact::BranchAndBoundSolver;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|c| Point::new(*c)).collect()
    }

    #[test]
    fn test_square() {
        let route = PairedStartSolver::new()
            .solve(&pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]))
            .expect("valid")
            .expect("feasible");
        assert!((route.length() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_restart_count() {
        let out = PairedStartSolver::new()
            .solve_with_stats(&pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]))
            .expect("valid");
        // Only (0,1) and (3,2) extend along the whole line.
        assert_eq!(out.stats.complete_routes, 2);
    }

    #[test]
    fn test_bounds() {
        let points = pts(&[
            [0.0, 0.0],
            [2.0, 0.3],
            [2.2, 2.1],
            [0.1, 2.4],
            [-1.5, 1.0],
            [1.0, -1.7],
        ]);
        let exact = BranchAndBoundSolver::new().solve(&points).expect("valid");
        let paired = PairedStartSolver::new().solve(&points).expect("valid");
        let multi = MultiStartSolver::new().solve(&points).expect("valid");
        if let Some(p) = &paired {
            assert_eq!(p.is_feasible(), Ok(true));
            let e = exact.as_ref().expect("greedy success implies feasibility");
            assert!(p.length() + 1e-10 >= e.length());
        }
        // Every multi-start route also begins with some ordered pair.
        if let Some(m) = &multi {
            let p = paired.as_ref().expect("paired covers multi-start seeds");
            assert!(p.length() <= m.length() + 1e-10);
        }
    }
}
