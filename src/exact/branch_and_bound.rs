//! Pruned recursive backtracking (branch-and-bound).
//!
//! # Algorithm
//!
//! Same choose/explore/un-choose recursion as
//! [`BacktrackingSolver`](super::BacktrackingSolver), with two cuts applied
//! while the route is being built:
//!
//! 1. A candidate next point that would make the last turn sharper than 90°
//!    is skipped, so every partial route is feasible.
//! 2. Once an incumbent exists, a partial route already longer than it is
//!    abandoned; appending points can only add length.
//!
//! A complete route is therefore feasible on arrival and only its length is
//! compared (strict improvement).

use crate::error::Result;
use crate::evaluation::RouteEvaluator;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Exact search with turn and length pruning.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::exact::BranchAndBoundSolver;
/// use u_turnroute::solver::RouteSolver;
///
/// // Every ordering of an equilateral triangle turns through 60°.
/// let h = 3f64.sqrt() / 2.0;
/// let points = vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0]), Point::new([0.5, h])];
/// assert!(BranchAndBoundSolver::new().solve(&points).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundSolver {
    time_limit_ms: u64,
}

impl BranchAndBoundSolver {
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

impl RouteSolver for BranchAndBoundSolver {
    fn name(&self) -> &'static str {
        "branch_and_bound"
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
        search.explore(&mut route, &mut used, 0.0)?;

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
    fn explore(&mut self, route: &mut Vec<usize>, used: &mut [bool], length: f64) -> Result<()> {
        self.stats.nodes += 1;
        self.deadline.check()?;

        if self.incumbent.length().is_some_and(|best| best < length) {
            return Ok(());
        }

        if route.len() == used.len() {
            self.stats.complete_routes += 1;
            if self.incumbent.offer(route, length) {
                self.stats.improvements += 1;
            }
            return Ok(());
        }

        let tail = match route[..] {
            [.., p, q] => Some((Some(p), q)),
            [q] => Some((None, q)),
            [] => None,
        };

        for next in 0..used.len() {
            if used[next] {
                continue;
            }
            let step = match tail {
                Some((Some(p), q)) => {
                    if !self.eval.turn_valid(p, q, next) {
                        continue;
                    }
                    self.eval.distance(q, next)
                }
                Some((None, q)) => self.eval.distance(q, next),
                None => 0.0,
            };
            used[next] = true;
            route.push(next);
            self.explore(route, used, length + step)?;
            route.pop();
            used[next] = false;
        }
        Ok(())
    }
}
