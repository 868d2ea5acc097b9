//! Solver contract shared by every search strategy.
//!
//! A [`RouteSolver`] takes a slice of same-dimension points and returns
//! either a feasible route visiting every point exactly once or `None` when
//! no feasible ordering exists. Instances of at most two points always
//! succeed with the input order.
//!
//! [`build_solver`] picks a concrete strategy from a [`SolverConfig`].

mod config;
mod deadline;
mod incumbent;

pub use config::{build_solver, SolverConfig, Strategy, DEFAULT_EXACT_THRESHOLD};
pub use deadline::Deadline;
pub(crate) use incumbent::Incumbent;

use serde::Serialize;

use crate::error::Result;
use crate::geometry::Point;
use crate::models::{Instance, Route};

/// Work counters collected during one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search nodes expanded: recursive calls, permutations generated, or
    /// greedy extension steps, depending on the strategy.
    pub nodes: u64,
    /// Complete candidate routes examined.
    pub complete_routes: u64,
    /// Times the incumbent was replaced by a strictly shorter route.
    pub improvements: u64,
    /// Wall time of the solve in milliseconds.
    pub elapsed_ms: u64,
}

/// Result of one solve: the route (if any) plus work counters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best feasible route found, or `None` if none exists (or, for greedy
    /// strategies, none was found).
    pub route: Option<Route>,
    /// Work counters.
    pub stats: SearchStats,
}

/// A strategy for the bounded-turning-angle shortest-route problem.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::exact::BranchAndBoundSolver;
/// use u_turnroute::solver::RouteSolver;
///
/// let points = vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
///     Point::new([0.0, 1.0]),
/// ];
/// let route = BranchAndBoundSolver::new().solve(&points).unwrap().unwrap();
/// assert!((route.length() - 3.0).abs() < 1e-10);
/// ```
pub trait RouteSolver: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Solves the instance and reports work counters.
    ///
    /// # Errors
    ///
    /// Dimension mismatches, invalid parameters for this instance, or an
    /// exhausted time limit. A missing feasible route is `Ok` with
    /// `route: None`.
    fn solve_with_stats(&self, points: &[Point]) -> Result<SearchOutcome>;

    /// Solves the instance, returning only the route.
    fn solve(&self, points: &[Point]) -> Result<Option<Route>> {
        Ok(self.solve_with_stats(points)?.route)
    }
}

/// Input-order result for instances of at most two points.
pub(crate) fn trivial_outcome(instance: &Instance) -> Option<SearchOutcome> {
    if instance.len() > 2 {
        return None;
    }
    Some(SearchOutcome {
        route: Some(instance.input_order_route()),
        stats: SearchStats {
            complete_routes: 1,
            ..SearchStats::default()
        },
    })
}

/// Turns the final incumbent into an outcome and logs the counters.
pub(crate) fn finish(
    name: &str,
    instance: &Instance,
    incumbent: Incumbent,
    mut stats: SearchStats,
    deadline: &Deadline,
) -> SearchOutcome {
    stats.elapsed_ms = deadline.elapsed_ms();
    let route = incumbent
        .into_order()
        .map(|order| instance.evaluator().build_route(&order));
    match &route {
        Some(r) => log::debug!(
            "{name}: n={} length={:.6} nodes={} routes={} improvements={} in {} ms",
            instance.len(),
            r.length(),
            stats.nodes,
            stats.complete_routes,
            stats.improvements,
            stats.elapsed_ms
        ),
        None => log::debug!(
            "{name}: n={} no feasible route, nodes={} routes={} in {} ms",
            instance.len(),
            stats.nodes,
            stats.complete_routes,
            stats.elapsed_ms
        ),
    }
    SearchOutcome { route, stats }
}
