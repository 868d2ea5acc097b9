//! Nearest-neighbor constructive heuristic under the turning-angle constraint.
//!
//! Builds a route greedily: from the current last two points, always move to
//! the closest unused point that keeps the turn at least 90°. There is no
//! backtracking, so a construction that runs out of valid candidates fails
//! even when a feasible route exists.
//!
//! # Complexity
//!
//! O(n²) per construction (n steps, each scanning the unused points).

use crate::error::Result;
use crate::evaluation::RouteEvaluator;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Extends `route` (at least two points) greedily until every point is used.
///
/// `used` must mark exactly the points already on `route`. Returns `false`,
/// leaving `route` partially extended, if some step has no turn-valid
/// candidate. Each step counts as one node in `stats`.
pub(crate) fn greedy_extend(
    eval: &RouteEvaluator<'_>,
    route: &mut Vec<usize>,
    used: &mut [bool],
    stats: &mut SearchStats,
) -> bool {
    debug_assert!(route.len() >= 2);
    let n = used.len();
    while route.len() < n {
        stats.nodes += 1;
        let (p, q) = (route[route.len() - 2], route[route.len() - 1]);
        let unused = (0..n).filter(|&c| !used[c]);
        let Some(next) = eval
            .distances()
            .nearest(q, unused, |c| eval.turn_valid(p, q, c))
        else {
            return false;
        };
        used[next] = true;
        route.push(next);
    }
    true
}

/// Greedy route from `start`: the second point is the nearest one (no turn
/// to check yet), the rest follow [`greedy_extend`].
///
/// Requires at least two points.
pub(crate) fn construct_from(
    eval: &RouteEvaluator<'_>,
    start: usize,
    n: usize,
    stats: &mut SearchStats,
) -> Option<Vec<usize>> {
    let mut used = vec![false; n];
    used[start] = true;
    let second = eval
        .distances()
        .nearest(start, (0..n).filter(|&c| c != start), |_| true)?;
    used[second] = true;
    let mut route = Vec::with_capacity(n);
    route.push(start);
    route.push(second);
    stats.nodes += 1;
    greedy_extend(eval, &mut route, &mut used, stats).then_some(route)
}

/// Single greedy construction starting at the first input point.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::constructive::NearestNeighborSolver;
/// use u_turnroute::solver::RouteSolver;
///
/// let points = vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
///     Point::new([0.0, 1.0]),
/// ];
/// let route = NearestNeighborSolver::new().solve(&points).unwrap().unwrap();
/// assert_eq!(route.order(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestNeighborSolver;

impl NearestNeighborSolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }
}

impl RouteSolver for NearestNeighborSolver {
    fn name(&self) -> &'static str {
        "nearest_neighbor"
    }

    fn solve_with_stats(&self, points: &[Point]) -> Result<SearchOutcome> {
        let instance = Instance::new(points)?;
        if let Some(outcome) = trivial_outcome(&instance) {
            return Ok(outcome);
        }
        let deadline = Deadline::unlimited();
        let eval = instance.evaluator();
        let mut stats = SearchStats::default();
        let mut incumbent = Incumbent::new();

        if let Some(route) = construct_from(&eval, 0, instance.len(), &mut stats) {
            stats.complete_routes += 1;
            incumbent.offer(&route, eval.length(&route));
            stats.improvements += 1;
        }

        Ok(finish(self.name(), &instance, incumbent, stats, &deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|c| Point::new(*c)).collect()
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let route = NearestNeighborSolver::new()
            .solve(&pts(&[[0.0, 0.0], [10.0, 0.0], [1.0, 0.0]]))
            .expect("valid")
            .expect("feasible");
        assert_eq!(route.order(), &[0, 2, 1]);
        assert!((route.length() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_dead_end_returns_none() {
        // 0 -> (1,1) -> (2,0) is a right angle; (2,3) then lies behind the
        // last leg, so the construction has no valid next point.
        let route = NearestNeighborSolver::new()
            .solve(&pts(&[[0.0, 0.0], [2.0, 0.0], [1.0, 1.0], [2.0, 3.0]]))
            .expect("valid");
        assert!(route.is_none());
    }

    #[test]
    fn test_nn_skips_sharp_turn() {
        let points = pts(&[[0.0, 0.0], [1.0, 0.0], [0.9, 0.5], [1.0, 0.6]]);
        let instance = Instance::new(&points).expect("valid");
        let eval = instance.evaluator();
        let mut route = vec![0, 1];
        let mut used = vec![true, true, false, false];
        let mut stats = SearchStats::default();
        // (0.9,0.5) is nearer to (1,0) but would turn back at under 90°.
        assert!(!greedy_extend(&eval, &mut route, &mut used, &mut stats));
        assert_eq!(route, vec![0, 1, 3]);
    }

    #[test]
    fn test_nn_fails_without_backtracking() {
        // Equilateral triangle: no valid third point from any start.
        let h = 3f64.sqrt() / 2.0;
        let route = NearestNeighborSolver::new()
            .solve(&pts(&[[0.0, 0.0], [1.0, 0.0], [0.5, h]]))
            .expect("valid");
        assert!(route.is_none());
    }

    #[test]
    fn test_nn_trivial() {
        let two = pts(&[[3.0, 3.0], [0.0, 0.0]]);
        let route = NearestNeighborSolver::new()
            .solve(&two)
            .expect("valid")
            .expect("route");
        assert_eq!(route.order(), &[0, 1]);
    }

    #[test]
    fn test_greedy_extend_marks_used() {
        let points = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        let instance = Instance::new(&points).expect("valid");
        let eval = instance.evaluator();
        let mut route = vec![0, 1];
        let mut used = vec![true, true, false, false];
        let mut stats = SearchStats::default();
        assert!(greedy_extend(&eval, &mut route, &mut used, &mut stats));
        assert_eq!(route, vec![0, 1, 2, 3]);
        assert!(used.iter().all(|&u| u));
        assert_eq!(stats.nodes, 2);
    }
}
