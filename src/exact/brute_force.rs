//! Full permutation enumeration.
//!
//! # Algorithm
//!
//! Walks all n! orderings of the input with Heap's algorithm, one
//! transposition per step, and keeps the shortest feasible one. No pruning:
//! this is the reference every other strategy is checked against.
//!
//! # Complexity
//!
//! O(n! · n) time, O(n) extra space.

use super::HeapPermutations;
use crate::error::Result;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Exhaustive search over every permutation.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::exact::BruteForceSolver;
/// use u_turnroute::solver::RouteSolver;
///
/// let points = vec![Point::new([2.0, 0.0]), Point::new([0.0, 0.0]), Point::new([1.0, 0.0])];
/// let route = BruteForceSolver::new().solve(&points).unwrap().unwrap();
/// assert!((route.length() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BruteForceSolver {
    time_limit_ms: u64,
}

impl BruteForceSolver {
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

impl RouteSolver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "brute_force"
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

        let mut order: Vec<usize> = (0..instance.len()).collect();
        let mut heap = HeapPermutations::new(order.len());
        loop {
            stats.nodes += 1;
            stats.complete_routes += 1;
            if eval.is_feasible(&order) && incumbent.offer(&order, eval.length(&order)) {
                stats.improvements += 1;
            }
            deadline.check()?;
            if !heap.advance(&mut order) {
                break;
            }
        }

        Ok(finish(self.name(), &instance, incumbent, stats, &deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|c| Point::new(*c)).collect()
    }

    #[test]
    fn test_collinear() {
        let out = BruteForceSolver::new()
            .solve_with_stats(&pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]))
            .expect("valid");
        let route = out.route.expect("feasible");
        assert!((route.length() - 2.0).abs() < 1e-10);
        assert_eq!(out.stats.complete_routes, 6);
    }

    #[test]
    fn test_square() {
        let route = BruteForceSolver::new()
            .solve(&pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]))
            .expect("valid")
            .expect("feasible");
        assert!((route.length() - 3.0).abs() < 1e-10);
        assert_eq!(route.is_feasible(), Ok(true));
    }

    #[test]
    fn test_infeasible_triangle() {
        // Equilateral: every turn is 60°.
        let h = 3f64.sqrt() / 2.0;
        let route = BruteForceSolver::new()
            .solve(&pts(&[[0.0, 0.0], [1.0, 0.0], [0.5, h]]))
            .expect("valid");
        assert!(route.is_none());
    }

    #[test]
    fn test_trivial_sizes_keep_input_order() {
        let solver = BruteForceSolver::new();
        assert_eq!(solver.solve(&[]).expect("valid").expect("route").len(), 0);
        let two = pts(&[[5.0, 5.0], [0.0, 0.0]]);
        let route = solver.solve(&two).expect("valid").expect("route");
        assert_eq!(route.points(), &two[..]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let points = vec![Point::new([0.0]), Point::new([1.0]), Point::new([1.0, 2.0])];
        assert!(matches!(
            BruteForceSolver::new().solve(&points),
            Err(RouteError::DimensionMismatch { index: 2, .. })
        ));
    }

    #[test]
    fn test_time_limit() {
        let points: Vec<Point> = (0..13).map(|i| Point::new([i as f64, (i * i) as f64])).collect();
        let result = BruteForceSolver::new().with_time_limit(1).solve(&points);
        assert!(matches!(result, Err(RouteError::TimeLimitExceeded { .. })));
    }
}
