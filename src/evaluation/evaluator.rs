//! Index-based route evaluator.

use crate::distance::DistanceMatrix;
use crate::geometry::{turn_dot, Point};
use crate::models::Route;

/// Evaluates routes given as sequences of point indices.
///
/// All queries are O(dimension) or O(route length) and allocation-free
/// except [`build_route`](Self::build_route). The points must share one
/// dimension, which [`Instance`](crate::models::Instance) guarantees.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::models::Instance;
///
/// let instance = Instance::new(&[
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
/// ]).unwrap();
/// let eval = instance.evaluator();
/// assert!(eval.turn_valid(0, 1, 2));
/// assert!(!eval.turn_valid(1, 0, 2));
/// assert!((eval.length(&[0, 1, 2]) - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    points: &'a [Point],
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over `points` with their precomputed distances.
    pub fn new(points: &'a [Point], distances: &'a DistanceMatrix) -> Self {
        Self { points, distances }
    }

    /// Turning-angle test for the triple of indices `p, q, r`.
    #[inline]
    pub fn turn_valid(&self, p: usize, q: usize, r: usize) -> bool {
        turn_dot(&self.points[p], &self.points[q], &self.points[r]) <= 0.0
    }

    /// Returns `true` if every consecutive triple of `order` is turn-valid.
    pub fn is_feasible(&self, order: &[usize]) -> bool {
        order.windows(3).all(|w| self.turn_valid(w[0], w[1], w[2]))
    }

    /// Distance between two indexed points.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Total length of the route visiting `order` in sequence.
    pub fn length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }

    /// Materialises `order` as a [`Route`], copying the points.
    pub fn build_route(&self, order: &[usize]) -> Route {
        let points = order.iter().map(|&i| self.points[i].clone()).collect();
        Route::from_parts(points, order.to_vec(), self.length(order))
    }

    /// The distance matrix backing this evaluator.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }
}
