//! Route type.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluation::{route_length, route_valid};
use crate::geometry::Point;

/// An ordered sequence of points with its total Euclidean length.
///
/// Routes produced by solvers also record `order`: the input index of each
/// visited point, so a result can be checked to be a permutation.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::models::Route;
///
/// let route = Route::new(vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
/// ]).unwrap();
/// assert_eq!(route.len(), 3);
/// assert!((route.length() - 2.0).abs() < 1e-10);
/// assert!(route.is_feasible().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Point>,
    order: Vec<usize>,
    length: f64,
}

impl Route {
    /// Creates a route visiting `points` in the given order.
    ///
    /// # Errors
    ///
    /// Fails if consecutive points differ in dimension.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let length = route_length(&points)?;
        let order = (0..points.len()).collect();
        Ok(Self {
            points,
            order,
            length,
        })
    }

    pub(crate) fn from_parts(points: Vec<Point>, order: Vec<usize>, length: f64) -> Self {
        debug_assert_eq!(points.len(), order.len());
        Self {
            points,
            order,
            length,
        }
    }

    /// The visited points, in route order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Input index of each visited point, in route order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total length: the sum of distances between consecutive points.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points on the route.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route visits no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Re-checks the turning-angle constraint over the whole route.
    pub fn is_feasible(&self) -> Result<bool> {
        route_valid(&self.points)
    }

    /// The same route traversed backwards.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        let mut order = self.order.clone();
        points.reverse();
        order.reverse();
        Self {
            points,
            order,
            length: self.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Route {
        Route::new(vec![
            Point::new([0.0, 0.0]),
            Point::new([2.0, 0.0]),
            Point::new([2.0, 2.0]),
            Point::new([-1.0, 2.0]),
        ])
        .expect("uniform dimension")
    }

    #[test]
    fn test_route_length_and_order() {
        let r = zigzag();
        assert_eq!(r.order(), &[0, 1, 2, 3]);
        assert!((r.length() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_reversed() {
        let r = zigzag();
        let rev = r.reversed();
        assert_eq!(rev.order(), &[3, 2, 1, 0]);
        assert_eq!(rev.points()[0], Point::new([-1.0, 2.0]));
        assert_eq!(rev.length(), r.length());
        assert_eq!(rev.is_feasible(), r.is_feasible());
    }

    #[test]
    fn test_new_rejects_mixed_dimensions() {
        assert!(Route::new(vec![Point::new([0.0]), Point::new([1.0, 1.0])]).is_err());
    }

    #[test]
    fn test_empty_route() {
        let r = Route::new(vec![]).expect("empty");
        assert!(r.is_empty());
        assert_eq!(r.length(), 0.0);
        assert_eq!(r.is_feasible(), Ok(true));
    }
}
