//! Problem instance.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::evaluation::RouteEvaluator;
use crate::geometry::Point;
use crate::models::Route;

/// An immutable set of points sharing one dimension.
///
/// Construction validates the dimension once, so solvers can evaluate
/// turns and distances in their inner loops without re-checking.
/// Duplicate points are allowed and are treated as distinct stops.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::models::Instance;
///
/// let inst = Instance::new(&[Point::new([0.0, 0.0]), Point::new([3.0, 4.0])]).unwrap();
/// assert_eq!(inst.len(), 2);
/// assert_eq!(inst.dimension(), 2);
/// assert!((inst.distance(0, 1) - 5.0).abs() < 1e-10);
///
/// assert!(Instance::new(&[Point::new([0.0]), Point::new([1.0, 2.0])]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    points: Vec<Point>,
    dimension: usize,
    distances: DistanceMatrix,
}

impl Instance {
    /// Validates `points` and precomputes their distances.
    ///
    /// # Errors
    ///
    /// [`RouteError::DimensionMismatch`] naming the first point whose
    /// dimension differs from the first point's.
    pub fn new(points: &[Point]) -> Result<Self> {
        let dimension = points.first().map_or(0, Point::dimension);
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.dimension() != dimension)
        {
            return Err(RouteError::DimensionMismatch {
                index,
                expected: dimension,
                found: p.dimension(),
            });
        }
        Ok(Self {
            points: points.to_vec(),
            dimension,
            distances: DistanceMatrix::from_points(points),
        })
    }

    /// The points in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the instance has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shared dimension of all points (0 for an empty instance).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance between the points at `from` and `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// The cached distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// An evaluator for index-sequence routes over this instance.
    pub fn evaluator(&self) -> RouteEvaluator<'_> {
        RouteEvaluator::new(&self.points, &self.distances)
    }

    /// The route visiting the points in input order.
    pub fn input_order_route(&self) -> Route {
        let order: Vec<usize> = (0..self.len()).collect();
        self.evaluator().build_route(&order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new(&[]).expect("empty is valid");
        assert!(inst.is_empty());
        assert_eq!(inst.dimension(), 0);
        assert!(inst.input_order_route().is_empty());
    }

    #[test]
    fn test_mismatch_reports_index() {
        let err = Instance::new(&[
            Point::new([0.0, 0.0]),
            Point::new([1.0, 0.0]),
            Point::new([1.0, 0.0, 5.0]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteError::DimensionMismatch {
                index: 2,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_duplicates_kept() {
        let p = Point::new([1.0, 1.0]);
        let inst = Instance::new(&[p.clone(), p.clone()]).expect("valid");
        assert_eq!(inst.len(), 2);
        assert_eq!(inst.distance(0, 1), 0.0);
    }

    #[test]
    fn test_input_order_route() {
        let inst = Instance::new(&[
            Point::new([0.0]),
            Point::new([2.0]),
            Point::new([5.0]),
        ])
        .expect("valid");
        let route = inst.input_order_route();
        assert_eq!(route.order(), &[0, 1, 2]);
        assert!((route.length() - 5.0).abs() < 1e-10);
    }
}
