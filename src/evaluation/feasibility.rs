//! Feasibility predicate over points.

use crate::error::Result;
use crate::geometry::{distance, vector_between, Point};

/// Returns `true` if the route `p, q, r` turns through at least 90 degrees
/// at `q`, i.e. `dot(q→p, q→r) <= 0`.
///
/// The comparison is exact: a dot product of exactly zero is accepted.
///
/// # Errors
///
/// [`RouteError::DimensionMismatch`](crate::error::RouteError::DimensionMismatch)
/// if the points differ in dimension.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::evaluation::turn_valid;
///
/// let p = Point::new([0.0, 0.0]);
/// let q = Point::new([1.0, 0.0]);
/// assert!(turn_valid(&p, &q, &Point::new([1.0, 1.0])).unwrap()); // exactly 90°
/// assert!(!turn_valid(&p, &q, &Point::new([0.0, 1.0])).unwrap()); // 45°
/// ```
pub fn turn_valid(p: &Point, q: &Point, r: &Point) -> Result<bool> {
    let qp = vector_between(q, p)?;
    let qr = vector_between(q, r)?;
    Ok(crate::geometry::dot(&qp, &qr)? <= 0.0)
}

/// Returns `true` if every consecutive triple of `route` satisfies
/// [`turn_valid`]. Routes of fewer than three points are always valid.
pub fn route_valid(route: &[Point]) -> Result<bool> {
    for w in route.windows(3) {
        if !turn_valid(&w[0], &w[1], &w[2])? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Sum of Euclidean distances between consecutive points.
pub fn route_length(route: &[Point]) -> Result<f64> {
    route
        .windows(2)
        .map(|w| distance(&w[0], &w[1]))
        .sum::<Result<f64>>()
}
