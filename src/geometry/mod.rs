//! Geometric primitives in n-dimensional Euclidean space.
//!
//! [`Point`] and [`Vector`] are immutable value types. The checked free
//! functions ([`vector_between`], [`distance`], [`dot`]) reject operands of
//! differing dimension; the `*_unchecked` kernels skip that test and are meant
//! for hot loops over an instance whose dimension was validated up front.

mod point;
mod vector;

pub use point::Point;
pub use vector::Vector;

use crate::error::{Result, RouteError};

/// Returns the displacement vector from `a` to `b` (`b - a`, componentwise).
///
/// # Errors
///
/// [`RouteError::DimensionMismatch`] if the points differ in dimension.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::{vector_between, Point};
///
/// let v = vector_between(&Point::new([1.0, 1.0]), &Point::new([4.0, 5.0])).unwrap();
/// assert_eq!(v.components(), &[3.0, 4.0]);
/// assert_eq!(v.length(), 5.0);
/// ```
pub fn vector_between(a: &Point, b: &Point) -> Result<Vector> {
    check_dimensions(a.dimension(), b.dimension())?;
    let components = a
        .coords()
        .iter()
        .zip(b.coords())
        .map(|(from, to)| to - from)
        .collect::<Vec<_>>();
    Ok(Vector::new(components))
}

/// Euclidean distance between two points.
///
/// # Errors
///
/// [`RouteError::DimensionMismatch`] if the points differ in dimension.
pub fn distance(a: &Point, b: &Point) -> Result<f64> {
    check_dimensions(a.dimension(), b.dimension())?;
    Ok(distance_unchecked(a, b))
}

/// Dot product of two vectors.
///
/// # Errors
///
/// [`RouteError::DimensionMismatch`] if the vectors differ in dimension.
pub fn dot(v1: &Vector, v2: &Vector) -> Result<f64> {
    check_dimensions(v1.dimension(), v2.dimension())?;
    Ok(v1
        .components()
        .iter()
        .zip(v2.components())
        .map(|(a, b)| a * b)
        .sum())
}

/// Euclidean length of a vector (`sqrt(dot(v, v))`).
pub fn length(v: &Vector) -> f64 {
    v.length()
}

/// Distance between two points of equal dimension, without allocating.
///
/// The caller guarantees equal dimensions.
#[inline]
pub fn distance_unchecked(a: &Point, b: &Point) -> f64 {
    debug_assert_eq!(a.dimension(), b.dimension());
    a.coords()
        .iter()
        .zip(b.coords())
        .map(|(x, y)| (y - x) * (y - x))
        .sum::<f64>()
        .sqrt()
}

/// `dot(q→p, q→r)` for three points of equal dimension, without allocating.
///
/// Non-positive means the route `p, q, r` turns through at least 90 degrees
/// at `q`. The caller guarantees equal dimensions.
#[inline]
pub fn turn_dot(p: &Point, q: &Point, r: &Point) -> f64 {
    debug_assert_eq!(p.dimension(), q.dimension());
    debug_assert_eq!(q.dimension(), r.dimension());
    let (p, q, r) = (p.coords(), q.coords(), r.coords());
    let mut sum = 0.0;
    for i in 0..q.len() {
        sum += (p[i] - q[i]) * (r[i] - q[i]);
    }
    sum
}

fn check_dimensions(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(RouteError::DimensionMismatch {
            index: 0,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_between_direction() {
        let a = Point::new([1.0, 2.0, 3.0]);
        let b = Point::new([2.0, 0.0, 3.0]);
        let v = vector_between(&a, &b).expect("same dimension");
        assert_eq!(v.components(), &[1.0, -2.0, 0.0]);
    }

    #[test]
    fn test_vector_between_mismatch() {
        let a = Point::new([1.0, 2.0]);
        let b = Point::new([1.0, 2.0, 3.0]);
        assert_eq!(
            vector_between(&a, &b),
            Err(RouteError::DimensionMismatch {
                index: 0,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_distance_matches_vector_length() {
        let a = Point::new([0.0, 0.0]);
        let b = Point::new([3.0, 4.0]);
        assert!((distance(&a, &b).expect("ok") - 5.0).abs() < 1e-10);
        assert!((distance_unchecked(&a, &b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_mismatch() {
        let a = Point::new([0.0]);
        let b = Point::new([3.0, 4.0]);
        assert!(distance(&a, &b).is_err());
    }

    #[test]
    fn test_dot_and_length() {
        let v1 = Vector::new(vec![1.0, 2.0, 3.0]);
        let v2 = Vector::new(vec![4.0, -5.0, 6.0]);
        assert_eq!(dot(&v1, &v2), Ok(12.0));
        assert!((length(&Vector::new(vec![2.0, 3.0, 6.0])) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_dot_mismatch() {
        let v1 = Vector::new(vec![1.0]);
        let v2 = Vector::new(vec![1.0, 1.0]);
        assert!(dot(&v1, &v2).is_err());
    }

    #[test]
    fn test_turn_dot_matches_checked_path() {
        let p = Point::new([0.0, 0.0]);
        let q = Point::new([1.0, 0.0]);
        let r = Point::new([1.0, 1.0]);
        let qp = vector_between(&q, &p).expect("ok");
        let qr = vector_between(&q, &r).expect("ok");
        assert_eq!(turn_dot(&p, &q, &r), dot(&qp, &qr).expect("ok"));
        assert_eq!(turn_dot(&p, &q, &r), 0.0);
    }

    #[test]
    fn test_zero_dimension() {
        let a = Point::new(Vec::<f64>::new());
        let b = Point::new(Vec::<f64>::new());
        assert_eq!(distance(&a, &b), Ok(0.0));
        assert_eq!(turn_dot(&a, &b, &a), 0.0);
    }
}
