//! Point type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Vector;
use crate::error::Result;

/// An immutable point in n-dimensional space.
///
/// Two points are equal iff all their coordinates are equal. A point of
/// dimension 0 is allowed.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
///
/// let p = Point::new([3.0, 4.0]);
/// assert_eq!(p.dimension(), 2);
/// assert_eq!(p.coord(1), Some(4.0));
/// assert_eq!(p.distance_to(&Point::new([0.0, 0.0])).unwrap(), 5.0);
/// assert_eq!(p.to_string(), "3 4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(coords: impl Into<Vec<f64>>) -> Self {
        Self {
            coords: coords.into(),
        }
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// All coordinates in order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// The `i`-th coordinate, or `None` if `i >= dimension`.
    pub fn coord(&self, i: usize) -> Option<f64> {
        self.coords.get(i).copied()
    }

    /// Displacement vector from this point to `other`.
    pub fn vector_to(&self, other: &Point) -> Result<Vector> {
        super::vector_between(self, other)
    }

    /// Euclidean distance from this point to `other`.
    pub fn distance_to(&self, other: &Point) -> Result<f64> {
        super::distance(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality() {
        assert_eq!(Point::new([1.0, 2.0]), Point::new(vec![1.0, 2.0]));
        assert_ne!(Point::new([1.0, 2.0]), Point::new([1.0, 2.5]));
        assert_ne!(Point::new([1.0]), Point::new([1.0, 0.0]));
    }

    #[test]
    fn test_coord_out_of_range() {
        let p = Point::new([1.0]);
        assert_eq!(p.coord(0), Some(1.0));
        assert_eq!(p.coord(1), None);
    }

    #[test]
    fn test_display_fractional() {
        assert_eq!(Point::new([-1.5, 0.25, 7.0]).to_string(), "-1.5 0.25 7");
    }

    #[test]
    fn test_serde_transparent() {
        let p = Point::new([1.5, -2.0]);
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, "[1.5,-2.0]");
        let back: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, p);
    }
}
