//! Random instance generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, RouteError};
use crate::geometry::Point;

/// Generates `count` points of `dimension` coordinates, each uniform in
/// `[-extent, extent)`. The same seed always yields the same points.
///
/// A non-positive `extent` places every point at the origin.
///
/// # Errors
///
/// [`RouteError::InvalidExtent`] if `[-extent, extent)` is not a finite
/// range (an infinite or NaN extent, or one whose double overflows).
///
/// # Examples
///
/// ```
/// use u_turnroute::generate::random_points;
///
/// let a = random_points(10, 3, 100.0, 7).unwrap();
/// assert_eq!(a.len(), 10);
/// assert!(a.iter().all(|p| p.dimension() == 3));
/// assert_eq!(a, random_points(10, 3, 100.0, 7).unwrap());
/// assert!(random_points(10, 3, f64::INFINITY, 7).is_err());
/// ```
pub fn random_points(
    count: usize,
    dimension: usize,
    extent: f64,
    seed: u64,
) -> Result<Vec<Point>> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_points_with(&mut rng, count, dimension, extent)
}

/// Like [`random_points`], drawing from a caller-supplied generator.
pub fn random_points_with<R: Rng>(
    rng: &mut R,
    count: usize,
    dimension: usize,
    extent: f64,
) -> Result<Vec<Point>> {
    if !(2.0 * extent).is_finite() {
        return Err(RouteError::InvalidExtent(extent));
    }
    let points = (0..count)
        .map(|_| {
            let coords: Vec<f64> = (0..dimension)
                .map(|_| {
                    if extent > 0.0 {
                        rng.random_range(-extent..extent)
                    } else {
                        0.0
                    }
                })
                .collect();
            Point::new(coords)
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_extent() {
        let points = random_points(200, 2, 5.0, 1).expect("finite extent");
        assert!(points
            .iter()
            .flat_map(|p| p.coords())
            .all(|&c| (-5.0..5.0).contains(&c)));
    }

    #[test]
    fn test_seed_changes_output() {
        assert_ne!(random_points(5, 2, 10.0, 1), random_points(5, 2, 10.0, 2));
    }

    #[test]
    fn test_non_positive_extent() {
        let points = random_points(3, 2, 0.0, 9).expect("finite extent");
        assert!(points.iter().all(|p| p.coords() == [0.0, 0.0]));
    }

    #[test]
    fn test_zero_count() {
        assert!(random_points(0, 4, 1.0, 0).expect("finite extent").is_empty());
    }

    #[test]
    fn test_unsampleable_extent_rejected() {
        for extent in [f64::INFINITY, f64::NAN, 1e308, f64::MAX] {
            assert!(matches!(
                random_points(2, 2, extent, 1),
                Err(RouteError::InvalidExtent(_))
            ));
        }
        // Even with no points to draw, the range is validated.
        assert!(random_points(0, 2, f64::INFINITY, 1).is_err());
        assert!(random_points(2, 2, 1e307, 1).is_ok());
    }
}
