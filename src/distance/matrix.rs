//! Dense distance matrix.

use crate::geometry::{distance_unchecked, Point};

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built from points that share one dimension (see
/// [`Instance`](crate::models::Instance), which validates this first).
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new([0.0, 0.0]),
///     Point::new([3.0, 4.0]),
///     Point::new([6.0, 8.0]),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance_unchecked(&points[i], &points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the candidate closest to `from` among those `accept` admits.
    ///
    /// Ties go to the candidate yielded first. Returns `None` if no
    /// candidate is admitted.
    pub fn nearest<I, F>(&self, from: usize, candidates: I, mut accept: F) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
        F: FnMut(usize) -> bool,
    {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.get(from, c);
            if best.is_some_and(|(_, bd)| d >= bd) {
                continue;
            }
            if accept(c) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}
