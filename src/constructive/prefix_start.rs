//! Multi-start nearest-neighbor seeded by feasible prefixes.
//!
//! # Algorithm
//!
//! Enumerates every ordered sequence of `k` distinct points that is itself
//! turn-valid (a prefix is abandoned at its first sharp turn), then completes
//! each one greedily. `k = 2` is exactly [`PairedStartSolver`]; larger `k`
//! trades more restarts for better routes, and `k = n` degenerates into an
//! exhaustive search.
//!
//! [`PairedStartSolver`]: super::PairedStartSolver

use super::nearest_neighbor::greedy_extend;
use crate::error::{Result, RouteError};
use crate::evaluation::RouteEvaluator;
use crate::geometry::Point;
use crate::models::Instance;
use crate::solver::{
    finish, trivial_outcome, Deadline, Incumbent, RouteSolver, SearchOutcome, SearchStats,
};

/// Greedy construction from every turn-valid prefix of a fixed size.
///
/// # Examples
///
/// ```
/// use u_turnroute::geometry::Point;
/// use u_turnroute::constructive::PrefixStartSolver;
/// use u_turnroute::solver::RouteSolver;
///
/// let solver = PrefixStartSolver::new(3).unwrap();
/// let points = vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
///     Point::new([0.0, 1.0]),
/// ];
/// let route = solver.solve(&points).unwrap().unwrap();
/// assert!((route.length() - 3.0).abs() < 1e-10);
///
/// assert!(PrefixStartSolver::new(1).is_err());
/// assert!(solver.solve(&points[..2]).is_ok()); // two points: always trivial
/// assert!(PrefixStartSolver::new(5).unwrap().solve(&points).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PrefixStartSolver {
    prefix_size: usize,
    time_limit_ms: u64,
}

impl PrefixStartSolver {
    /// Creates a solver enumerating prefixes of `prefix_size` points.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidPrefixSize`] if `prefix_size < 2`.
    pub fn new(prefix_size: usize) -> Result<Self> {
        if prefix_size < 2 {
            return Err(RouteError::InvalidPrefixSize {
                size: prefix_size,
                points: 0,
            });
        }
        Ok(Self {
            prefix_size,
            time_limit_ms: 0,
        })
    }

    /// Sets the time limit in milliseconds (0 = unlimited).
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// The configured prefix size.
    pub fn prefix_size(&self) -> usize {
        self.prefix_size
    }
}

impl RouteSolver for PrefixStartSolver {
    fn name(&self) -> &'static str {
        "prefix_start"
    }

    /// # Errors
    ///
    /// Besides dimension mismatches, fails with
    /// [`RouteError::InvalidPrefixSize`] before searching if a non-trivial
    /// instance (more than two points) has fewer points than the prefix size.
    fn solve_with_stats(&self, points: &[Point]) -> Result<SearchOutcome> {
        let instance = Instance::new(points)?;
        if let Some(outcome) = trivial_outcome(&instance) {
            return Ok(outcome);
        }
        if self.prefix_size > instance.len() {
            return Err(RouteError::InvalidPrefixSize {
                size: self.prefix_size,
                points: instance.len(),
            });
        }
        let n = instance.len();
        let mut search = Search {
            eval: instance.evaluator(),
            prefix_size: self.prefix_size,
            incumbent: Incumbent::new(),
            stats: SearchStats::default(),
            deadline: Deadline::from_millis(self.time_limit_ms),
            scratch_route: Vec::with_capacity(n),
            scratch_used: vec![false; n],
        };
        let mut prefix = Vec::with_capacity(self.prefix_size);
        let mut used = vec![false; n];
        search.enumerate(&mut prefix, &mut used)?;

        let Search {
            incumbent,
            stats,
            deadline,
            ..
        } = search;
        Ok(finish(self.name(), &instance, incumbent, stats, &deadline))
    }
}

struct Search<'a> {
    eval: RouteEvaluator<'a>,
    prefix_size: usize,
    incumbent: Incumbent,
    stats: SearchStats,
    deadline: Deadline,
    scratch_route: Vec<usize>,
    scratch_used: Vec<bool>,
}

impl Search<'_> {
    fn enumerate(&mut self, prefix: &mut Vec<usize>, used: &mut [bool]) -> Result<()> {
        self.stats.nodes += 1;
        if prefix.len() == self.prefix_size {
            self.deadline.check_coarse()?;
            self.complete(prefix, used);
            return Ok(());
        }
        self.deadline.check()?;

        let len = prefix.len();
        for next in 0..used.len() {
            if used[next] {
                continue;
            }
            if len >= 2 && !self.eval.turn_valid(prefix[len - 2], prefix[len - 1], next) {
                continue;
            }
            used[next] = true;
            prefix.push(next);
            self.enumerate(prefix, used)?;
            prefix.pop();
            used[next] = false;
        }
        Ok(())
    }

    fn complete(&mut self, prefix: &[usize], used: &[bool]) {
        self.scratch_route.clear();
        self.scratch_route.extend_from_slice(prefix);
        self.scratch_used.copy_from_slice(used);
        if !greedy_extend(
            &self.eval,
            &mut self.scratch_route,
            &mut self.scratch_used,
            &mut self.stats,
        ) {
            return;
        }
        self.stats.complete_routes += 1;
        let length = self.eval.length(&self.scratch_route);
        if self.incumbent.offer(&self.scratch_route, length) {
            self.stats.improvements += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::PairedStartSolver;
    use crate::exact::BranchAndBoundSolver;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|c| Point::new(*c)).collect()
    }

    fn sample() -> Vec<Point> {
        pts(&[
            [0.0, 0.0],
            [2.0, 0.3],
            [2.2, 2.1],
            [0.1, 2.4],
            [-1.5, 1.0],
            [1.0, -1.7],
        ])
    }

    #[test]
    fn test_rejects_small_prefix() {
        assert!(matches!(
            PrefixStartSolver::new(0),
            Err(RouteError::InvalidPrefixSize { size: 0, .. })
        ));
        assert!(PrefixStartSolver::new(1).is_err());
        assert!(PrefixStartSolver::new(2).is_ok());
    }

    #[test]
    fn test_rejects_prefix_longer_than_instance() {
        let solver = PrefixStartSolver::new(4).expect("valid size");
        assert_eq!(
            solver.solve(&sample()[..3]),
            Err(RouteError::InvalidPrefixSize { size: 4, points: 3 })
        );
    }

    #[test]
    fn test_prefix_two_matches_paired() {
        let points = sample();
        let prefix = PrefixStartSolver::new(2)
            .expect("valid")
            .solve(&points)
            .expect("valid");
        let paired = PairedStartSolver::new().solve(&points).expect("valid");
        assert_eq!(
            prefix.as_ref().map(|r| r.order().to_vec()),
            paired.as_ref().map(|r| r.order().to_vec())
        );
    }

    #[test]
    fn test_full_prefix_is_exact() {
        let points = sample();
        let prefix = PrefixStartSolver::new(points.len())
            .expect("valid")
            .solve(&points)
            .expect("valid");
        let exact = BranchAndBoundSolver::new().solve(&points).expect("valid");
        match (prefix, exact) {
            (Some(a), Some(b)) => assert!((a.length() - b.length()).abs() < 1e-10),
            (None, None) => {}
            (a, b) => panic!("disagreement: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn test_larger_prefix_never_worse() {
        let points = sample();
        let k2 = PrefixStartSolver::new(2).expect("valid").solve(&points).expect("valid");
        let k3 = PrefixStartSolver::new(3).expect("valid").solve(&points).expect("valid");
        if let Some(k2) = k2 {
            // the k=2 winner's first three points form a valid 3-prefix
            let k3 = k3.expect("k=3 covers the k=2 winner");
            assert!(k3.length() <= k2.length() + 1e-10);
            assert_eq!(k3.is_feasible(), Ok(true));
        }
    }

    #[test]
    fn test_trivial_instance_ignores_prefix_size() {
        let two = pts(&[[1.0, 1.0], [0.0, 0.0]]);
        let route = PrefixStartSolver::new(5)
            .expect("valid")
            .solve(&two)
            .expect("valid")
            .expect("trivial");
        assert_eq!(route.order(), &[0, 1]);
    }
}
