//! Strategy selection and solver configuration.

use serde::{Deserialize, Serialize};

use super::RouteSolver;
use crate::constructive::{
    MultiStartSolver, NearestNeighborSolver, PairedStartSolver, PrefixStartSolver,
};
use crate::error::{Result, RouteError};
use crate::exact::{BacktrackingSolver, BranchAndBoundSolver, BruteForceSolver, FixedEndpointsSolver};

/// Largest instance [`Strategy::Auto`] solves exactly.
pub const DEFAULT_EXACT_THRESHOLD: usize = 20;

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Branch-and-bound up to the exact threshold, paired-start greedy above.
    #[default]
    Auto,
    /// Every permutation via Heap's algorithm.
    BruteForce,
    /// Every unordered endpoint pair, middle permuted via Heap's algorithm.
    FixedEndpoints,
    /// Recursive enumeration, checked only at complete routes.
    Backtracking,
    /// Recursive enumeration with turn and length pruning.
    BranchAndBound,
    /// One greedy pass from the first input point.
    NearestNeighbor,
    /// One greedy pass per start point.
    MultiStart,
    /// One greedy pass per ordered pair of start points.
    PairedStart,
    /// One greedy pass per turn-valid ordered prefix of `prefix_size` points.
    PrefixStart,
}

impl Strategy {
    /// Returns `true` for strategies that guarantee an optimal route.
    pub fn is_exact(self) -> bool {
        matches!(
            self,
            Self::BruteForce | Self::FixedEndpoints | Self::Backtracking | Self::BranchAndBound
        )
    }
}

/// Solver configuration.
///
/// # Examples
///
/// ```
/// use u_turnroute::solver::{SolverConfig, Strategy};
///
/// let config = SolverConfig::new()
///     .with_strategy(Strategy::PrefixStart)
///     .with_prefix_size(4)
///     .with_time_limit(5_000);
/// assert_eq!(config.prefix_size, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Search strategy.
    pub strategy: Strategy,
    /// Largest instance size solved exactly under [`Strategy::Auto`].
    pub exact_threshold: usize,
    /// Prefix length for [`Strategy::PrefixStart`] (at least 2).
    pub prefix_size: usize,
    /// Time limit in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            prefix_size: 3,
            time_limit_ms: 0,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the exact-search size threshold used by [`Strategy::Auto`].
    pub fn with_exact_threshold(mut self, threshold: usize) -> Self {
        self.exact_threshold = threshold;
        self
    }

    /// Sets the prefix size for [`Strategy::PrefixStart`].
    pub fn with_prefix_size(mut self, size: usize) -> Self {
        self.prefix_size = size;
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// The concrete strategy used for an instance of `points` points.
    pub fn resolve(&self, points: usize) -> Strategy {
        match self.strategy {
            Strategy::Auto if points <= self.exact_threshold => Strategy::BranchAndBound,
            Strategy::Auto => Strategy::PairedStart,
            s => s,
        }
    }
}

/// Builds the solver `config` selects for an instance of `points` points.
///
/// # Errors
///
/// [`RouteError::InvalidPrefixSize`] if the prefix-start strategy is chosen
/// with a prefix size below 2, or above `points` for an instance of more
/// than two points (smaller instances are solved trivially by every
/// strategy).
///
/// # Examples
///
/// ```
/// use u_turnroute::solver::{build_solver, SolverConfig};
///
/// let config = SolverConfig::default();
/// assert_eq!(build_solver(&config, 8).unwrap().name(), "branch_and_bound");
/// assert_eq!(build_solver(&config, 50).unwrap().name(), "paired_start");
/// ```
pub fn build_solver(config: &SolverConfig, points: usize) -> Result<Box<dyn RouteSolver>> {
    let strategy = config.resolve(points);
    let limit = config.time_limit_ms;
    let solver: Box<dyn RouteSolver> = match strategy {
        Strategy::BruteForce => Box::new(BruteForceSolver::new().with_time_limit(limit)),
        Strategy::FixedEndpoints => Box::new(FixedEndpointsSolver::new().with_time_limit(limit)),
        Strategy::Backtracking => Box::new(BacktrackingSolver::new().with_time_limit(limit)),
        Strategy::BranchAndBound | Strategy::Auto => {
            Box::new(BranchAndBoundSolver::new().with_time_limit(limit))
        }
        Strategy::NearestNeighbor => Box::new(NearestNeighborSolver::new()),
        Strategy::MultiStart => Box::new(MultiStartSolver::new().with_time_limit(limit)),
        Strategy::PairedStart => Box::new(PairedStartSolver::new().with_time_limit(limit)),
        Strategy::PrefixStart => {
            if config.prefix_size < 2 || (points > 2 && config.prefix_size > points) {
                return Err(RouteError::InvalidPrefixSize {
                    size: config.prefix_size,
                    points,
                });
            }
            Box::new(PrefixStartSolver::new(config.prefix_size)?.with_time_limit(limit))
        }
    };
    log::info!(
        "selected {} for {} points ({:?} requested)",
        solver.name(),
        points,
        config.strategy
    );
    Ok(solver)
}
