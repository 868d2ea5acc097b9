//! Exact strategies: every one returns a shortest feasible route or `None`.
//!
//! - [`BruteForceSolver`] — all n! permutations via Heap's algorithm
//! - [`FixedEndpointsSolver`] — one route per reversal pair, O(n!/2)
//! - [`BacktrackingSolver`] — recursive enumeration, tested at the leaves
//! - [`BranchAndBoundSolver`] — recursive enumeration with turn and length
//!   pruning; the strategy of choice for small and moderate instances
//!
//! All four are exponential. Each accepts a time limit and fails with
//! [`RouteError::TimeLimitExceeded`](crate::error::RouteError::TimeLimitExceeded)
//! instead of returning an unproven route.

mod backtracking;
mod branch_and_bound;
mod brute_force;
mod fixed_endpoints;
mod heap;

pub use backtracking::BacktrackingSolver;
pub use branch_and_bound::BranchAndBoundSolver;
pub use brute_force::BruteForceSolver;
pub use fixed_endpoints::FixedEndpointsSolver;
pub use heap::HeapPermutations;
