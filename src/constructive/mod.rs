//! Greedy constructive strategies for instances too large for exact search.
//!
//! - [`NearestNeighborSolver`] — one construction from the first point, O(n²)
//! - [`MultiStartSolver`] — one construction per start point, O(n³)
//! - [`PairedStartSolver`] — one construction per ordered start pair, O(n⁴)
//! - [`PrefixStartSolver`] — one construction per turn-valid k-prefix
//!
//! None of them backtrack, so they may return `None` on instances that do
//! have a feasible route. A route they do return is always feasible.

mod multi_start;
mod nearest_neighbor;
mod paired_start;
mod prefix_start;

pub use multi_start::MultiStartSolver;
pub use nearest_neighbor::NearestNeighborSolver;
pub use paired_start::PairedStartSolver;
pub use prefix_start::PrefixStartSolver;
