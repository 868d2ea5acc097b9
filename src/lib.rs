//! # u-turnroute
//!
//! Shortest routes through points in n-dimensional space under a
//! turning-angle constraint: every three consecutive points of a route must
//! turn through at least 90° at the middle one (the legs meeting there have
//! a non-positive dot product).
//!
//! ## Modules
//!
//! - [`geometry`] — Point and vector primitives
//! - [`evaluation`] — Turning-angle feasibility and route length
//! - [`models`] — Validated instances and routes
//! - [`distance`] — Dense distance matrix
//! - [`solver`] — The [`RouteSolver`](solver::RouteSolver) contract, configuration, strategy selection
//! - [`exact`] — Exhaustive and branch-and-bound search
//! - [`constructive`] — Greedy nearest-neighbor variants
//! - [`io`] — Point parsing and route formatting
//! - [`generate`] — Seeded random instances
//!
//! ## Example
//!
//! ```
//! use u_turnroute::geometry::Point;
//! use u_turnroute::solver::{build_solver, SolverConfig};
//!
//! let points = vec![
//!     Point::new([0.0, 0.0]),
//!     Point::new([1.0, 0.0]),
//!     Point::new([1.0, 1.0]),
//!     Point::new([0.0, 1.0]),
//! ];
//! let solver = build_solver(&SolverConfig::default(), points.len()).unwrap();
//! let route = solver.solve(&points).unwrap().expect("a feasible route exists");
//! assert!((route.length() - 3.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod generate;
pub mod geometry;
pub mod io;
pub mod models;
pub mod solver;

pub use error::{Result, RouteError};
