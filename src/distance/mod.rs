//! Pairwise distances.
//!
//! Provides a dense distance matrix computed once per instance.

mod matrix;

pub use matrix::DistanceMatrix;
