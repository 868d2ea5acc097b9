//! Turning-angle feasibility and route length.
//!
//! - [`turn_valid`] / [`route_valid`] / [`route_length`] work on point slices.
//! - [`RouteEvaluator`] answers the same questions for index sequences over a
//!   validated [`Instance`](crate::models::Instance), using the cached
//!   distance matrix and no allocation per query.

mod evaluator;
mod feasibility;

pub use evaluator::RouteEvaluator;
pub use feasibility::{route_length, route_valid, turn_valid};
