//! Domain model types.
//!
//! An [`Instance`] is a validated, immutable set of same-dimension points
//! with cached pairwise distances. A [`Route`] is an ordering of all of an
//! instance's points together with its total length.

mod instance;
mod route;

pub use instance::Instance;
pub use route::Route;
