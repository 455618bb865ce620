//! Domain model types for patrol planning.
//!
//! Provides the core abstractions: mission-area points with the fixed
//! depot and domain bounds, the Hamiltonian-path tour produced by the
//! route solver, and the final plan pairing a route with its mission
//! points.

mod plan;
mod point;
mod tour;

pub use plan::PatrolPlan;
pub use point::{Point, DEPOT, DOMAIN_MAX};
pub use tour::Tour;
