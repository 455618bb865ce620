//! # ugv-patrol
//!
//! Patrol route planning for a single unmanned ground vehicle (UGV). The
//! UGV's stopping points are the centroids of mission-point clusters,
//! positioned so aerial vehicles can service the surrounding mission
//! points from nearby. Planning runs in two coupled stages: k-means
//! clustering of the mission points, and a fixed-start, derived-end
//! shortest-route construction over the centroids plus a fixed depot.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, PatrolPlan, depot and
//!   domain constants)
//! - [`missions`] — Deterministic seeded mission-point generation
//! - [`cluster`] — Clusterer trait, k-means engine, node-list assembly
//! - [`distance`] — Integer Euclidean distance matrix
//! - [`solver`] — RouteSolver trait, cheapest-arc construction, endpoint
//!   selection
//! - [`extract`] — Tour-index to coordinate resolution
//! - [`pipeline`] — End-to-end planning entry points
//!
//! ## Example
//!
//! ```
//! use ugv_patrol::models::DEPOT;
//! use ugv_patrol::plan_patrol_route;
//!
//! let plan = plan_patrol_route(None, Some(42)).unwrap();
//! assert_eq!(plan.route()[0], DEPOT);
//! assert!(plan.route().len() >= 3); // depot + 2 centroids, +1 if closed
//! assert_eq!(plan.mission_points().len(), 30);
//! ```

pub mod cluster;
pub mod distance;
mod error;
pub mod extract;
pub mod missions;
pub mod models;
pub mod pipeline;
pub mod solver;

pub use error::PlanError;
pub use pipeline::{plan_patrol_route, plan_patrol_route_with};
