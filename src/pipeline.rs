//! Top-level planning pipeline.
//!
//! Runs the full chain: mission points → clusters → node list → distance
//! matrix → endpoint selection → route solving → coordinate extraction.
//! Each planning run is self-contained and stateless; independent runs may
//! execute concurrently.

use crate::cluster::{clustered_locations_with, Clusterer, KMeans};
use crate::distance::DistanceMatrix;
use crate::error::PlanError;
use crate::extract::extract_route;
use crate::models::{PatrolPlan, Point};
use crate::solver::{select_endpoint, CheapestArcSolver, RouteSolver};

/// Plans a patrol route with explicit clustering and routing engines.
///
/// The depot (node 0) is always the route's origin; the end node is the
/// node-list index with the maximal coordinate sum. When the depot itself
/// wins that rule (all centroids below the anti-diagonal) the route is a
/// closed tour through both centroids and back. Mission points are
/// returned on the plan unchanged for downstream consumers.
///
/// # Errors
///
/// `InvalidInput` if neither `points` nor `seed` is given (or the engines
/// reject their input); `NoSolution` if the solver cannot produce a
/// feasible path.
///
/// # Examples
///
/// ```
/// use ugv_patrol::cluster::KMeans;
/// use ugv_patrol::pipeline::plan_patrol_route_with;
/// use ugv_patrol::solver::CheapestArcSolver;
/// use ugv_patrol::models::{Point, DEPOT};
///
/// let points = vec![
///     Point::new(1000.0, 1000.0),
///     Point::new(1200.0, 1100.0),
///     Point::new(20000.0, 20000.0),
///     Point::new(19800.0, 20100.0),
/// ];
/// let plan = plan_patrol_route_with(
///     &KMeans::new(2).with_seed(7),
///     &CheapestArcSolver,
///     Some(points),
///     None,
/// )
/// .unwrap();
/// assert_eq!(plan.route().len(), 3);
/// assert_eq!(plan.route()[0], DEPOT);
/// ```
pub fn plan_patrol_route_with<C: Clusterer, S: RouteSolver>(
    clusterer: &C,
    solver: &S,
    points: Option<Vec<Point>>,
    seed: Option<u64>,
) -> Result<PatrolPlan, PlanError> {
    let clustered = clustered_locations_with(clusterer, points, seed)?;
    let nodes = clustered.nodes();

    let matrix = DistanceMatrix::from_points(nodes)?;
    let end = select_endpoint(nodes)
        .ok_or_else(|| PlanError::InvalidInput("empty node list".into()))?;
    let tour = solver.solve(&matrix, 0, end)?;
    let route = extract_route(&tour, nodes);

    Ok(PatrolPlan::new(route, clustered.points().to_vec()))
}

/// Plans a patrol route with the default engines: 2-cluster k-means and
/// the cheapest-arc solver.
///
/// `seed` pins mission-point generation only; the clusterer's own
/// initialization randomness stays unpinned, as with the underlying
/// [`KMeans`] default. At least one of `points` and `seed` must be given.
pub fn plan_patrol_route(
    points: Option<Vec<Point>>,
    seed: Option<u64>,
) -> Result<PatrolPlan, PlanError> {
    plan_patrol_route_with(&KMeans::new(2), &CheapestArcSolver, points, seed)
}
