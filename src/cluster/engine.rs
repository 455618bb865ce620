//! Cluster engine: mission points to routing nodes.

use crate::error::PlanError;
use crate::missions;
use crate::models::{Point, DEPOT};

use super::{Clusterer, KMeans};

/// Output of the cluster engine.
///
/// Holds the routing node list (depot first, then the centroids in the
/// clusterer's output order), the mission points that were clustered, and
/// the per-point cluster labels (`labels()[i]` labels `points()[i]`).
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteredLocations {
    nodes: Vec<Point>,
    points: Vec<Point>,
    labels: Vec<usize>,
}

impl ClusteredLocations {
    /// Routing node list: index 0 is the depot, the rest are centroids.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// The mission points that were clustered, in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Cluster label of each mission point, aligned with `points()`.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}

/// Clusters mission points and builds the routing node list.
///
/// Accepts explicit mission points, a generator seed, or both (explicit
/// points win). Runs the given clusterer and prepends the fixed depot to
/// the resulting centroids.
///
/// # Errors
///
/// `InvalidInput` if both `points` and `seed` are `None`, or if the
/// clusterer rejects the point set.
///
/// # Examples
///
/// ```
/// use ugv_patrol::cluster::{clustered_locations_with, KMeans};
/// use ugv_patrol::models::{Point, DEPOT};
///
/// let points = vec![
///     Point::new(1000.0, 1000.0),
///     Point::new(1100.0, 1200.0),
///     Point::new(20000.0, 20000.0),
///     Point::new(19900.0, 20100.0),
/// ];
/// let out = clustered_locations_with(&KMeans::new(2).with_seed(1), Some(points), None)
///     .unwrap();
/// assert_eq!(out.nodes().len(), 3);
/// assert_eq!(out.nodes()[0], DEPOT);
/// assert_eq!(out.labels().len(), out.points().len());
/// ```
pub fn clustered_locations_with<C: Clusterer>(
    clusterer: &C,
    points: Option<Vec<Point>>,
    seed: Option<u64>,
) -> Result<ClusteredLocations, PlanError> {
    let points = match (points, seed) {
        (Some(points), _) => points,
        (None, Some(seed)) => missions::random_locations(seed),
        (None, None) => {
            return Err(PlanError::InvalidInput(
                "provide at least one of mission points or a seed".into(),
            ))
        }
    };

    let fit = clusterer.fit(&points)?;

    let mut nodes = Vec::with_capacity(fit.centroids().len() + 1);
    nodes.push(DEPOT);
    nodes.extend_from_slice(fit.centroids());

    Ok(ClusteredLocations {
        nodes,
        labels: fit.into_labels(),
        points,
    })
}

/// Clusters mission points into two groups with the default k-means
/// engine.
///
/// The clusterer's initialization randomness is left unpinned here and is
/// independent of `seed`, which only controls mission-point generation;
/// use [`clustered_locations_with`] and [`KMeans::with_seed`] when
/// reproducible centroids are required.
pub fn clustered_locations(
    points: Option<Vec<Point>>,
    seed: Option<u64>,
) -> Result<ClusteredLocations, PlanError> {
    clustered_locations_with(&KMeans::new(2), points, seed)
}
