//! Mission-point clustering.
//!
//! - [`Clusterer`] — capability trait for partitioning a point set
//! - [`KMeans`] — k-means++ seeded Lloyd iteration, O(n·k·i)
//! - [`clustered_locations`] — cluster engine producing the routing node
//!   list (fixed depot + centroids)

mod engine;
mod kmeans;

pub use engine::{clustered_locations, clustered_locations_with, ClusteredLocations};
pub use kmeans::KMeans;

use crate::error::PlanError;
use crate::models::Point;

/// The result of fitting a clusterer: one centroid per cluster and one
/// label per input point (`labels[i]` assigns input point `i` to the
/// cluster whose centroid is `centroids[labels[i]]`).
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    centroids: Vec<Point>,
    labels: Vec<usize>,
}

impl Clustering {
    /// Bundles centroids with their label assignment.
    pub fn new(centroids: Vec<Point>, labels: Vec<usize>) -> Self {
        Self { centroids, labels }
    }

    /// Cluster centroids, indexed by cluster.
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    /// Per-point cluster labels, positionally aligned with the fit input.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consumes the fit, returning the label assignment.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }
}

/// Partitions point sets into clusters.
///
/// Implementations carry their own cluster count and randomness policy,
/// so deterministic stubs can stand in for the real engine in tests.
pub trait Clusterer {
    /// Fits the clusterer to the given points.
    ///
    /// The returned labels are positionally aligned with `points`.
    fn fit(&self, points: &[Point]) -> Result<Clustering, PlanError>;
}
