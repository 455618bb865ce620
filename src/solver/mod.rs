//! Route solving over the clustered node list.
//!
//! - [`RouteSolver`] — capability trait: distance matrix + fixed start and
//!   end → Hamiltonian path
//! - [`CheapestArcSolver`] — deterministic cheapest-arc construction
//! - [`select_endpoint`] — picks the tour's final stop (maximal
//!   coordinate sum)

mod cheapest_arc;

pub use cheapest_arc::CheapestArcSolver;

use crate::distance::DistanceMatrix;
use crate::error::PlanError;
use crate::models::{Point, Tour};

/// Solves a single-vehicle shortest-route problem with fixed endpoints.
///
/// Implementations minimize total arc cost over paths that start at
/// `start`, end at `end`, and visit every node exactly once. When `start`
/// and `end` coincide the route is a closed tour through all other nodes
/// and back. Kept behind a trait so deterministic stubs can replace the
/// real solver in tests.
pub trait RouteSolver {
    /// Finds a minimum-cost route from `start` to `end` visiting every
    /// node.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the matrix is empty or an endpoint is out of
    /// range; `NoSolution` if no feasible route exists under the endpoint
    /// constraints.
    fn solve(&self, matrix: &DistanceMatrix, start: usize, end: usize) -> Result<Tour, PlanError>;
}

/// Selects the route's end node: the index with the maximal coordinate
/// sum.
///
/// Ties go to the first occurrence in iteration order. Returns `None` for
/// an empty node list. The depot itself wins when every centroid lies
/// below the anti-diagonal; the route then closes back to the depot.
///
/// # Examples
///
/// ```
/// use ugv_patrol::models::Point;
/// use ugv_patrol::solver::select_endpoint;
///
/// let nodes = vec![
///     Point::new(13200.0, 13200.0),
///     Point::new(100.0, 100.0),
///     Point::new(20000.0, 20000.0),
/// ];
/// assert_eq!(select_endpoint(&nodes), Some(2));
/// ```
pub fn select_endpoint(nodes: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, node) in nodes.iter().enumerate() {
        let sum = node.coordinate_sum();
        // Strict > keeps the first occurrence on ties
        match best {
            Some((_, best_sum)) if sum <= best_sum => {}
            _ => best = Some((i, sum)),
        }
    }
    best.map(|(i, _)| i)
}
