//! Route extraction: tour indices back to coordinates.

use crate::models::{Point, Tour};

/// Resolves a tour's node indices against the node list, preserving
/// visiting order.
///
/// `extract_route(tour, nodes)[i] == nodes[tour.nodes()[i]]` for every
/// position `i`.
///
/// # Panics
///
/// Panics if the tour references an index outside `nodes`. That is a
/// contract violation between solver and extractor (the solver only emits
/// indices of the matrix it was given), not a recoverable condition.
///
/// # Examples
///
/// ```
/// use ugv_patrol::extract::extract_route;
/// use ugv_patrol::models::{Point, Tour};
///
/// let nodes = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(20.0, 0.0),
/// ];
/// let tour = Tour::new(vec![0, 2, 1]).unwrap();
/// let route = extract_route(&tour, &nodes);
/// assert_eq!(route, vec![nodes[0], nodes[2], nodes[1]]);
/// ```
pub fn extract_route(tour: &Tour, nodes: &[Point]) -> Vec<Point> {
    tour.nodes().iter().map(|&i| nodes[i]).collect()
}
