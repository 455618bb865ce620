//! Cheapest-arc path construction.
//!
//! # Algorithm
//!
//! Builds a Hamiltonian path greedily: starting from the fixed start node,
//! repeatedly extend the path with the cheapest arc to an unvisited node.
//! The designated end node is withheld from selection until it is the only
//! node left, which forces the path to terminate there. When the end node
//! coincides with the start, the route is instead a closed tour: the path
//! greedily covers every other node and then returns to the start. Ties
//! between equally cheap arcs go to the lowest node index, making the
//! construction fully deterministic for a given matrix.
//!
//! The first feasible path is accepted as final; no improvement phase
//! follows.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.

use crate::distance::DistanceMatrix;
use crate::error::PlanError;
use crate::models::Tour;

use super::RouteSolver;

/// Constructive route solver using cheapest-arc extension.
///
/// # Examples
///
/// ```
/// use ugv_patrol::distance::DistanceMatrix;
/// use ugv_patrol::solver::{CheapestArcSolver, RouteSolver};
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0, 1, 9,
///     1, 0, 9,
///     9, 9, 0,
/// ]).unwrap();
/// let tour = CheapestArcSolver.solve(&dm, 0, 2).unwrap();
/// assert_eq!(tour.nodes(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestArcSolver;

impl RouteSolver for CheapestArcSolver {
    fn solve(&self, matrix: &DistanceMatrix, start: usize, end: usize) -> Result<Tour, PlanError> {
        let n = matrix.size();
        if n == 0 {
            return Err(PlanError::InvalidInput("empty distance matrix".into()));
        }
        if start >= n || end >= n {
            return Err(PlanError::InvalidInput(format!(
                "start {start} or end {end} outside the {n}-node matrix"
            )));
        }
        if start == end && n == 1 {
            return Tour::new(vec![start])
                .ok_or_else(|| PlanError::InvalidInput("degenerate tour".into()));
        }
        // start == end over multiple nodes means a closed tour: cover the
        // other nodes greedily and come back to the start at the close
        let closed = start == end;

        let mut visited = vec![false; n];
        visited[start] = true;
        let mut path = Vec::with_capacity(n + 1);
        path.push(start);
        let mut current = start;

        while path.len() < n {
            let only_end_remains = path.len() == n - 1;
            let mut best: Option<(usize, u64)> = None;
            for next in 0..n {
                if visited[next] || (!closed && next == end && !only_end_remains) {
                    continue;
                }
                let d = matrix.get(current, next);
                // Strict < keeps ties at the lowest node index
                if best.is_none() || d < best.expect("checked is_none").1 {
                    best = Some((next, d));
                }
            }

            match best {
                Some((next, _)) => {
                    visited[next] = true;
                    path.push(next);
                    current = next;
                }
                None => return Err(PlanError::NoSolution),
            }
        }

        if closed {
            path.push(start);
        }
        Tour::new(path).ok_or(PlanError::NoSolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use proptest::prelude::*;

    fn matrix_for(points: &[Point]) -> DistanceMatrix {
        DistanceMatrix::from_points(points).expect("non-empty")
    }

    #[test]
    fn test_three_node_path() {
        let dm = matrix_for(&[
            Point::new(13200.0, 13200.0),
            Point::new(1100.0, 1133.0),
            Point::new(20000.0, 20000.0),
        ]);
        let tour = CheapestArcSolver.solve(&dm, 0, 2).expect("solve");
        assert_eq!(tour.start(), 0);
        assert_eq!(tour.end(), 2);
        assert_eq!(tour.len(), 3);
        // Only one interior node, so the path is forced
        assert_eq!(tour.nodes(), &[0, 1, 2]);
    }

    #[test]
    fn test_greedy_picks_cheapest_arc() {
        // From 0: node 2 (cost 1) beats node 1 (cost 5); end 3 withheld
        let dm = DistanceMatrix::from_data(
            4,
            vec![
                0, 5, 1, 9, //
                5, 0, 2, 9, //
                1, 2, 0, 9, //
                9, 9, 9, 0,
            ],
        )
        .expect("valid");
        let tour = CheapestArcSolver.solve(&dm, 0, 3).expect("solve");
        assert_eq!(tour.nodes(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // Nodes 1 and 2 are both 5 away from 0
        let dm = DistanceMatrix::from_data(
            4,
            vec![
                0, 5, 5, 9, //
                5, 0, 5, 9, //
                5, 5, 0, 9, //
                9, 9, 9, 0,
            ],
        )
        .expect("valid");
        let tour = CheapestArcSolver.solve(&dm, 0, 3).expect("solve");
        assert_eq!(tour.nodes(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_end_withheld_until_last() {
        // End node 1 is nearest to 0 but must still come last
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0, 1, 9, //
                1, 0, 9, //
                9, 9, 0,
            ],
        )
        .expect("valid");
        let tour = CheapestArcSolver.solve(&dm, 0, 1).expect("solve");
        assert_eq!(tour.nodes(), &[0, 2, 1]);
    }

    #[test]
    fn test_single_node() {
        let dm = matrix_for(&[Point::new(1.0, 1.0)]);
        let tour = CheapestArcSolver.solve(&dm, 0, 0).expect("solve");
        assert_eq!(tour.nodes(), &[0]);
    }

    #[test]
    fn test_start_equals_end_closes_the_tour() {
        let dm = matrix_for(&[
            Point::new(13200.0, 13200.0),
            Point::new(6180.0, 14813.0),
            Point::new(9772.0, 2556.0),
        ]);
        let tour = CheapestArcSolver.solve(&dm, 0, 0).expect("solve");
        assert!(tour.is_closed());
        assert_eq!(tour.start(), 0);
        assert_eq!(tour.end(), 0);
        assert_eq!(tour.len(), 4);
        // Node 1 is nearer the depot than node 2, so greedy visits it first
        assert_eq!(tour.nodes(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_closed_tour_greedy_order() {
        let dm = DistanceMatrix::from_data(
            4,
            vec![
                0, 5, 1, 9, //
                5, 0, 2, 3, //
                1, 2, 0, 9, //
                9, 3, 9, 0,
            ],
        )
        .expect("valid");
        let tour = CheapestArcSolver.solve(&dm, 0, 0).expect("solve");
        // 0 → 2 (cost 1) → 1 (cost 2) → 3 (cost 3) → back to 0
        assert_eq!(tour.nodes(), &[0, 2, 1, 3, 0]);
    }

    #[test]
    fn test_out_of_range_endpoints() {
        let dm = matrix_for(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(matches!(
            CheapestArcSolver.solve(&dm, 0, 5),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(matches!(
            CheapestArcSolver.solve(&dm, 5, 0),
            Err(PlanError::InvalidInput(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_tour_is_permutation_with_fixed_endpoints(
            coords in prop::collection::vec((0.0..26400.0, 0.0..26400.0), 2..9),
            end_offset in 1usize..8,
        ) {
            let points: Vec<Point> =
                coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let dm = matrix_for(&points);
            let end = 1 + end_offset % (points.len() - 1);
            let tour = CheapestArcSolver.solve(&dm, 0, end).expect("complete graph");

            prop_assert_eq!(tour.len(), points.len());
            prop_assert_eq!(tour.start(), 0);
            prop_assert_eq!(tour.end(), end);
            let mut seen = vec![false; points.len()];
            for &node in tour.nodes() {
                prop_assert!(!seen[node]);
                seen[node] = true;
            }
        }
    }
}
