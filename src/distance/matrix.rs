//! Dense integer distance matrix.

use crate::error::PlanError;
use crate::models::Point;

/// A dense n×n matrix of rounded Euclidean distances, stored row-major.
///
/// Entries are non-negative integers: true Euclidean norms rounded to the
/// nearest whole unit, so the matrix is symmetric and satisfies the
/// triangle inequality up to rounding. Diagonal entries are zero by
/// definition rather than computed, avoiding floating-point self-distance
/// noise.
///
/// # Examples
///
/// ```
/// use ugv_patrol::distance::DistanceMatrix;
/// use ugv_patrol::models::Point;
///
/// let nodes = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&nodes).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(1, 0), 5);
/// assert_eq!(dm.get(2, 2), 0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the rounded Euclidean distance matrix for a node list.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `nodes` is empty.
    pub fn from_points(nodes: &[Point]) -> Result<Self, PlanError> {
        if nodes.is_empty() {
            return Err(PlanError::InvalidInput(
                "empty node list reached the matrix builder".into(),
            ));
        }
        let n = nodes.len();
        let mut data = vec![0u64; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]).round() as u64;
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { data, size: n })
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Total cost of the arcs along a node-index path.
    pub fn path_cost(&self, path: &[usize]) -> u64 {
        path.windows(2).map(|arc| self.get(arc[0], arc[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DOMAIN_MAX;
    use proptest::prelude::*;

    fn sample_nodes() -> Vec<Point> {
        vec![
            Point::new(13200.0, 13200.0),
            Point::new(1100.0, 1133.0),
            Point::new(20000.0, 20000.0),
        ]
    }

    #[test]
    fn test_rejects_empty_node_list() {
        let err = DistanceMatrix::from_points(&[]).expect_err("must fail");
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }

    #[test]
    fn test_rounded_euclidean() {
        let nodes = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let dm = DistanceMatrix::from_points(&nodes).expect("matrix");
        // hypot(1, 1) = 1.414... rounds to 1
        assert_eq!(dm.get(0, 1), 1);
    }

    #[test]
    fn test_zero_diagonal() {
        let dm = DistanceMatrix::from_points(&sample_nodes()).expect("matrix");
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0);
        }
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_nodes()).expect("matrix");
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
    }

    #[test]
    fn test_path_cost() {
        let dm = DistanceMatrix::from_data(3, vec![0, 2, 9, 2, 0, 4, 9, 4, 0]).expect("valid");
        assert_eq!(dm.path_cost(&[0, 1, 2]), 6);
        assert_eq!(dm.path_cost(&[0, 2]), 9);
        assert_eq!(dm.path_cost(&[1]), 0);
    }

    proptest! {
        #[test]
        fn prop_symmetric_zero_diagonal(
            coords in prop::collection::vec((0.0..DOMAIN_MAX, 0.0..DOMAIN_MAX), 1..8)
        ) {
            let nodes: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let dm = DistanceMatrix::from_points(&nodes).expect("non-empty");
            prop_assert!(dm.is_symmetric());
            for i in 0..dm.size() {
                prop_assert_eq!(dm.get(i, i), 0);
            }
        }

        #[test]
        fn prop_triangle_inequality_up_to_rounding(
            coords in prop::collection::vec((0.0..DOMAIN_MAX, 0.0..DOMAIN_MAX), 3..8)
        ) {
            let nodes: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let dm = DistanceMatrix::from_points(&nodes).expect("non-empty");
            let n = dm.size();
            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        // Each rounding introduces at most 0.5 of error
                        prop_assert!(dm.get(i, j) <= dm.get(i, k) + dm.get(k, j) + 2);
                    }
                }
            }
        }
    }
}
