//! Tour type produced by the route solver.

use serde::Serialize;

/// An ordered sequence of node-list indices forming a Hamiltonian path.
///
/// The path runs from a fixed start node to a selected end node and visits
/// every node exactly once. When the selected end coincides with the
/// start, the sequence closes back to it: the start index appears again as
/// the final entry and every other node is visited exactly once in
/// between.
///
/// # Examples
///
/// ```
/// use ugv_patrol::models::Tour;
///
/// let tour = Tour::new(vec![0, 1, 2]).unwrap();
/// assert_eq!(tour.start(), 0);
/// assert_eq!(tour.end(), 2);
/// assert_eq!(tour.len(), 3);
/// assert!(!tour.is_closed());
///
/// let cycle = Tour::new(vec![0, 2, 1, 0]).unwrap();
/// assert_eq!(cycle.start(), cycle.end());
/// assert!(cycle.is_closed());
/// ```
// No Deserialize: construction goes through `new` so the permutation
// invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Creates a tour over the given node indices.
    ///
    /// A sequence whose last entry repeats its first is a closed tour;
    /// any other repeat, an empty sequence, or an index outside the
    /// visited node range is rejected with `None`.
    pub fn new(nodes: Vec<usize>) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        let closed = nodes.len() > 1 && nodes[0] == nodes[nodes.len() - 1];
        let unique = if closed { nodes.len() - 1 } else { nodes.len() };
        let mut seen = vec![false; unique];
        for &n in &nodes[..unique] {
            if n >= unique || seen[n] {
                return None;
            }
            seen[n] = true;
        }
        Some(Self { nodes })
    }

    /// The node indices in visiting order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// First node of the path.
    pub fn start(&self) -> usize {
        self.nodes[0]
    }

    /// Last node of the path. Equals [`start`](Self::start) for a closed
    /// tour.
    pub fn end(&self) -> usize {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns `true` if this tour returns to its start node.
    pub fn is_closed(&self) -> bool {
        self.nodes.len() > 1 && self.nodes[0] == self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes visited.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour visits no nodes.
    ///
    /// Always `false` for tours built through [`Tour::new`], which rejects
    /// empty sequences; present for completeness of the container API.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
