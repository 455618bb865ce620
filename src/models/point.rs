//! Mission-area coordinates.

use serde::{Deserialize, Serialize};

/// Upper bound of the square mission domain, per axis.
///
/// Coordinates live in `[0, DOMAIN_MAX]` on both axes.
pub const DOMAIN_MAX: f64 = 26400.0;

/// The fixed depot at the center of the mission domain.
///
/// The UGV patrol always originates here; the depot is always node 0 of
/// the routing node list.
pub const DEPOT: Point = Point {
    x: 13200.0,
    y: 13200.0,
};

/// A 2D location in the mission domain.
///
/// # Examples
///
/// ```
/// use ugv_patrol::models::{Point, DEPOT};
///
/// let p = Point::new(13200.0, 13200.0);
/// assert_eq!(p, DEPOT);
/// assert_eq!(p.coordinate_sum(), 26400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of the two coordinates.
    ///
    /// Used to pick the route endpoint: the node list index with the
    /// maximal coordinate sum becomes the patrol's final stop.
    pub fn coordinate_sum(&self) -> f64 {
        self.x + self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Cheaper than [`distance_to`](Self::distance_to) when only ordering
    /// matters, e.g. nearest-centroid assignment.
    pub fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns `true` if both coordinates lie within `[0, DOMAIN_MAX]`.
    pub fn in_domain(&self) -> bool {
        (0.0..=DOMAIN_MAX).contains(&self.x) && (0.0..=DOMAIN_MAX).contains(&self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
