//! Final pipeline output.

use serde::{Deserialize, Serialize};

use super::Point;

/// The result of one patrol-planning run.
///
/// Pairs the UGV's ordered stopping points with the mission-point set the
/// plan was computed from. The mission points are passed through unchanged
/// so downstream consumers (e.g. per-cluster UAV sub-route planning) can
/// reuse them without regenerating.
///
/// # Examples
///
/// ```
/// use ugv_patrol::models::{PatrolPlan, Point};
///
/// let plan = PatrolPlan::new(
///     vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)],
///     vec![Point::new(1.0, 1.0)],
/// );
/// assert_eq!(plan.route().len(), 2);
/// assert!((plan.total_distance() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolPlan {
    route: Vec<Point>,
    mission_points: Vec<Point>,
}

impl PatrolPlan {
    /// Creates a plan from a visiting-order route and the mission points
    /// it serves.
    pub fn new(route: Vec<Point>, mission_points: Vec<Point>) -> Self {
        Self {
            route,
            mission_points,
        }
    }

    /// The UGV's stopping points in visiting order.
    pub fn route(&self) -> &[Point] {
        &self.route
    }

    /// The mission points this plan was computed from, unchanged.
    pub fn mission_points(&self) -> &[Point] {
        &self.mission_points
    }

    /// Total Euclidean length of the route.
    pub fn total_distance(&self) -> f64 {
        self.route
            .windows(2)
            .map(|leg| leg[0].distance_to(&leg[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_accessors() {
        let route = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let missions = vec![Point::new(5.0, 5.0)];
        let plan = PatrolPlan::new(route.clone(), missions.clone());
        assert_eq!(plan.route(), route.as_slice());
        assert_eq!(plan.mission_points(), missions.as_slice());
    }

    #[test]
    fn test_total_distance_sums_legs() {
        let plan = PatrolPlan::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 4.0),
                Point::new(3.0, 0.0),
            ],
            vec![],
        );
        assert!((plan.total_distance() - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_distance_trivial_routes() {
        assert_eq!(PatrolPlan::new(vec![], vec![]).total_distance(), 0.0);
        let single = PatrolPlan::new(vec![Point::new(1.0, 1.0)], vec![]);
        assert_eq!(single.total_distance(), 0.0);
    }
}
