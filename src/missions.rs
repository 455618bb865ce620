//! Deterministic mission-point generation.
//!
//! Mission points are drawn around a handful of random cluster centers
//! inside the bounded mission square, mimicking how real mission sets
//! concentrate around areas of interest rather than spreading uniformly.
//! For a fixed seed the output is fully deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Point, DOMAIN_MAX};

/// Configurable mission-point generator.
///
/// Draws `num_clusters` cluster centers uniformly inside the domain (kept
/// `spread` away from the borders so offset points stay in bounds), then
/// scatters `points_per_cluster` points uniformly within `±spread` of each
/// center. Point count is fixed by this configuration, not by callers.
///
/// # Examples
///
/// ```
/// use ugv_patrol::missions::MissionField;
///
/// let field = MissionField::default();
/// let a = field.generate(42);
/// let b = field.generate(42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 30);
/// assert!(a.iter().all(|p| p.in_domain()));
/// ```
#[derive(Debug, Clone)]
pub struct MissionField {
    num_clusters: usize,
    points_per_cluster: usize,
    spread: f64,
}

impl MissionField {
    /// Creates a generator with the given shape parameters.
    ///
    /// Returns `None` if either count is zero, if `spread` is not a
    /// positive finite value, or if `spread` is too large for cluster
    /// centers to fit inside the domain.
    pub fn new(num_clusters: usize, points_per_cluster: usize, spread: f64) -> Option<Self> {
        if num_clusters == 0 || points_per_cluster == 0 {
            return None;
        }
        if !spread.is_finite() || spread <= 0.0 || 2.0 * spread >= DOMAIN_MAX {
            return None;
        }
        Some(Self {
            num_clusters,
            points_per_cluster,
            spread,
        })
    }

    /// Number of points each call to [`generate`](Self::generate) yields.
    pub fn num_points(&self) -> usize {
        self.num_clusters * self.points_per_cluster
    }

    /// Generates the mission-point set for the given seed.
    ///
    /// Deterministic: the same seed always yields the same points, in the
    /// same order (grouped by cluster of origin).
    pub fn generate(&self, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut points = Vec::with_capacity(self.num_points());

        for _ in 0..self.num_clusters {
            let cx = rng.random_range(self.spread..DOMAIN_MAX - self.spread);
            let cy = rng.random_range(self.spread..DOMAIN_MAX - self.spread);
            for _ in 0..self.points_per_cluster {
                let x = cx + rng.random_range(-self.spread..self.spread);
                let y = cy + rng.random_range(-self.spread..self.spread);
                points.push(Point::new(x, y));
            }
        }

        points
    }
}

impl Default for MissionField {
    /// Three clusters of ten points each, scattered within 2000 units of
    /// their centers.
    fn default() -> Self {
        Self {
            num_clusters: 3,
            points_per_cluster: 10,
            spread: 2000.0,
        }
    }
}

/// Generates the default mission-point set for a seed.
///
/// Convenience wrapper over [`MissionField::default`].
pub fn random_locations(seed: u64) -> Vec<Point> {
    MissionField::default().generate(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        assert_eq!(random_locations(7), random_locations(7));
    }

    #[test]
    fn test_seeds_differ() {
        assert_ne!(random_locations(1), random_locations(2));
    }

    #[test]
    fn test_points_in_domain() {
        for seed in [0, 1, 42, 9999] {
            assert!(random_locations(seed).iter().all(|p| p.in_domain()));
        }
    }

    #[test]
    fn test_point_count_fixed_by_config() {
        let field = MissionField::new(2, 5, 500.0).expect("valid");
        assert_eq!(field.num_points(), 10);
        assert_eq!(field.generate(3).len(), 10);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(MissionField::new(0, 10, 100.0).is_none());
        assert!(MissionField::new(3, 0, 100.0).is_none());
        assert!(MissionField::new(3, 10, 0.0).is_none());
        assert!(MissionField::new(3, 10, -5.0).is_none());
        assert!(MissionField::new(3, 10, f64::NAN).is_none());
        assert!(MissionField::new(3, 10, DOMAIN_MAX).is_none());
    }

    #[test]
    fn test_points_cluster_around_centers() {
        // Points from the same cluster of origin stay within 2*spread of
        // each other along each axis.
        let field = MissionField::new(1, 20, 1000.0).expect("valid");
        let pts = field.generate(11);
        for a in &pts {
            for b in &pts {
                assert!((a.x - b.x).abs() <= 2000.0);
                assert!((a.y - b.y).abs() <= 2000.0);
            }
        }
    }
}
