//! Lloyd's k-means with k-means++ seeding.
//!
//! # Algorithm
//!
//! Standard k-means: seed centroids with k-means++ (points chosen with
//! probability proportional to squared distance from the nearest centroid
//! already chosen), then alternate nearest-centroid assignment and
//! centroid recomputation until the labels stop changing or the iteration
//! cap is reached. The objective minimized is the within-cluster sum of
//! squared Euclidean distances.
//!
//! # Complexity
//!
//! O(n·k·i) where n = number of points, i = iterations to convergence.
//!
//! # Reference
//!
//! Arthur, D. & Vassilvitskii, S. (2007). "k-means++: The Advantages of
//! Careful Seeding", *SODA '07*, 1027-1035.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PlanError;
use crate::models::Point;

use super::{Clusterer, Clustering};

/// K-means clusterer with a fixed cluster count.
///
/// Initialization is random by default; call [`with_seed`](Self::with_seed)
/// to pin it when reproducible output matters (the mission-point seed does
/// not control it).
///
/// Assignment ties and duplicate-heavy inputs resolve to the lowest
/// cluster index, so fewer than `k` distinct points can leave some labels
/// unused and their centroids at the seeding position.
///
/// # Examples
///
/// ```
/// use ugv_patrol::cluster::{Clusterer, KMeans};
/// use ugv_patrol::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(100.0, 100.0),
///     Point::new(101.0, 100.0),
/// ];
/// let fit = KMeans::new(2).with_seed(7).fit(&points).unwrap();
/// assert_eq!(fit.centroids().len(), 2);
/// assert_eq!(fit.labels().len(), 4);
/// assert_eq!(fit.labels()[0], fit.labels()[1]);
/// assert_ne!(fit.labels()[0], fit.labels()[2]);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    max_iter: usize,
    seed: Option<u64>,
}

impl KMeans {
    /// Creates a clusterer producing `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            seed: None,
        }
    }

    /// Sets the iteration cap (default 100).
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Pins the initialization randomness to a seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Picks `k` initial centroids via k-means++.
    fn seed_centroids<R: Rng>(&self, points: &[Point], rng: &mut R) -> Vec<Point> {
        let mut centroids = Vec::with_capacity(self.k);
        centroids.push(points[rng.random_range(0..points.len() as u64) as usize]);

        while centroids.len() < self.k {
            let weights: Vec<f64> = points
                .iter()
                .map(|p| {
                    centroids
                        .iter()
                        .map(|c| p.distance_sq(c))
                        .fold(f64::INFINITY, f64::min)
                })
                .collect();
            let total: f64 = weights.iter().sum();

            let next = if total > 0.0 {
                let mut target = rng.random_range(0.0..total);
                let mut chosen = None;
                let mut last_positive = 0;
                for (i, &w) in weights.iter().enumerate() {
                    if w <= 0.0 {
                        // Already-chosen centroids carry zero weight and
                        // must not be re-picked on rounding fall-through
                        continue;
                    }
                    last_positive = i;
                    if target < w {
                        chosen = Some(i);
                        break;
                    }
                    target -= w;
                }
                chosen.unwrap_or(last_positive)
            } else {
                // All remaining points coincide with a centroid
                rng.random_range(0..points.len() as u64) as usize
            };
            centroids.push(points[next]);
        }

        centroids
    }
}

impl Clusterer for KMeans {
    fn fit(&self, points: &[Point]) -> Result<Clustering, PlanError> {
        if self.k == 0 {
            return Err(PlanError::InvalidInput("cluster count must be > 0".into()));
        }
        if points.is_empty() {
            return Err(PlanError::InvalidInput("no points to cluster".into()));
        }
        if points.len() < self.k {
            return Err(PlanError::InvalidInput(format!(
                "{} points cannot form {} clusters",
                points.len(),
                self.k
            )));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut centroids = self.seed_centroids(points, &mut rng);
        let mut labels = vec![0usize; points.len()];

        for _ in 0..self.max_iter {
            // Assignment step: nearest centroid, ties to the lowest index
            let mut changed = false;
            for (i, p) in points.iter().enumerate() {
                let mut best = 0;
                let mut best_d = p.distance_sq(&centroids[0]);
                for (c, centroid) in centroids.iter().enumerate().skip(1) {
                    let d = p.distance_sq(centroid);
                    if d < best_d {
                        best = c;
                        best_d = d;
                    }
                }
                if labels[i] != best {
                    labels[i] = best;
                    changed = true;
                }
            }

            // Update step: arithmetic mean of each cluster's members.
            // An empty cluster keeps its previous centroid.
            let mut sums = vec![(0.0f64, 0.0f64, 0usize); self.k];
            for (p, &label) in points.iter().zip(&labels) {
                sums[label].0 += p.x;
                sums[label].1 += p.y;
                sums[label].2 += 1;
            }
            for (c, &(sx, sy, count)) in sums.iter().enumerate() {
                if count > 0 {
                    centroids[c] = Point::new(sx / count as f64, sy / count as f64);
                }
            }

            if !changed {
                break;
            }
        }

        Ok(Clustering::new(centroids, labels))
    }
}
