//! Synthetic two-cluster dataset for binary classification.
//!
//! One Gaussian cloud per label on opposite sides of the origin, drawn from
//! an explicit seeded generator so the same config always reproduces the
//! same point set, in the same order.

use ndarray::arr1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::classifier::{Label, LabeledPoint};

/// Configuration for cluster generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Number of points per label
    pub points_per_class: usize,
    /// Mean of the positive-label cluster
    pub center_positive: [f64; 2],
    /// Mean of the negative-label cluster
    pub center_negative: [f64; 2],
    /// Standard deviation of the offsets around each center
    pub spread: f64,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            points_per_class: 20,
            center_positive: [1.0, 1.0],
            center_negative: [-1.0, -1.0],
            spread: 1.0,
            seed: 42,
        }
    }
}

/// Generate the positive cluster followed by the negative cluster.
///
/// Point order is part of the contract: the trainer scans the set in exactly
/// this order, so a config pins down the whole update trajectory. No
/// shuffling is applied.
///
/// # Panics
///
/// Panics if `spread` is negative or not finite.
///
/// # Examples
///
/// ```
/// use perceptron_trace::{generate_clusters, ClusterConfig};
///
/// let points = generate_clusters(&ClusterConfig::default());
/// assert_eq!(points.len(), 40); // 20 per label
/// ```
pub fn generate_clusters(config: &ClusterConfig) -> Vec<LabeledPoint> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let offset = Normal::new(0.0, config.spread).expect("spread must be finite and non-negative");

    let mut points = Vec::with_capacity(config.points_per_class * 2);

    for label in Label::all() {
        let center = match label {
            Label::Positive => config.center_positive,
            Label::Negative => config.center_negative,
        };

        for _ in 0..config.points_per_class {
            let x = center[0] + offset.sample(&mut rng);
            let y = center[1] + offset.sample(&mut rng);
            points.push(LabeledPoint::new(arr1(&[x, y]), label));
        }
    }

    tracing::info!(
        "Generated {} labeled points from seed {}",
        points.len(),
        config.seed
    );

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_both_clusters_in_order() {
        let config = ClusterConfig {
            points_per_class: 5,
            ..Default::default()
        };
        let points = generate_clusters(&config);

        assert_eq!(points.len(), 10);
        assert!(points[..5].iter().all(|p| p.label == Label::Positive));
        assert!(points[5..].iter().all(|p| p.label == Label::Negative));
    }

    #[test]
    fn same_seed_reproduces_the_same_points() {
        let config = ClusterConfig::default();
        let a = generate_clusters(&config);
        let b = generate_clusters(&config);

        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.features, q.features);
            assert_eq!(p.label, q.label);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_clusters(&ClusterConfig::default());
        let b = generate_clusters(&ClusterConfig {
            seed: 43,
            ..Default::default()
        });

        assert!(a
            .iter()
            .zip(b.iter())
            .any(|(p, q)| p.features != q.features));
    }

    #[test]
    fn zero_spread_puts_points_on_the_centers() {
        let config = ClusterConfig {
            points_per_class: 3,
            spread: 0.0,
            ..Default::default()
        };
        let points = generate_clusters(&config);

        for point in &points[..3] {
            assert_eq!(point.features, arr1(&[1.0, 1.0]));
        }
        for point in &points[3..] {
            assert_eq!(point.features, arr1(&[-1.0, -1.0]));
        }
    }

    #[test]
    fn default_config_matches_the_classic_setup() {
        let config = ClusterConfig::default();
        assert_eq!(config.points_per_class, 20);
        assert_eq!(config.center_positive, [1.0, 1.0]);
        assert_eq!(config.center_negative, [-1.0, -1.0]);
        assert_eq!(config.spread, 1.0);
        assert_eq!(config.seed, 42);
    }
}
