//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **min_size**: Minimum neighborhood size (the point itself included) for
//!   a point to be "core".
//! - **Core point**: Has at least `min_size` points within ε, itself included.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in index order. For each point P not yet labeled:
//!    - Find neighbors within ε
//!    - If |neighbors| < min_size, mark as noise (may change later)
//!    - Else P is core: start new cluster, expand from neighbors
//!
//! 2. Expansion: grow the cluster round by round. Each round labels the
//!    current seeds, and the neighborhoods of seeds that turn out to be core
//!    themselves become the next round's seeds (deduplicated).
//!
//! ## Complexity
//!
//! - **Time**: O(n²·d) with the brute-force scan in [`EpsilonScan`].
//! - **Space**: O(n) for labels.
//!
//! ## When to Use
//!
//! - Clusters have non-convex shapes
//! - Number of clusters unknown
//! - Data has outliers
//! - Clusters have similar density
//!
//! ## Limitations
//!
//! - Struggles with varying densities (consider OPTICS or HDBSCAN)
//! - ε parameter is sensitive and dataset-dependent
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::BTreeSet;

use super::neighbors::EpsilonScan;
use crate::error::{Error, Result};

/// Final cluster assignment for a single point.
///
/// Cluster ids are 1-based and contiguous: a run that discovers K clusters
/// uses exactly the ids `1..=K`, assigned in the order each cluster's first
/// core point was reached by the index-order scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Neither core nor within epsilon of any core point.
    Noise,
    /// Member of the cluster with the given id.
    Cluster(u32),
}

impl Label {
    /// `true` if this point was left unclustered.
    pub fn is_noise(self) -> bool {
        matches!(self, Label::Noise)
    }

    /// The cluster id, or `None` for noise.
    pub fn cluster_id(self) -> Option<u32> {
        match self {
            Label::Cluster(id) => Some(id),
            Label::Noise => None,
        }
    }
}

// Internal label encoding used while a run is in flight.
// - UNDEFINED: never assigned yet
// - NOISE_LABEL: visited, but not density-reachable from any core point so
//   far (may be promoted to a cluster later)
// Cluster ids occupy the positive range, so the point count must stay below
// i32::MAX for every id to be representable.
const UNDEFINED: i32 = -2;
const NOISE_LABEL: i32 = -1;

const MAX_POINTS: usize = i32::MAX as usize - 1;

/// DBSCAN clustering engine.
///
/// Owns the point set and the run parameters; both are fixed at construction.
/// The only operation is [`label_all`](Dbscan::label_all), which assigns every
/// point either a cluster id or [`Label::Noise`].
#[derive(Debug, Clone)]
pub struct Dbscan {
    points: Vec<Vec<f32>>,
    dim: usize,
    epsilon: f32,
    min_size: usize,
}

impl Dbscan {
    /// Create an engine over `points` with the given parameters.
    ///
    /// # Arguments
    ///
    /// * `points` - The dataset; every point must have the same dimension.
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    ///   Must be finite and non-negative; zero groups only exactly
    ///   coincident points.
    /// * `min_size` - Minimum neighborhood size (the point itself included)
    ///   for a point to be core. Must be at least 1.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error on a negative or non-finite
    /// `epsilon`, a zero `min_size`, or mixed point dimensions, and with a
    /// capacity error when the point count cannot be addressed by the
    /// internal 32-bit label array (just under `i32::MAX` points).
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often determined by a k-distance plot (k = min_size - 1).
    /// - `min_size`: 2 * dimension is a common heuristic.
    pub fn new(points: Vec<Vec<f32>>, epsilon: f32, min_size: usize) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be finite and non-negative",
            });
        }

        if min_size == 0 {
            return Err(Error::InvalidParameter {
                name: "min_size",
                message: "must be at least 1",
            });
        }

        if points.len() > MAX_POINTS {
            return Err(Error::CapacityExceeded {
                n_points: points.len(),
                max: MAX_POINTS,
            });
        }

        let dim = points.first().map_or(0, Vec::len);
        for point in &points {
            if point.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: point.len(),
                });
            }
        }

        Ok(Self {
            points,
            dim,
            epsilon,
            min_size,
        })
    }

    /// Number of points in the dataset.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimension of the points (0 for an empty dataset).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The configured neighborhood radius.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// The configured minimum neighborhood size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Assign every point a cluster id or [`Label::Noise`].
    ///
    /// A pure function of the constructed inputs: repeated calls recompute
    /// from scratch and return identical labels, including identical cluster
    /// numbering. An empty dataset yields an empty vector.
    ///
    /// # Panics
    ///
    /// Panics if the expansion leaves any point unresolved. That would be a
    /// bug in this crate, not a condition callers can trigger.
    pub fn label_all(&self) -> Vec<Label> {
        let n = self.points.len();
        let scan = EpsilonScan::new(&self.points, self.epsilon);

        let mut labels = vec![UNDEFINED; n];
        let mut cluster: i32 = 0;

        for i in 0..n {
            if labels[i] != UNDEFINED {
                continue;
            }

            let neighbors = scan.neighbors(i);

            // The neighborhood includes `i` itself, so this compares the full
            // epsilon-ball population against min_size.
            if neighbors.len() < self.min_size {
                // Not enough neighbors: mark as noise (might be border later).
                labels[i] = NOISE_LABEL;
                continue;
            }

            cluster += 1;
            labels[i] = cluster;
            tracing::debug!(
                "cluster {} seeded from point {} ({} neighbors)",
                cluster,
                i,
                neighbors.len()
            );

            // Round-based expansion. Each round walks the current seeds in
            // ascending index order; the neighborhoods of seeds that are core
            // themselves form the next round, deduplicated through a set.
            let mut seeds: Vec<usize> = neighbors.into_iter().filter(|&j| j != i).collect();
            while !seeds.is_empty() {
                let mut next_round = BTreeSet::new();
                for &j in &seeds {
                    // A point previously labeled noise can still become a
                    // border point; this is the only permitted overwrite.
                    if labels[j] == NOISE_LABEL {
                        labels[j] = cluster;
                    }
                    if labels[j] != UNDEFINED {
                        continue;
                    }
                    labels[j] = cluster;

                    let reachable = scan.neighbors(j);
                    if reachable.len() >= self.min_size {
                        // `j` is core: everything it reaches joins the next
                        // round. Already-labeled entries are filtered by the
                        // checks above when their turn comes.
                        next_round.extend(reachable);
                    }
                }
                seeds = next_round.into_iter().collect();
            }
        }

        assert!(
            labels.iter().all(|&label| label != UNDEFINED),
            "point left unresolved after expansion"
        );

        let noise = labels.iter().filter(|&&label| label == NOISE_LABEL).count();
        tracing::debug!(
            "labeled {} points: {} clusters, {} noise",
            n,
            cluster,
            noise
        );

        labels
            .into_iter()
            .map(|label| {
                if label == NOISE_LABEL {
                    Label::Noise
                } else {
                    Label::Cluster(label as u32)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_for(points: Vec<Vec<f32>>, epsilon: f32, min_size: usize) -> Vec<Label> {
        Dbscan::new(points, epsilon, min_size).unwrap().label_all()
    }

    #[test]
    fn test_dbscan_cluster_and_outlier() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.0, 0.1],
            vec![0.0, 0.2],
            vec![10.0, 10.0],
        ];

        let labels = labels_for(points, 0.15, 2);

        assert_eq!(
            labels,
            vec![
                Label::Cluster(1),
                Label::Cluster(1),
                Label::Cluster(1),
                Label::Noise,
            ]
        );
    }

    #[test]
    fn test_dbscan_two_clusters() {
        let points = vec![
            // Cluster 1: around (0, 0)
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            vec![0.05, 0.05],
            // Cluster 2: around (5, 5)
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
            vec![5.1, 5.1],
            vec![5.05, 5.05],
        ];

        let labels = labels_for(points, 0.3, 3);

        for label in &labels[..5] {
            assert_eq!(*label, Label::Cluster(1));
        }
        for label in &labels[5..] {
            assert_eq!(*label, Label::Cluster(2));
        }
    }

    #[test]
    fn test_dbscan_empty_input() {
        let labels = labels_for(vec![], 0.5, 3);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_dbscan_all_noise() {
        // Points too far apart to form any dense region.
        let points = vec![
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
        ];

        let labels = labels_for(points, 0.5, 3);

        assert!(labels.iter().all(|label| label.is_noise()));
    }

    #[test]
    fn test_dbscan_min_size_larger_than_dataset() {
        let points = vec![vec![0.0], vec![0.1], vec![0.2]];
        let labels = labels_for(points, 1.0, 10);

        assert!(labels.iter().all(|label| label.is_noise()));
    }

    #[test]
    fn test_dbscan_coincident_points_zero_epsilon() {
        let points = vec![vec![1.0, 1.0]; 5];
        let labels = labels_for(points, 0.0, 3);

        // All five copies sit at distance zero from each other, so the
        // neighborhood of each is the full set.
        assert!(labels.iter().all(|&label| label == Label::Cluster(1)));
    }

    #[test]
    fn test_dbscan_chain_connects() {
        let points: Vec<Vec<f32>> = (0..10).map(|i| vec![i as f32 * 0.3, 0.0]).collect();

        let labels = labels_for(points, 0.5, 2);

        assert!(labels.iter().all(|&label| label == Label::Cluster(1)));
    }

    #[test]
    fn test_dbscan_singleton_clusters_at_min_size_one() {
        // With min_size = 1 every point is core (its neighborhood contains at
        // least itself), so isolated points form singleton clusters instead
        // of noise.
        let points = vec![vec![0.0], vec![5.0], vec![10.0]];
        let labels = labels_for(points, 1.0, 1);

        assert_eq!(
            labels,
            vec![Label::Cluster(1), Label::Cluster(2), Label::Cluster(3)]
        );
    }

    #[test]
    fn test_dbscan_noise_promoted_to_border() {
        // Point 0 is scanned first and provisionally labeled noise; the
        // cluster discovered afterwards reaches it and absorbs it.
        let points = vec![
            vec![1.5],
            vec![0.0],
            vec![0.25],
            vec![0.5],
            vec![0.75],
        ];

        let labels = labels_for(points, 0.75, 4);

        assert_eq!(labels[0], Label::Cluster(1));
        assert!(labels.iter().all(|&label| label == Label::Cluster(1)));
    }

    #[test]
    fn test_dbscan_border_point_goes_to_first_cluster_in_scan_order() {
        // Point 4 sits within epsilon of core points in both dense groups but
        // is not core itself. The group that is scanned first claims it.
        // Coordinates are multiples of 1/8 so every distance is exact.
        let points = vec![
            // Group A
            vec![0.0],
            vec![0.125],
            vec![0.25],
            vec![0.375],
            // Shared border point
            vec![1.0],
            // Group B
            vec![1.625],
            vec![1.75],
            vec![1.875],
            vec![2.0],
        ];

        let labels = labels_for(points, 0.625, 4);

        assert_eq!(labels[4], Label::Cluster(1));
        for label in &labels[..4] {
            assert_eq!(*label, Label::Cluster(1));
        }
        for label in &labels[5..] {
            assert_eq!(*label, Label::Cluster(2));
        }
    }

    #[test]
    fn test_dbscan_repeated_runs_identical() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![4.0, 4.0],
            vec![4.1, 4.1],
            vec![9.0, 0.0],
        ];

        let engine = Dbscan::new(points, 0.3, 2).unwrap();
        assert_eq!(engine.label_all(), engine.label_all());
    }

    #[test]
    fn test_dbscan_invalid_epsilon() {
        let points = vec![vec![0.0, 0.0]];

        assert!(Dbscan::new(points.clone(), -1.0, 3).is_err());
        assert!(Dbscan::new(points.clone(), f32::NAN, 3).is_err());
        assert!(Dbscan::new(points, f32::INFINITY, 3).is_err());
    }

    #[test]
    fn test_dbscan_invalid_min_size() {
        let points = vec![vec![0.0, 0.0]];
        assert!(Dbscan::new(points, 0.5, 0).is_err());
    }

    #[test]
    fn test_dbscan_dimension_mismatch() {
        let points = vec![vec![0.0, 0.0], vec![1.0]];

        match Dbscan::new(points, 0.5, 2) {
            Err(Error::DimensionMismatch { expected, found }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_dbscan_accessors() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let engine = Dbscan::new(points, 0.5, 2).unwrap();

        assert_eq!(engine.len(), 2);
        assert!(!engine.is_empty());
        assert_eq!(engine.dim(), 2);
        assert_eq!(engine.epsilon(), 0.5);
        assert_eq!(engine.min_size(), 2);
    }

    #[test]
    fn test_label_helpers() {
        assert!(Label::Noise.is_noise());
        assert!(!Label::Cluster(1).is_noise());
        assert_eq!(Label::Noise.cluster_id(), None);
        assert_eq!(Label::Cluster(7).cluster_id(), Some(7));
    }
}
