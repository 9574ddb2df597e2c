//! DBSCAN on three synthetic 2D datasets: blobs, circles, and moons.
//!
//! Generates each dataset, standardizes it, clusters it, and prints a
//! per-cluster summary. Run with `RUST_LOG=debug` to see the engine's
//! cluster-discovery events.

use std::f32::consts::PI;

use rand::prelude::*;
use rand_distr::Normal;
use thicket::{Dbscan, Label};

/// Gaussian blobs around uniformly placed centers.
fn make_blobs(n: usize, centers: usize, rng: &mut StdRng) -> Vec<Vec<f32>> {
    let unit = Normal::new(0.0f32, 1.0).unwrap();
    let centers: Vec<(f32, f32)> = (0..centers)
        .map(|_| (rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
        .collect();

    (0..n)
        .map(|i| {
            let (cx, cy) = centers[i % centers.len()];
            vec![cx + unit.sample(rng), cy + unit.sample(rng)]
        })
        .collect()
}

/// Two concentric circles; the inner radius is `factor` times the outer.
fn make_circles(n: usize, factor: f32, noise: f32, rng: &mut StdRng) -> Vec<Vec<f32>> {
    let jitter = Normal::new(0.0f32, noise).unwrap();
    let half = n / 2;

    (0..n)
        .map(|i| {
            let (k, count, radius) = if i < half {
                (i, half, 1.0)
            } else {
                (i - half, n - half, factor)
            };
            let t = 2.0 * PI * (k as f32) / count as f32;
            vec![
                radius * t.cos() + jitter.sample(rng),
                radius * t.sin() + jitter.sample(rng),
            ]
        })
        .collect()
}

/// Two interleaving half circles.
fn make_moons(n: usize, noise: f32, rng: &mut StdRng) -> Vec<Vec<f32>> {
    let jitter = Normal::new(0.0f32, noise).unwrap();
    let half = n / 2;

    (0..n)
        .map(|i| {
            let (x, y) = if i < half {
                let t = PI * (i as f32) / (half - 1) as f32;
                (t.cos(), t.sin())
            } else {
                let t = PI * ((i - half) as f32) / (n - half - 1) as f32;
                (1.0 - t.cos(), 0.5 - t.sin())
            };
            vec![x + jitter.sample(rng), y + jitter.sample(rng)]
        })
        .collect()
}

/// Shift to zero mean and scale to unit variance, over all coordinates at
/// once so the aspect ratio of the dataset is preserved.
fn standardize(points: &mut [Vec<f32>]) {
    let count = points.iter().map(Vec::len).sum::<usize>() as f32;
    if count == 0.0 {
        return;
    }

    let mean = points.iter().flatten().sum::<f32>() / count;
    let variance = points
        .iter()
        .flatten()
        .map(|x| (x - mean).powi(2))
        .sum::<f32>()
        / count;
    let std = variance.sqrt().max(f32::EPSILON);

    for point in points.iter_mut() {
        for x in point.iter_mut() {
            *x = (*x - mean) / std;
        }
    }
}

fn report(name: &str, labels: &[Label]) {
    let n_clusters = labels
        .iter()
        .filter_map(|l| l.cluster_id())
        .max()
        .unwrap_or(0);
    let noise = labels.iter().filter(|l| l.is_noise()).count();

    println!("=== {name} ===");
    println!("  {} points, {} clusters, {} noise", labels.len(), n_clusters, noise);
    for id in 1..=n_clusters {
        let size = labels
            .iter()
            .filter(|l| l.cluster_id() == Some(id))
            .count();
        println!("  cluster {id}: {size} points");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let epsilon = 0.2;
    let min_size = 5;
    let n = 500;

    let mut rng = StdRng::seed_from_u64(42);

    let datasets = vec![
        ("blobs", make_blobs(n, 4, &mut rng)),
        ("circles", make_circles(n, 0.5, 0.0375, &mut rng)),
        ("moons", make_moons(n, 0.05, &mut rng)),
    ];

    for (name, mut points) in datasets {
        standardize(&mut points);
        let engine = Dbscan::new(points, epsilon, min_size).unwrap();
        report(name, &engine.label_all());
    }
}
