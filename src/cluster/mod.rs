//! Density-based clustering of dense vectors.
//!
//! This module implements DBSCAN, a clustering algorithm that groups points
//! lying in dense regions and labels the rest as noise.
//!
//! ## Why density-based?
//!
//! Centroid methods like k-means force every point into a cluster and assume
//! roughly spherical groups. DBSCAN instead grows clusters from locally dense
//! neighborhoods, so it discovers non-convex shapes, determines the number of
//! clusters on its own, and leaves outliers unassigned.
//!
//! ## Components
//!
//! - [`EpsilonScan`]: the neighborhood query — a brute-force epsilon-ball
//!   scan over the point set. Self-contained; anything answering the same
//!   query could stand in for it.
//! - [`Dbscan`]: the engine — owns the points and parameters, runs the
//!   scan-and-expand label state machine, and returns one [`Label`] per
//!   point.
//!
//! ## Usage
//!
//! ```rust
//! use thicket::{Dbscan, Label};
//!
//! let points = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.0, 10.1],
//!     vec![-30.0, 5.0],
//! ];
//!
//! let engine = Dbscan::new(points, 0.5, 2).unwrap();
//! let labels = engine.label_all();
//!
//! assert_eq!(labels[0], Label::Cluster(1));
//! assert_eq!(labels[1], Label::Cluster(1));
//! assert_eq!(labels[2], Label::Cluster(2));
//! assert_eq!(labels[3], Label::Cluster(2));
//! assert_eq!(labels[4], Label::Noise);
//! ```

mod dbscan;
mod neighbors;

pub use dbscan::{Dbscan, Label};
pub use neighbors::EpsilonScan;
