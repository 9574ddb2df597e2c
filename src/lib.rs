//! Density-based clustering for dense vectors.
//!
//! `thicket` is a small library implementing DBSCAN over in-memory point
//! sets: points in dense regions are grouped into clusters, sparse points are
//! labeled noise.
//!
//! The public API is under [`cluster`], which provides:
//! - [`Dbscan`]: the clustering engine (construct with points, epsilon, and a
//!   minimum neighborhood size, then call [`Dbscan::label_all`])
//! - [`Label`]: the per-point result, a cluster id or noise
//! - [`EpsilonScan`]: the underlying brute-force neighborhood query

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Dbscan, EpsilonScan, Label};
pub use error::{Error, Result};
