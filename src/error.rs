use thiserror::Error;

/// Errors returned when constructing a clustering engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Point count exceeds what the label array's index type can address.
    #[error("too many points: {n_points} exceeds the supported maximum of {max}")]
    CapacityExceeded {
        /// Number of points in the dataset.
        n_points: usize,
        /// Maximum supported number of points.
        max: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
