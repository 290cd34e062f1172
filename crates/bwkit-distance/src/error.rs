//! Error types for bwkit-distance

use thiserror::Error;

/// Errors that can occur during distance transforms
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bwkit_core::Error),

    /// Metric name not recognised
    #[error(
        "invalid metric '{0}': expected euclidean, chessboard, cityblock or quasi-euclidean"
    )]
    InvalidMetric(String),

    /// The sweep engine only handles matrices
    #[error("unsupported dimensionality: expected a 2-D image, got {0} dimensions")]
    UnsupportedDimensionality(usize),

    /// An extent too large for 32-bit displacement bookkeeping
    #[error("image too large: {rows}x{cols}")]
    ImageTooLarge { rows: usize, cols: usize },
}

/// Result type for distance operations
pub type DistanceResult<T> = Result<T, DistanceError>;
