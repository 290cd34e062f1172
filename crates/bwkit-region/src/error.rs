//! Error types for bwkit-region

use thiserror::Error;

/// Errors that can occur during labeling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bwkit_core::Error),

    /// Connectivity code or mask rejected
    #[error("invalid connectivity: {0}")]
    InvalidConnectivity(String),

    /// Connectivity and image dimensionality cannot be reconciled
    #[error("dimension mismatch: connectivity has {mask} dimensions, input has {image}")]
    DimensionMismatch { mask: usize, image: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// More components than a 32-bit label image can number
    #[error("too many components: {0} provisional labels")]
    TooManyLabels(usize),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
