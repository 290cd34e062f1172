//! Error types for the host dispatch layer

use thiserror::Error;

/// Errors raised by [`crate::host::call`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    /// No entry point with this name
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// Wrong number of input arguments
    #[error("{function}: expected {min} to {max} arguments, got {actual}")]
    InvalidArgumentCount {
        function: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// More outputs requested than the function produces
    #[error("{function}: at most {max} outputs, {requested} requested")]
    TooManyOutputs {
        function: String,
        max: usize,
        requested: usize,
    },

    /// Argument of the wrong kind or value
    #[error("{function}: {message}")]
    InvalidArgument { function: String, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bwkit_core::Error),

    /// Labeling error
    #[error("region error: {0}")]
    Region(#[from] bwkit_region::RegionError),

    /// Distance transform error
    #[error("distance error: {0}")]
    Distance(#[from] bwkit_distance::DistanceError),
}

/// Result type for host calls
pub type HostResult<T> = Result<T, HostError>;
