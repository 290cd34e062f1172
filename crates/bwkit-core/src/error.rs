//! Error types for bwkit-core
//!
//! Provides a unified error type for array construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// bwkit-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A shape with no axes or with a zero-length axis
    #[error("invalid shape: {0:?}")]
    InvalidShape(Vec<usize>),

    /// Backing data does not hold exactly one element per cell
    #[error("data length {actual} doesn't match shape {dims:?} ({expected} elements)")]
    DataLength {
        dims: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// Coordinate outside the array, or with the wrong number of axes
    #[error("index out of bounds: {index:?} for shape {dims:?}")]
    IndexOutOfBounds { index: Vec<usize>, dims: Vec<usize> },

    /// Rows of a nested matrix literal differ in length
    #[error("ragged rows: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Operation requires a matrix
    #[error("expected a 2-D array, got {0} dimensions")]
    NotTwoDimensional(usize),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for bwkit-core operations
pub type Result<T> = std::result::Result<T, Error>;
