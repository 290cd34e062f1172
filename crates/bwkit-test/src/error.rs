//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture file could not be parsed
    #[error("failed to load matrix '{path}': {message}")]
    MatrixLoad { path: String, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bwkit_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
