//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture rows do not describe a valid raster
    #[error("bad fixture at row {row}: {message}")]
    Fixture { row: usize, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] patchwork_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
