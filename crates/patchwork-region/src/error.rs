//! Error types for patchwork-region

use thiserror::Error;

/// Errors that can occur during patch grouping
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (malformed raster, bad offset)
    #[error("core error: {0}")]
    Core(#[from] patchwork_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
