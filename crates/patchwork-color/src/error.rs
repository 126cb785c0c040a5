//! Error types for patchwork-color

use thiserror::Error;

/// Errors that can occur during colour filtering
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] patchwork_core::Error),

    /// Patch grouping error
    #[error("region error: {0}")]
    Region(#[from] patchwork_region::RegionError),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
