//! Error types for patchwork-core
//!
//! A raster that cannot be laid out as whole rows of whole pixels is
//! rejected when the view is built, so every later operation can rely on
//! `width % 4 == 0` and `len % width == 0`.

use thiserror::Error;

/// Patchwork core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer length and row width do not describe whole rows of whole pixels
    #[error("invalid raster: {len} channels cannot be split into rows of {width} channels")]
    InvalidRaster { len: usize, width: usize },

    /// Pixel offset is misaligned or outside the buffer
    #[error("invalid pixel offset {offset} for a buffer of {len} channels")]
    InvalidOffset { offset: usize, len: usize },
}

/// Result type alias for patchwork core operations
pub type Result<T> = std::result::Result<T, Error>;
