//! Patchwork - Two-tone raster patch grouping for Rust
//!
//! Patchwork groups the black pixels of a black-and-white RGBA raster into
//! maximal 8-connected patches so each one can be treated as an independent
//! object, for example painted a colour of its own.
//!
//! # Overview
//!
//! - Raster views over flat RGBA buffers ([`Raster`], [`RasterMut`])
//! - Two-tone classification and patch grouping ([`region`])
//! - Luma thresholding and per-patch recoloring ([`color`])
//!
//! # Example
//!
//! ```
//! use patchwork::color::{DEFAULT_THRESHOLD, color_patches, threshold};
//! use patchwork::region::find_patches;
//!
//! // 4x1 raster: dark, light, light, dark
//! let mut buffer = vec![
//!     10, 10, 10, 255, 240, 240, 240, 255, 230, 230, 230, 255, 20, 20, 20, 255,
//! ];
//! threshold(&mut buffer, 16, DEFAULT_THRESHOLD).unwrap();
//! assert_eq!(find_patches(&buffer, 16).unwrap().len(), 2);
//! assert_eq!(color_patches(&mut buffer, 16).unwrap(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use patchwork_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use patchwork_color as color;
pub use patchwork_region as region;
