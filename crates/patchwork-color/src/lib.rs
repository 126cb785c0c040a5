//! patchwork-color - Colour filters around patch grouping
//!
//! This crate provides the per-pixel filters that feed and consume
//! [`patchwork_region`]:
//!
//! - **Thresholding** ([`mod@threshold`]): Reduce a raster to black and white
//! - **Coloring** ([`coloring`]): Paint each connected black patch one colour

pub mod coloring;
pub mod error;
pub mod threshold;

// Re-export core types
pub use patchwork_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export filters
pub use coloring::{color_patches, color_patches_with, paint_patches, random_color};
pub use threshold::{DEFAULT_THRESHOLD, luma, threshold, threshold_raster};
