//! patchwork-region - Patch grouping for two-tone rasters
//!
//! This crate partitions the foreground of a raster reduced to exactly two
//! colours into maximal 8-connected regions ("patches"):
//!
//! - **Classification** ([`mod@classify`]) - Foreground predicate and the
//!   two-tone precondition
//! - **Labeling** ([`mod@label`]) - Single-pass union-find labeling
//! - **Registry** ([`registry`]) - Disjoint, immutable patch lists
//! - **Banded labeling** ([`band`]) - Parallel labeling by row bands
//! - **Statistics** ([`stats`]) - Size, bounds and centroid per patch
//!
//! # Examples
//!
//! ```
//! use patchwork_region::find_patches;
//!
//! // 4x2 raster: a black diagonal pair and one lone black pixel
//! let b = [0, 0, 0, 255];
//! let w = [255, 255, 255, 255];
//! let buffer: Vec<u8> = [b, w, w, b, w, b, w, w].concat();
//!
//! let patches = find_patches(&buffer, 16).unwrap();
//! assert_eq!(patches.len(), 2);
//! assert_eq!(patches[0].offsets(), &[0, 20]);
//! assert_eq!(patches[1].offsets(), &[12]);
//! ```

pub mod band;
pub mod classify;
pub mod error;
pub mod label;
pub mod patches;
pub mod registry;
pub mod stats;
pub mod unionfind;

// Re-export core types
pub use patchwork_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export classification types and functions
pub use classify::{
    BlackForeground, Classification, Classifier, classify_raster, count_distinct_colors,
    foreground_mask, is_two_tone,
};

// Re-export labeling types and functions
pub use band::label_pixels_banded;
pub use label::{Labeling, label, label_pixels};
pub use registry::{Patch, materialize};
pub use unionfind::DisjointSets;

// Re-export entry points
pub use patches::{LabelOptions, classify, count_patches, find_patches, find_patches_with};

// Re-export statistics
pub use stats::{PatchStats, all_patch_stats, patch_stats};
