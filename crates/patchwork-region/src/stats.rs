//! Patch statistics
//!
//! Size, bounding box and centroid of each patch, in pixel coordinates.

use crate::registry::Patch;
use patchwork_core::{Raster, Rect};

/// Statistics for one patch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchStats {
    /// Number of pixels
    pub pixel_count: usize,
    /// Bounding box
    pub bounds: Rect,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
}

/// Compute statistics for one patch of `raster`.
pub fn patch_stats(raster: &Raster<'_>, patch: &Patch) -> PatchStats {
    let Some(first) = patch.first() else {
        return PatchStats::default();
    };
    let (x0, y0) = raster.coords_of(first);

    let mut sum_x = 0u64;
    let mut sum_y = 0u64;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);
    for offset in patch {
        let (x, y) = raster.coords_of(offset);
        sum_x += x as u64;
        sum_y += y as u64;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let count = patch.len();
    PatchStats {
        pixel_count: count,
        bounds: Rect::from_corners(min_x, min_y, max_x, max_y),
        centroid_x: sum_x as f64 / count as f64,
        centroid_y: sum_y as f64 / count as f64,
    }
}

/// Compute statistics for every patch, in the same order.
pub fn all_patch_stats(raster: &Raster<'_>, patches: &[Patch]) -> Vec<PatchStats> {
    patches.iter().map(|p| patch_stats(raster, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BlackForeground;
    use crate::label::label;
    use patchwork_test::Fixture;

    #[test]
    fn test_patch_stats() {
        let fx = Fixture::from_rows(&["#.#...", ".#....", "......", "....##"]).unwrap();
        let raster = fx.raster().unwrap();
        let patches = label(&raster, &BlackForeground);
        let stats = all_patch_stats(&raster, &patches);
        assert_eq!(stats.len(), 2);

        // V-shape: (0,0), (2,0), (1,1)
        assert_eq!(stats[0].pixel_count, 3);
        assert_eq!(stats[0].bounds, Rect::new(0, 0, 3, 2));
        assert!((stats[0].centroid_x - 1.0).abs() < 0.01);
        assert!((stats[0].centroid_y - 1.0 / 3.0).abs() < 0.01);

        assert_eq!(stats[1].pixel_count, 2);
        assert_eq!(stats[1].bounds, Rect::new(4, 3, 2, 1));
        assert!((stats[1].centroid_x - 4.5).abs() < 0.01);
    }
}
