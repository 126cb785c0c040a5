//! Per-patch recoloring
//!
//! Groups the black pixels of a two-tone raster into patches and paints
//! each patch one colour. Background pixels and alpha are left untouched.
//!
//! # Examples
//!
//! ```
//! use patchwork_color::coloring::color_patches_with;
//! use patchwork_core::Rgb;
//!
//! let b = [0, 0, 0, 255];
//! let w = [255, 255, 255, 255];
//! let mut buffer: Vec<u8> = [b, w, b].concat();
//!
//! let palette = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
//! let painted = color_patches_with(&mut buffer, 12, |i| palette[i]).unwrap();
//! assert_eq!(painted, 2);
//! assert_eq!(&buffer[..4], &[255, 0, 0, 255]);
//! assert_eq!(&buffer[8..], &[0, 0, 255, 255]);
//! ```

use crate::ColorResult;
use log::debug;
use patchwork_core::{RasterMut, Rgb};
use patchwork_region::{BlackForeground, LabelOptions, Patch, find_patches_with};

/// A uniformly random opaque colour.
pub fn random_color() -> Rgb {
    let bits: u32 = rand::random();
    Rgb::new((bits >> 16) as u8, (bits >> 8) as u8, bits as u8)
}

/// Paint every pixel of each patch with `palette(patch_index)`.
///
/// # Errors
///
/// Returns [`crate::ColorError::Core`] if a patch offset does not address a
/// pixel of `raster`.
pub fn paint_patches<F>(
    raster: &mut RasterMut<'_>,
    patches: &[Patch],
    mut palette: F,
) -> ColorResult<()>
where
    F: FnMut(usize) -> Rgb,
{
    for (i, patch) in patches.iter().enumerate() {
        let color = palette(i);
        for offset in patch {
            raster.set_color(offset, color)?;
        }
    }
    Ok(())
}

/// Recolor each patch of a two-tone buffer using a caller-chosen palette.
///
/// `palette` receives the patch index (patches are ordered by their first
/// pixel in scan order). Returns the number of patches painted; a buffer
/// that is not two-tone is left unchanged and yields 0.
///
/// # Errors
///
/// Returns an error if `buffer` and `width` do not describe a valid raster.
pub fn color_patches_with<F>(buffer: &mut [u8], width: usize, palette: F) -> ColorResult<usize>
where
    F: FnMut(usize) -> Rgb,
{
    let mut raster = RasterMut::new(buffer, width)?;
    let patches = find_patches_with(
        &raster.as_raster(),
        &BlackForeground,
        &LabelOptions::default(),
    )?;
    paint_patches(&mut raster, &patches, palette)?;
    debug!("painted {} patches", patches.len());
    Ok(patches.len())
}

/// Recolor each patch of a two-tone buffer with a random colour.
pub fn color_patches(buffer: &mut [u8], width: usize) -> ColorResult<usize> {
    color_patches_with(buffer, width, |_| random_color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patchwork_test::Fixture;

    #[test]
    fn test_paint_patches_keeps_background() {
        let mut fx = Fixture::from_rows(&["#..", "..#"]).unwrap();
        let width = fx.width;
        let painted =
            color_patches_with(&mut fx.data, width, |i| Rgb::new(i as u8 + 1, 0, 0)).unwrap();
        assert_eq!(painted, 2);

        let raster = fx.raster().unwrap();
        assert_eq!(raster.color_at(fx.offset(0, 0)), Some(Rgb::new(1, 0, 0)));
        assert_eq!(raster.color_at(fx.offset(2, 1)), Some(Rgb::new(2, 0, 0)));
        assert_eq!(raster.color_at(fx.offset(1, 0)), Some(Rgb::WHITE));
        assert!(fx.data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_not_two_tone_unchanged() {
        let mut fx = Fixture::from_rows(&["#r", ".."]).unwrap();
        let before = fx.data.clone();
        let width = fx.width;
        assert_eq!(color_patches(&mut fx.data, width).unwrap(), 0);
        assert_eq!(fx.data, before);
    }

    #[test]
    fn test_paint_rejects_foreign_offsets() {
        let big = Fixture::from_rows(&["....", "...#"]).unwrap();
        let patches = patchwork_region::find_patches(&big.data, big.width).unwrap();
        let mut small = Fixture::from_rows(&["#."]).unwrap();
        let width = small.width;
        let mut raster = RasterMut::new(&mut small.data, width).unwrap();
        assert!(paint_patches(&mut raster, &patches, |_| Rgb::BLACK).is_err());
    }
}
