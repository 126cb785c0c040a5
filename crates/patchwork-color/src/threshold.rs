//! Luma thresholding
//!
//! Reduces an RGBA raster to black and white, which is the two-tone input
//! patch grouping expects. Luma uses the Rec. 709 weights.

use crate::ColorResult;
use patchwork_core::{RasterMut, Rgb};

/// Default luma threshold
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Rec. 709 luma of a colour, in `0.0..=255.0`.
#[inline]
pub fn luma(color: Rgb) -> f64 {
    0.2126 * color.r as f64 + 0.7152 * color.g as f64 + 0.0722 * color.b as f64
}

/// Threshold a raster in place.
///
/// Pixels with luma `>= threshold` become white, the rest black. Alpha is
/// left untouched. Returns the number of pixels turned black.
pub fn threshold_raster(raster: &mut RasterMut<'_>, threshold: u8) -> usize {
    let mut black = 0;
    for px in raster.pixels_mut() {
        let Some(color) = Rgb::from_channels(px) else {
            continue;
        };
        if luma(color) >= threshold as f64 {
            Rgb::WHITE.write_to(px);
        } else {
            Rgb::BLACK.write_to(px);
            black += 1;
        }
    }
    black
}

/// Threshold an RGBA buffer in place.
///
/// # Errors
///
/// Returns [`crate::ColorError::Core`] if `buffer` and `width` do not
/// describe a valid raster.
pub fn threshold(buffer: &mut [u8], width: usize, threshold: u8) -> ColorResult<usize> {
    let mut raster = RasterMut::new(buffer, width)?;
    Ok(threshold_raster(&mut raster, threshold))
}
