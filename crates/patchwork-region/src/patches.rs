//! Entry points over raw channel buffers
//!
//! These are the operations the filters and UI call: `classify` to test the
//! two-tone precondition and `find_patches` to group the foreground.

use crate::band::label_pixels_banded;
use crate::classify::{BlackForeground, Classification, Classifier, classify_raster, is_two_tone};
use crate::error::{RegionError, RegionResult};
use crate::registry::{Patch, materialize};
use log::debug;
use patchwork_core::Raster;

/// Options for patch finding
#[derive(Debug, Clone)]
pub struct LabelOptions {
    /// Number of horizontal bands labeled in parallel (1 = sequential)
    pub bands: usize,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self { bands: 1 }
    }
}

impl LabelOptions {
    /// Set the band count
    pub fn with_bands(mut self, bands: usize) -> Self {
        self.bands = bands;
        self
    }
}

/// Count colours in `buffer` and report whether it is two-tone.
///
/// # Errors
///
/// Returns [`RegionError::Core`] if `buffer` and `width` do not describe a
/// valid raster.
pub fn classify(buffer: &[u8], width: usize) -> RegionResult<Classification> {
    let raster = Raster::new(buffer, width)?;
    Ok(classify_raster(&raster))
}

/// Group the black pixels of a two-tone buffer into 8-connected patches.
///
/// Returns an empty list when the buffer does not hold exactly two colours.
///
/// # Errors
///
/// Returns [`RegionError::Core`] if `buffer` and `width` do not describe a
/// valid raster.
pub fn find_patches(buffer: &[u8], width: usize) -> RegionResult<Vec<Patch>> {
    let raster = Raster::new(buffer, width)?;
    find_patches_with(&raster, &BlackForeground, &LabelOptions::default())
}

/// Number of patches [`find_patches`] would return.
pub fn count_patches(buffer: &[u8], width: usize) -> RegionResult<usize> {
    Ok(find_patches(buffer, width)?.len())
}

/// Group foreground pixels using a custom classifier and options.
///
/// The two-tone precondition still applies.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `options.bands` is zero.
pub fn find_patches_with<C>(
    raster: &Raster<'_>,
    classifier: &C,
    options: &LabelOptions,
) -> RegionResult<Vec<Patch>>
where
    C: Classifier + Sync + ?Sized,
{
    if options.bands == 0 {
        return Err(RegionError::InvalidParameters(
            "band count must be at least 1".to_string(),
        ));
    }
    if !is_two_tone(raster) {
        debug!("raster is not two-tone; returning no patches");
        return Ok(Vec::new());
    }

    let labeling = label_pixels_banded(raster, classifier, options.bands)?;
    let patches = materialize(labeling);
    debug!("found {} patches", patches.len());
    Ok(patches)
}
