//! Banded labeling
//!
//! Rows are split into contiguous bands, each band is labeled on its own
//! scoped thread, and the per-band labelings are stitched together: labels
//! are shifted into one shared forest, then every foreground pixel on the
//! last row of a band is unioned with its foreground neighbours on the first
//! row of the next band.

use crate::classify::Classifier;
use crate::error::RegionResult;
use crate::label::{Labeling, UNLABELED, label_pixels};
use crate::unionfind::DisjointSets;
use log::debug;
use patchwork_core::{CHANNELS, Direction, Raster};
use std::thread;

/// Label `raster` in up to `bands` horizontal bands.
///
/// The band count is clamped to the number of rows. With one band this is
/// exactly [`label_pixels`].
pub fn label_pixels_banded<C>(
    raster: &Raster<'_>,
    classifier: &C,
    bands: usize,
) -> RegionResult<Labeling>
where
    C: Classifier + Sync + ?Sized,
{
    let height = raster.height();
    let bands = bands.clamp(1, height.max(1));
    if bands == 1 {
        return Ok(label_pixels(raster, classifier));
    }

    let width = raster.width();
    let rows_per_band = height.div_ceil(bands);
    let chunks: Vec<&[u8]> = raster.data().chunks(rows_per_band * width).collect();
    debug!(
        "labeling {} rows in {} bands of up to {} rows",
        height,
        chunks.len(),
        rows_per_band
    );

    let partial: Vec<RegionResult<Labeling>> = thread::scope(|s| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|&chunk| {
                s.spawn(move || -> RegionResult<Labeling> {
                    let band = Raster::new(chunk, width)?;
                    Ok(label_pixels(&band, classifier))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    let mut labels = Vec::with_capacity(raster.pixel_count());
    let mut sets = DisjointSets::new();
    for part in partial {
        let (band_labels, mut band_sets) = part?.into_parts();
        let base = sets.len();
        for _ in 0..band_sets.len() {
            sets.make_set();
        }
        labels.extend(band_labels.into_iter().map(|l| {
            if l == UNLABELED {
                UNLABELED
            } else {
                base + band_sets.find(l)
            }
        }));
    }

    let mut seams = 0usize;
    for band in 1..chunks.len() {
        let y = band * rows_per_band - 1;
        for x in 0..raster.columns() {
            let Some(offset) = raster.offset_of(x, y) else {
                continue;
            };
            let upper = labels[offset / CHANNELS];
            if upper == UNLABELED {
                continue;
            }
            for dir in [Direction::DownLeft, Direction::Down, Direction::DownRight] {
                if let Some(n) = raster.neighbor(offset, dir) {
                    let lower = labels[n / CHANNELS];
                    if lower != UNLABELED && !sets.same(upper, lower) {
                        sets.union(upper, lower);
                        seams += 1;
                    }
                }
            }
        }
    }
    debug!("joined {} components across band boundaries", seams);

    Ok(Labeling::from_parts(labels, sets))
}
