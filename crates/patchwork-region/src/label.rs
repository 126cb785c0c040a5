//! Single-pass connected-component labeling with 8-connectivity
//!
//! Foreground pixels are visited in row-major order. Each one looks at its
//! four already-visited neighbours (left, top-left, top, top-right) and
//! joins, starts, or merges provisional components accordingly, then claims
//! its four not-yet-visited foreground neighbours (right, bottom-left,
//! bottom, bottom-right) for the same component. Provisional labels are
//! elements of a [`DisjointSets`]; merges are unions, so nothing is ever
//! rescanned.
//!
//! The result is a [`Labeling`], which only the patch registry reads.

use crate::classify::{Classifier, foreground_mask, is_two_tone};
use crate::registry::{Patch, materialize};
use crate::unionfind::DisjointSets;
use log::{debug, trace};
use patchwork_core::{CHANNELS, Direction, Raster};

/// Label value of background pixels
pub(crate) const UNLABELED: usize = usize::MAX;

/// Provisional labels from one labeling pass
///
/// Holds one label per pixel (by `offset / 4`) plus the union-find forest
/// relating labels. Consumed by [`materialize`].
#[derive(Debug, Clone)]
pub struct Labeling {
    labels: Vec<usize>,
    sets: DisjointSets,
}

impl Labeling {
    pub(crate) fn from_parts(labels: Vec<usize>, sets: DisjointSets) -> Self {
        Self { labels, sets }
    }

    pub(crate) fn into_parts(self) -> (Vec<usize>, DisjointSets) {
        (self.labels, self.sets)
    }

    /// Number of pixels covered
    pub fn pixel_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of provisional labels handed out, before merging
    pub fn provisional_count(&self) -> usize {
        self.sets.len()
    }

    /// Number of foreground pixels
    pub fn foreground_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l != UNLABELED).count()
    }
}

/// Distinct roots among a pixel's labeled neighbours
///
/// At most the pixel itself plus its four preceding neighbours contribute,
/// so a fixed array suffices.
#[derive(Default)]
struct RootSet {
    roots: [usize; 5],
    len: usize,
}

impl RootSet {
    fn insert(&mut self, root: usize) {
        if !self.as_slice().contains(&root) {
            self.roots[self.len] = root;
            self.len += 1;
        }
    }

    fn as_slice(&self) -> &[usize] {
        &self.roots[..self.len]
    }
}

#[inline]
fn foreground_neighbor(
    raster: &Raster<'_>,
    foreground: &[bool],
    offset: usize,
    dir: Direction,
) -> Option<usize> {
    raster
        .neighbor(offset, dir)
        .map(|n| n / CHANNELS)
        .filter(|&n| foreground[n])
}

/// Assign provisional labels to every foreground pixel.
///
/// Does not check the two-tone precondition; see [`label`].
pub fn label_pixels<C: Classifier + ?Sized>(raster: &Raster<'_>, classifier: &C) -> Labeling {
    let foreground = foreground_mask(raster, classifier);
    let mut labels = vec![UNLABELED; foreground.len()];
    let mut sets = DisjointSets::new();

    for offset in raster.offsets() {
        let idx = offset / CHANNELS;
        if !foreground[idx] {
            continue;
        }

        // A pixel may already carry a label claimed by an earlier neighbour.
        let mut roots = RootSet::default();
        if labels[idx] != UNLABELED {
            roots.insert(sets.find(labels[idx]));
        }
        for dir in Direction::PRECEDING {
            if let Some(n) = foreground_neighbor(raster, &foreground, offset, dir) {
                roots.insert(sets.find(labels[n]));
            }
        }

        let mut root = match roots.as_slice() {
            [] => sets.make_set(),
            [only] => *only,
            [first, rest @ ..] => {
                trace!("merging {} components at offset {}", rest.len() + 1, offset);
                rest.iter().fold(*first, |acc, &r| sets.union(acc, r))
            }
        };
        labels[idx] = root;

        for dir in Direction::FOLLOWING {
            if let Some(n) = foreground_neighbor(raster, &foreground, offset, dir) {
                if labels[n] == UNLABELED {
                    labels[n] = root;
                } else {
                    root = sets.union(root, labels[n]);
                }
            }
        }
    }

    Labeling::from_parts(labels, sets)
}

/// Partition the foreground of a two-tone raster into patches.
///
/// Returns an empty list when the raster does not hold exactly two colours.
pub fn label<C: Classifier + ?Sized>(raster: &Raster<'_>, classifier: &C) -> Vec<Patch> {
    if !is_two_tone(raster) {
        debug!("raster is not two-tone; skipping grouping");
        return Vec::new();
    }
    let labeling = label_pixels(raster, classifier);
    debug!(
        "labeled {} foreground pixels with {} provisional labels",
        labeling.foreground_count(),
        labeling.provisional_count()
    );
    materialize(labeling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BlackForeground;
    use patchwork_test::Fixture;

    fn sizes(patches: &[Patch]) -> Vec<usize> {
        let mut s: Vec<usize> = patches.iter().map(Patch::len).collect();
        s.sort_unstable();
        s
    }

    #[test]
    fn test_square_is_one_patch() {
        let fx = Fixture::from_rows(&["....", ".##.", ".##.", "...."]).unwrap();
        let patches = label(&fx.raster().unwrap(), &BlackForeground);
        assert_eq!(patches.len(), 1);
        assert_eq!(
            patches[0].offsets(),
            &[
                fx.offset(1, 1),
                fx.offset(2, 1),
                fx.offset(1, 2),
                fx.offset(2, 2)
            ]
        );
    }

    #[test]
    fn test_diagonal_touch_is_connected() {
        let fx = Fixture::from_rows(&["#...", ".#..", "....", "...."]).unwrap();
        let patches = label(&fx.raster().unwrap(), &BlackForeground);
        assert_eq!(sizes(&patches), vec![2]);
    }

    #[test]
    fn test_u_shape_merges() {
        // The two arms get separate labels until the bottom row joins them.
        let fx = Fixture::from_rows(&["#...#", "#...#", "#####"]).unwrap();
        let raster = fx.raster().unwrap();
        let labeling = label_pixels(&raster, &BlackForeground);
        assert_eq!(labeling.provisional_count(), 2);
        let patches = label(&raster, &BlackForeground);
        assert_eq!(sizes(&patches), vec![9]);
    }

    #[test]
    fn test_anti_diagonal_staircase() {
        // Each pixel's only link is top-right; exercises the claim of
        // bottom-left neighbours.
        let fx = Fixture::from_rows(&["...#", "..#.", ".#..", "#..."]).unwrap();
        let patches = label(&fx.raster().unwrap(), &BlackForeground);
        assert_eq!(sizes(&patches), vec![4]);
    }

    #[test]
    fn test_claimed_right_neighbor_merges() {
        // (2,1) is claimed by (3,0) before (1,1) is visited; (1,1) reaches it
        // only as its right-hand neighbour.
        let fx = Fixture::from_rows(&["#..#", ".##.", "....", "#..."]).unwrap();
        let patches = label(&fx.raster().unwrap(), &BlackForeground);
        assert_eq!(sizes(&patches), vec![1, 4]);
    }

    #[test]
    fn test_no_wrap_between_rows() {
        let fx = Fixture::from_rows(&["...#", "#...", "...."]).unwrap();
        let patches = label(&fx.raster().unwrap(), &BlackForeground);
        assert_eq!(sizes(&patches), vec![1, 1]);
    }

    #[test]
    fn test_not_two_tone_is_empty() {
        let fx = Fixture::from_rows(&["#r", ".#"]).unwrap();
        assert!(label(&fx.raster().unwrap(), &BlackForeground).is_empty());
    }

    #[test]
    fn test_labeling_counts() {
        let fx = Fixture::from_rows(&["#.#", "...", "#.#"]).unwrap();
        let labeling = label_pixels(&fx.raster().unwrap(), &BlackForeground);
        assert_eq!(labeling.pixel_count(), 9);
        assert_eq!(labeling.foreground_count(), 4);
        assert_eq!(labeling.provisional_count(), 4);
    }
}
