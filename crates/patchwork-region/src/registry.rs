//! Patch registry
//!
//! Turns the union-find bookkeeping of a [`Labeling`] into the
//! caller-facing list of disjoint, immutable [`Patch`]es. The forest, with
//! its mutable parent links, never leaves this crate.

use crate::label::{Labeling, UNLABELED};
use patchwork_core::CHANNELS;
use std::collections::BTreeSet;

/// A maximal 8-connected region of foreground pixels
///
/// Holds red-channel offsets in ascending order without duplicates. A
/// caller writing full RGBA derives `offset..offset + 4` itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Patch {
    offsets: Vec<usize>,
}

impl Patch {
    /// Offsets in ascending (scan) order
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false` for patches produced by [`materialize`].
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// First pixel in scan order
    pub fn first(&self) -> Option<usize> {
        self.offsets.first().copied()
    }

    /// Check whether the pixel at `offset` belongs to this patch.
    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Iterate over offsets in ascending order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.offsets.iter().copied()
    }

    /// Copy the offsets into an ordered set.
    pub fn to_set(&self) -> BTreeSet<usize> {
        self.offsets.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Flatten a labeling into disjoint patches.
///
/// Patches are ordered by their first pixel in scan order. Every labeled
/// pixel lands in exactly one patch.
pub fn materialize(labeling: Labeling) -> Vec<Patch> {
    let (labels, mut sets) = labeling.into_parts();
    let mut slot = vec![UNLABELED; sets.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (idx, &label) in labels.iter().enumerate() {
        if label == UNLABELED {
            continue;
        }
        let root = sets.find(label);
        if slot[root] == UNLABELED {
            slot[root] = groups.len();
            groups.push(Vec::new());
        }
        groups[slot[root]].push(idx * CHANNELS);
    }

    groups
        .into_iter()
        .map(|offsets| Patch { offsets })
        .collect()
}
