//! Foreground classification and the two-tone check
//!
//! Grouping is only defined for rasters reduced to exactly two colours. The
//! classifier decides which of the two is foreground; by default that is
//! pure black.

use patchwork_core::{CHANNELS, Raster, Rgb};
use std::collections::HashSet;

/// Predicate deciding whether a pixel colour is foreground
pub trait Classifier {
    /// Return `true` if `color` belongs to the foreground.
    fn is_foreground(&self, color: Rgb) -> bool;
}

/// Foreground is pure black (R = G = B = 0); everything else is background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackForeground;

impl Classifier for BlackForeground {
    #[inline]
    fn is_foreground(&self, color: Rgb) -> bool {
        color == Rgb::BLACK
    }
}

impl<F: Fn(Rgb) -> bool> Classifier for F {
    #[inline]
    fn is_foreground(&self, color: Rgb) -> bool {
        self(color)
    }
}

/// Result of classifying a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Number of distinct (R, G, B) triples
    pub distinct_colors: usize,
    /// `true` iff exactly two distinct colours are present
    pub is_two_tone: bool,
}

/// Count distinct (R, G, B) triples across the raster. Alpha is ignored.
pub fn count_distinct_colors(raster: &Raster<'_>) -> usize {
    raster
        .data()
        .chunks_exact(CHANNELS)
        .filter_map(Rgb::from_channels)
        .collect::<HashSet<_>>()
        .len()
}

/// Check whether the raster holds exactly two distinct colours.
///
/// Stops scanning as soon as a third colour is seen.
pub fn is_two_tone(raster: &Raster<'_>) -> bool {
    let mut seen: Vec<Rgb> = Vec::with_capacity(3);
    for color in raster
        .data()
        .chunks_exact(CHANNELS)
        .filter_map(Rgb::from_channels)
    {
        if !seen.contains(&color) {
            if seen.len() == 2 {
                return false;
            }
            seen.push(color);
        }
    }
    seen.len() == 2
}

/// Count colours and evaluate the two-tone precondition.
pub fn classify_raster(raster: &Raster<'_>) -> Classification {
    let distinct_colors = count_distinct_colors(raster);
    Classification {
        distinct_colors,
        is_two_tone: distinct_colors == 2,
    }
}

/// Per-pixel foreground flags, indexed by `offset / 4`.
pub fn foreground_mask<C: Classifier + ?Sized>(raster: &Raster<'_>, classifier: &C) -> Vec<bool> {
    raster
        .data()
        .chunks_exact(CHANNELS)
        .map(|px| Rgb::from_channels(px).is_some_and(|c| classifier.is_foreground(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use patchwork_test::Fixture;

    #[test]
    fn test_black_is_foreground() {
        assert!(BlackForeground.is_foreground(Rgb::BLACK));
        assert!(!BlackForeground.is_foreground(Rgb::WHITE));
        assert!(!BlackForeground.is_foreground(Rgb::new(0, 0, 1)));
    }

    #[test]
    fn test_closure_classifier() {
        let red = |c: Rgb| c.r == 255 && c.g == 0 && c.b == 0;
        assert!(red.is_foreground(Rgb::new(255, 0, 0)));
        assert!(!red.is_foreground(Rgb::BLACK));
    }

    #[test]
    fn test_count_distinct_colors() {
        let fx = Fixture::from_rows(&["#.r", "..#"]).unwrap();
        let raster = fx.raster().unwrap();
        assert_eq!(count_distinct_colors(&raster), 3);
        assert!(!is_two_tone(&raster));

        let c = classify_raster(&raster);
        assert_eq!(c.distinct_colors, 3);
        assert!(!c.is_two_tone);
    }

    #[test]
    fn test_alpha_ignored() {
        let mut fx = Fixture::from_rows(&["..", "#."]).unwrap();
        fx.data[3] = 0;
        let raster = fx.raster().unwrap();
        assert_eq!(count_distinct_colors(&raster), 2);
        assert!(is_two_tone(&raster));
    }

    #[test]
    fn test_one_color_is_not_two_tone() {
        let fx = Fixture::filled(3, 3, Rgb::WHITE);
        let raster = fx.raster().unwrap();
        assert_eq!(count_distinct_colors(&raster), 1);
        assert!(!is_two_tone(&raster));
    }

    #[test]
    fn test_foreground_mask() {
        let fx = Fixture::from_rows(&["#.", ".#"]).unwrap();
        let raster = fx.raster().unwrap();
        assert_eq!(
            foreground_mask(&raster, &BlackForeground),
            vec![true, false, false, true]
        );
    }
}
