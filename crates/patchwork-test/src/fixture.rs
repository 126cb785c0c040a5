//! ASCII-art raster fixtures
//!
//! Each string is one row, each character one pixel:
//!
//! | glyph | colour |
//! |-------|--------|
//! | `#`   | black  |
//! | `.`   | white  |
//! | `r`   | red    |
//! | `g`   | green  |
//! | `b`   | blue   |
//!
//! Alpha is always 255.

use crate::error::{TestError, TestResult};
use patchwork_core::{CHANNELS, Raster, Rgb};

/// Colour drawn by a fixture glyph.
pub fn glyph_color(glyph: char) -> Option<Rgb> {
    match glyph {
        '#' => Some(Rgb::BLACK),
        '.' => Some(Rgb::WHITE),
        'r' => Some(Rgb::new(255, 0, 0)),
        'g' => Some(Rgb::new(0, 255, 0)),
        'b' => Some(Rgb::new(0, 0, 255)),
        _ => None,
    }
}

/// An owned RGBA buffer plus its row width in channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub data: Vec<u8>,
    pub width: usize,
}

impl Fixture {
    /// Build a buffer from ASCII rows.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::Fixture`] for an empty row set, ragged rows, or
    /// an unknown glyph.
    pub fn from_rows(rows: &[&str]) -> TestResult<Self> {
        let columns = match rows.first() {
            Some(first) => first.chars().count(),
            None => {
                return Err(TestError::Fixture {
                    row: 0,
                    message: "no rows".to_string(),
                });
            }
        };
        if columns == 0 {
            return Err(TestError::Fixture {
                row: 0,
                message: "empty row".to_string(),
            });
        }

        let mut data = Vec::with_capacity(columns * rows.len() * CHANNELS);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(TestError::Fixture {
                    row,
                    message: format!("expected {} pixels, got {}", columns, line.chars().count()),
                });
            }
            for glyph in line.chars() {
                let color = glyph_color(glyph).ok_or_else(|| TestError::Fixture {
                    row,
                    message: format!("unknown glyph '{}'", glyph),
                })?;
                data.extend_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }

        Ok(Self {
            data,
            width: columns * CHANNELS,
        })
    }

    /// A `columns` x `rows` buffer filled with one colour.
    pub fn filled(columns: usize, rows: usize, color: Rgb) -> Self {
        let data = std::iter::repeat_n([color.r, color.g, color.b, 255], columns * rows)
            .flatten()
            .collect();
        Self {
            data,
            width: columns * CHANNELS,
        }
    }

    /// Immutable view over the buffer.
    pub fn raster(&self) -> TestResult<Raster<'_>> {
        Ok(Raster::new(&self.data, self.width)?)
    }

    /// Offset of the pixel at column `x`, row `y`.
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let fx = Fixture::from_rows(&["#.", "r#"]).unwrap();
        assert_eq!(fx.width, 8);
        assert_eq!(fx.data.len(), 16);
        assert_eq!(&fx.data[8..12], &[255, 0, 0, 255]);
        assert_eq!(fx.offset(1, 1), 12);
        let raster = fx.raster().unwrap();
        assert_eq!(raster.color_at(12), Some(Rgb::BLACK));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Fixture::from_rows(&["##", "#"]).unwrap_err();
        assert!(matches!(err, TestError::Fixture { row: 1, .. }));
    }

    #[test]
    fn test_unknown_glyph_rejected() {
        assert!(Fixture::from_rows(&["#x"]).is_err());
        assert!(Fixture::from_rows(&[]).is_err());
    }

    #[test]
    fn test_filled() {
        let fx = Fixture::filled(2, 3, Rgb::WHITE);
        assert_eq!(fx.data.len(), 24);
        assert!(fx.data.iter().all(|&c| c == 255));
    }
}
