//! Raster views over flat RGBA buffers
//!
//! [`Raster`] borrows a channel buffer immutably and [`RasterMut`] borrows it
//! mutably. Both validate the layout on construction; neither owns or copies
//! the pixels.

use crate::error::{Error, Result};
use crate::Rgb;
use std::slice::ChunksExactMut;

/// Channels per pixel (red, green, blue, alpha)
pub const CHANNELS: usize = 4;

/// The eight neighbours of a pixel
///
/// Variants are declared in the order a row-major scan examines them:
/// the four neighbours already visited, then the four not yet visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Neighbours visited before a pixel in row-major scan order
    pub const PRECEDING: [Direction; 4] = [
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
    ];

    /// Neighbours visited after a pixel in row-major scan order
    pub const FOLLOWING: [Direction; 4] = [
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// All eight neighbours, preceding first
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Column and row step for this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

fn check_layout(len: usize, width: usize) -> Result<()> {
    if width == 0 || width % CHANNELS != 0 || len % width != 0 {
        return Err(Error::InvalidRaster { len, width });
    }
    Ok(())
}

/// Immutable view over an RGBA channel buffer
///
/// `width` is the row width in channels (`pixels_per_row * 4`); the height
/// is derived from the buffer length.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    data: &'a [u8],
    width: usize,
}

impl<'a> Raster<'a> {
    /// Create a view over `data` with rows of `width` channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRaster`] if `width` is zero or not a multiple
    /// of 4, or if the buffer length is not a multiple of `width`.
    pub fn new(data: &'a [u8], width: usize) -> Result<Self> {
        check_layout(data.len(), width)?;
        Ok(Self { data, width })
    }

    /// Underlying channel buffer
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Row width in channels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row width in pixels
    #[inline]
    pub fn columns(&self) -> usize {
        self.width / CHANNELS
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.data.len() / self.width
    }

    /// Number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Check whether the raster holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Red-channel offsets of every pixel in row-major scan order.
    pub fn offsets(&self) -> impl Iterator<Item = usize> + use<> {
        (0..self.data.len()).step_by(CHANNELS)
    }

    /// Colour of the pixel at `offset`, or `None` if the offset does not
    /// address a pixel.
    #[inline]
    pub fn color_at(&self, offset: usize) -> Option<Rgb> {
        if offset % CHANNELS != 0 || offset >= self.data.len() {
            return None;
        }
        Rgb::from_channels(&self.data[offset..offset + CHANNELS])
    }

    /// Offset of the pixel at column `x`, row `y`.
    #[inline]
    pub fn offset_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.columns() && y < self.height() {
            Some(y * self.width + x * CHANNELS)
        } else {
            None
        }
    }

    /// Column and row of the pixel at `offset`.
    ///
    /// The offset is not bounds checked.
    #[inline]
    pub fn coords_of(&self, offset: usize) -> (usize, usize) {
        ((offset % self.width) / CHANNELS, offset / self.width)
    }

    /// Offset of the neighbour of `offset` in direction `dir`.
    ///
    /// Returns `None` when the neighbour lies outside the raster. A pixel in
    /// the last column has no right-hand neighbour; the first pixel of the
    /// next row is never reached by wrapping.
    #[inline]
    pub fn neighbor(&self, offset: usize, dir: Direction) -> Option<usize> {
        let (x, y) = self.coords_of(offset);
        let (dx, dy) = dir.delta();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.offset_of(nx, ny)
    }
}

/// Mutable view over an RGBA channel buffer
#[derive(Debug)]
pub struct RasterMut<'a> {
    data: &'a mut [u8],
    width: usize,
}

impl<'a> RasterMut<'a> {
    /// Create a mutable view over `data` with rows of `width` channels.
    ///
    /// # Errors
    ///
    /// Same layout checks as [`Raster::new`].
    pub fn new(data: &'a mut [u8], width: usize) -> Result<Self> {
        check_layout(data.len(), width)?;
        Ok(Self { data, width })
    }

    /// Reborrow as an immutable view.
    #[inline]
    pub fn as_raster(&self) -> Raster<'_> {
        Raster {
            data: &*self.data,
            width: self.width,
        }
    }

    /// Row width in channels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Colour of the pixel at `offset`.
    #[inline]
    pub fn color_at(&self, offset: usize) -> Option<Rgb> {
        self.as_raster().color_at(offset)
    }

    /// Overwrite the red, green and blue channels of the pixel at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOffset`] if `offset` is misaligned or outside
    /// the buffer.
    pub fn set_color(&mut self, offset: usize, color: Rgb) -> Result<()> {
        let len = self.data.len();
        if offset % CHANNELS != 0 || offset >= len {
            return Err(Error::InvalidOffset { offset, len });
        }
        color.write_to(&mut self.data[offset..offset + CHANNELS]);
        Ok(())
    }

    /// Iterate over pixels as mutable 4-channel slices in scan order.
    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(columns: usize, rows: usize) -> Vec<u8> {
        vec![255; columns * rows * CHANNELS]
    }

    #[test]
    fn test_layout_validation() {
        let buf = white(3, 2);
        assert!(Raster::new(&buf, 12).is_ok());
        assert!(matches!(
            Raster::new(&buf, 0),
            Err(Error::InvalidRaster { width: 0, .. })
        ));
        assert!(matches!(
            Raster::new(&buf, 6),
            Err(Error::InvalidRaster { len: 24, width: 6 })
        ));
        // 24 channels cannot be split into rows of 16
        assert!(Raster::new(&buf, 16).is_err());
    }

    #[test]
    fn test_empty_raster() {
        let raster = Raster::new(&[], 8).unwrap();
        assert!(raster.is_empty());
        assert_eq!(raster.height(), 0);
        assert_eq!(raster.offsets().count(), 0);
    }

    #[test]
    fn test_dimensions_and_coords() {
        let buf = white(3, 2);
        let raster = Raster::new(&buf, 12).unwrap();
        assert_eq!(raster.columns(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel_count(), 6);
        assert_eq!(raster.offset_of(2, 1), Some(20));
        assert_eq!(raster.offset_of(3, 0), None);
        assert_eq!(raster.coords_of(20), (2, 1));
        assert_eq!(raster.color_at(20), Some(Rgb::WHITE));
        assert_eq!(raster.color_at(21), None);
        assert_eq!(raster.color_at(24), None);
    }

    #[test]
    fn test_neighbor_does_not_wrap() {
        let buf = white(3, 3);
        let raster = Raster::new(&buf, 12).unwrap();
        let last_of_row0 = raster.offset_of(2, 0).unwrap();
        let first_of_row1 = raster.offset_of(0, 1).unwrap();
        assert_eq!(raster.neighbor(last_of_row0, Direction::Right), None);
        assert_eq!(raster.neighbor(first_of_row1, Direction::Left), None);
        assert_eq!(raster.neighbor(first_of_row1, Direction::UpLeft), None);
        assert_eq!(raster.neighbor(last_of_row0, Direction::DownRight), None);
        assert_eq!(
            raster.neighbor(last_of_row0, Direction::DownLeft),
            raster.offset_of(1, 1)
        );
    }

    #[test]
    fn test_neighbor_at_corners() {
        let buf = white(2, 2);
        let raster = Raster::new(&buf, 8).unwrap();
        let preceding: Vec<_> = Direction::PRECEDING
            .iter()
            .filter_map(|&d| raster.neighbor(0, d))
            .collect();
        assert!(preceding.is_empty());
        let following: Vec<_> = Direction::FOLLOWING
            .iter()
            .filter_map(|&d| raster.neighbor(0, d))
            .collect();
        assert_eq!(following, vec![4, 8, 12]);
    }

    #[test]
    fn test_set_color() {
        let mut buf = white(2, 1);
        let mut raster = RasterMut::new(&mut buf, 8).unwrap();
        raster.set_color(4, Rgb::BLACK).unwrap();
        assert!(matches!(
            raster.set_color(2, Rgb::BLACK),
            Err(Error::InvalidOffset { offset: 2, len: 8 })
        ));
        assert!(raster.set_color(8, Rgb::BLACK).is_err());
        assert_eq!(raster.color_at(4), Some(Rgb::BLACK));
        assert_eq!(buf, vec![255, 255, 255, 255, 0, 0, 0, 255]);
    }
}
