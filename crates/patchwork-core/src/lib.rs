//! Patchwork Core - Raster data structures for the patchwork sandbox
//!
//! This crate provides the fundamental data structures shared by the other
//! patchwork crates:
//!
//! - [`Raster`] / [`RasterMut`] - Views over a flat RGBA channel buffer
//!   (immutable / mutable)
//! - [`Direction`] - The eight pixel neighbours, in scan-order groups
//! - [`Rgb`] - A pixel colour with alpha ignored
//! - [`Rect`] - A pixel-space bounding box
//!
//! # Buffer layout
//!
//! A raster is a flat sequence of 8-bit channels, four per pixel
//! (red, green, blue, alpha). Row width is measured in channels, so a row of
//! `n` pixels has width `4 * n`. Pixels are addressed by the offset of their
//! red channel.

pub mod error;
pub mod raster;
pub mod rect;

pub use error::{Error, Result};
pub use raster::{CHANNELS, Direction, Raster, RasterMut};
pub use rect::Rect;

/// Pixel colour with the alpha channel dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a colour from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read a colour from the first three channels of a pixel.
    ///
    /// Returns `None` if fewer than three channels are given.
    #[inline]
    pub fn from_channels(channels: &[u8]) -> Option<Self> {
        match channels {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Write this colour into the first three channels of a pixel.
    ///
    /// The alpha channel, if present, is left untouched.
    #[inline]
    pub fn write_to(self, channels: &mut [u8]) {
        if let [r, g, b, ..] = channels {
            *r = self.r;
            *g = self.g;
            *b = self.b;
        }
    }
}
