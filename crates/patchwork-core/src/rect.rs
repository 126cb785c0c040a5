//! Pixel-space rectangles

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
}

impl Rect {
    /// Create a rectangle from its corner and size.
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    /// Create the smallest rectangle covering two inclusive corners.
    pub fn from_corners(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        Self::new(left, top, right - left + 1, bottom - top + 1)
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.w * self.h
    }

    /// Check whether a pixel lies inside.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners() {
        let r = Rect::from_corners(3, 1, 1, 2);
        assert_eq!(r, Rect::new(1, 1, 3, 2));
        assert_eq!(r.area(), 6);
        assert!(r.contains(3, 2));
        assert!(!r.contains(4, 2));
    }
}
