// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Chart area inside the surface margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    /// Surface of `width` x `height` shrunk by `insets`.
    pub fn inset(width: f64, height: f64, insets: &Insets) -> Self {
        Self::from_ltrb(insets.left, insets.top, width - insets.right, height - insets.bottom)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Straight line between two pixel positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
    pub fn horizontal(y: f64, x1: f64, x2: f64) -> Self { Self::new(x1, y, x2, y) }
    pub fn vertical(x: f64, y1: f64, y2: f64) -> Self { Self::new(x, y1, x, y2) }
}

/// Round half away from zero to two decimals.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_rect_dimensions() {
        let r = Rect::inset(200.0, 100.0, &Insets::new(40.0, 25.0, 15.0, 30.0));
        assert_eq!(r, Rect::from_ltrb(40.0, 15.0, 175.0, 70.0));
        assert_eq!(r.width(), 135.0);
        assert_eq!(r.height(), 55.0);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(104.166), 104.17);
        assert_eq!(round2(100.0), 100.0);
        assert_eq!(round2(-3.14159), -3.14);
    }
}
