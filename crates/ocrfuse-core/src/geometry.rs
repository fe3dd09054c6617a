//! Geometry primitives for detection boxes and aligned output.
//!
//! All rects produced by the extractor live in unit-square coordinates with
//! a top-left origin (y increases downward), matching the normalized output
//! of the spatial detector.

use serde::{Deserialize, Serialize};

/// A point in pixel coordinates as reported by the spatial detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel coordinate
    pub x: f64,
    /// Vertical pixel coordinate
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite numbers.
    #[inline]
    #[must_use = "returns whether both coordinates are finite"]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in unit-square coordinates (top-left origin).
///
/// Rects built by the extractor satisfy `x0 <= x1` and `y0 <= y1`.
///
/// # Examples
///
/// ```
/// use ocrfuse_core::Rect;
///
/// let rect = Rect::new(0.1, 0.2, 0.4, 0.3);
/// assert_eq!(rect.width(), 0.4 - 0.1);
/// assert_eq!(rect.height(), 0.3 - 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left x-coordinate
    pub x0: f64,
    /// Top y-coordinate
    pub y0: f64,
    /// Right x-coordinate
    pub x1: f64,
    /// Bottom y-coordinate
    pub y1: f64,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal extent of the rectangle.
    #[inline]
    #[must_use = "returns the width of the rectangle"]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent of the rectangle.
    #[inline]
    #[must_use = "returns the height of the rectangle"]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Area of the rectangle (handles inverted coordinates).
    #[inline]
    #[must_use = "returns the area of the rectangle"]
    pub fn area(&self) -> f64 {
        self.width().abs() * self.height().abs()
    }

    /// Length of the vertical overlap between this rect and another.
    #[inline]
    #[must_use = "returns the vertical intersection length"]
    pub fn vertical_intersection(&self, other: &Self) -> f64 {
        (self.y1.min(other.y1) - self.y0.max(other.y0)).max(0.0)
    }

    /// Check whether two rects share a visual line: their vertical
    /// intersection must exceed `min_ratio` of the shorter rect's height
    /// (strict).
    #[inline]
    #[must_use = "returns whether the rects overlap vertically by more than the ratio"]
    pub fn overlaps_vertically(&self, other: &Self, min_ratio: f64) -> bool {
        let min_height = self.height().min(other.height());
        self.vertical_intersection(other) > min_height * min_ratio
    }

    /// Smallest rect covering both this rect and another.
    #[inline]
    #[must_use = "returns the union of the two rectangles"]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}
