//! Surface-space geometry shared by scene primitives.
//!
//! All coordinates are pixels with the origin at the top-left corner and
//! y growing downward.

use serde::{Deserialize, Serialize};

/// A position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Point at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Straight segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Line {
    /// Segment between two endpoints.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment from raw endpoint coordinates.
    #[must_use]
    pub const fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Segment length in pixels.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// True for axis ticks, stems and whiskers drawn straight up or down.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// True for guide lines, caps and medians.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent, never negative.
    pub width: f32,
    /// Vertical extent, never negative.
    pub height: f32,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle covering the vertical interval between `y_a` and `y_b`.
    ///
    /// Bars below the baseline pass the coordinates the other way round;
    /// the height stays non-negative either way.
    #[must_use]
    pub fn spanning_y(x: f32, width: f32, y_a: f32, y_b: f32) -> Self {
        Self::new(x, y_a.min(y_b), width, (y_a - y_b).abs())
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when `other` lies within this rectangle, allowing `tolerance`
    /// pixels of slack on every side.
    #[must_use]
    pub fn encloses(&self, other: &Self, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-5);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_line_orientation() {
        let stem = Line::from_coords(2.0, 0.0, 2.0, 9.0);
        assert!(stem.is_vertical());
        assert!(!stem.is_horizontal());
        assert!((stem.length() - 9.0).abs() < 1e-5);

        let guide = Line::from_coords(0.0, 3.0, 8.0, 3.0);
        assert!(guide.is_horizontal());
    }

    #[test]
    fn test_spanning_y_either_order() {
        let up = Rect::spanning_y(0.0, 4.0, 100.0, 40.0);
        let down = Rect::spanning_y(0.0, 4.0, 40.0, 100.0);
        assert_eq!(up, down);
        assert_eq!(up.y, 40.0);
        assert_eq!(up.bottom(), 100.0);
        assert_eq!(up.right(), 4.0);
    }

    #[test]
    fn test_encloses() {
        let plot = Rect::new(40.0, 20.0, 430.0, 250.0);
        assert!(plot.encloses(&Rect::new(50.0, 20.0, 10.0, 250.0), 0.0));
        assert!(!plot.encloses(&Rect::new(30.0, 20.0, 10.0, 10.0), 0.0));
        assert!(plot.encloses(&Rect::new(39.9995, 20.0, 10.0, 10.0), 1e-3));
    }
}
