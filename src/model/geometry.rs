//! Geometric primitives produced by the layout engine.

use serde::{Deserialize, Serialize};

/// A point in page coordinates (mm, y pointing down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy).
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A straight outline segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Check if the segment is vertical.
    pub fn is_vertical(&self) -> bool {
        crate::config::float_cmp::approx_eq(self.start.x, self.end.x)
    }

    /// Check if the segment is horizontal.
    pub fn is_horizontal(&self) -> bool {
        crate::config::float_cmp::approx_eq(self.start.y, self.end.y)
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// A line of text centered on `anchor` and rotated about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPlacement {
    pub text: String,
    pub anchor: Point,
    /// Rotation in degrees, negative is counter-clockwise on screen.
    pub rotation: f64,
}
