//! Geometric value types.

/// A cell position in logical (square) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A straight segment, drawn inclusive of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether both endpoints share a column.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Whether both endpoints share a row.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }
}

/// A circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: u32,
}

impl Circle {
    pub const fn new(center: Point, radius: u32) -> Self {
        Self { center, radius }
    }
}

/// A radial segment around a center point.
///
/// `inner` and `outer` are distances from the center along the direction
/// given by `angle`. Either may be negative, which places that end on the
/// opposite side of the center (the short tail of a clock hand).
///
/// `angle` is in radians, measured clockwise from 12 o'clock, so `0.0`
/// points straight up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarSpec {
    pub center: Point,
    pub inner: i32,
    pub outer: i32,
    pub angle: f64,
}

impl PolarSpec {
    pub const fn new(center: Point, inner: i32, outer: i32, angle: f64) -> Self {
        Self {
            center,
            inner,
            outer,
            angle,
        }
    }
}
