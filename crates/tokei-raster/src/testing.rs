//! Recording sink shared by the unit tests.

use std::collections::HashMap;

use tokei_core::{PixelColor, PixelSink, Point};

/// Sink that remembers every call in order and the last color of each cell.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<(PixelColor, Point)>,
    pub cells: HashMap<Point, PixelColor>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Painted points in call order.
    pub fn points(&self) -> Vec<Point> {
        self.calls.iter().map(|&(_, p)| p).collect()
    }
}

impl PixelSink for Recorder {
    fn set_pixel(&mut self, color: PixelColor, x: i32, y: i32) {
        let point = Point::new(x, y);
        self.calls.push((color, point));
        self.cells.insert(point, color);
    }
}
