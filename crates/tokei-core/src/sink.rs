//! The pixel-setting capability every drawing routine is written against.

/// State of a single display cell.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PixelColor {
    /// Cleared cell.
    #[default]
    Off,
    /// Painted cell.
    On,
}

/// Something that can paint or clear one cell at integer coordinates.
///
/// Implementations must tolerate coordinates outside the visible area and
/// are expected to clip them silently.
pub trait PixelSink {
    fn set_pixel(&mut self, color: PixelColor, x: i32, y: i32);
}

impl<F> PixelSink for F
where
    F: FnMut(PixelColor, i32, i32),
{
    fn set_pixel(&mut self, color: PixelColor, x: i32, y: i32) {
        self(color, x, y)
    }
}
