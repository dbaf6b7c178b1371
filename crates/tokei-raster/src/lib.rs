//! Rasterization routines for the tokei clock face.
//!
//! All routines are stateless and write through a [`PixelSink`], one cell at
//! a time. They never fail: degenerate input (a zero-length line, a
//! zero-radius circle) still terminates and paints something sensible.
//!
//! [`PixelSink`]: tokei_core::PixelSink

mod circle;
mod line;
mod polar;

#[cfg(test)]
mod testing;

pub use circle::draw_circle;
pub use line::draw_line;
pub use polar::{draw_polar_line, polar_segment};
