//! Core types for the tokei analog clock.
//!
//! Everything here is a plain value type. Drawing code only ever talks to the
//! display through [`PixelSink`], so the math stays independent of the
//! terminal backend.

mod geometry;
mod sink;
mod theme;

pub use geometry::{Circle, LineSegment, Point, PolarSpec};
pub use sink::{PixelColor, PixelSink};
pub use theme::{ColorTheme, HourHandMode};
