//! Static parts of the dial.

use std::f64::consts::TAU;

use tokei_core::{PixelColor, PixelSink, PolarSpec};
use tokei_raster::{draw_circle, draw_polar_line};

use crate::geometry::FaceGeometry;

/// Tick marks span this fraction of the radius.
const TICK_EXTENT: (f64, f64) = (0.80, 0.95);

/// Draw the outline (if requested) and the twelve hour marks.
pub fn draw_face<S>(sink: &mut S, geometry: &FaceGeometry, show_outline: bool)
where
    S: PixelSink + ?Sized,
{
    if show_outline {
        let outline = geometry.outline();
        draw_circle(sink, PixelColor::On, outline.center, outline.radius);
    }
    draw_tick_marks(sink, geometry);
}

/// Draw the twelve hour marks.
///
/// The marks are never erased. They are repainted every tick, since erasing
/// the second hand clears the cells it shares with them.
pub fn draw_tick_marks<S>(sink: &mut S, geometry: &FaceGeometry)
where
    S: PixelSink + ?Sized,
{
    let inner = geometry.scaled(TICK_EXTENT.0);
    let outer = geometry.scaled(TICK_EXTENT.1);
    for i in 0..12 {
        let angle = TAU * f64::from(i) / 12.0;
        let spec = PolarSpec::new(geometry.center, inner, outer, angle);
        draw_polar_line(sink, PixelColor::On, &spec);
    }
}
