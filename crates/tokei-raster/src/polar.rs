//! Polar to cartesian projection for radial segments (clock hands, ticks).

use tokei_core::{LineSegment, PixelColor, PixelSink, Point, PolarSpec};

use crate::line::draw_line;

/// Resolution used to absorb floating point noise before rounding to a
/// cell. Without it `a` and `a + 2π` can straddle a `.5` boundary and land
/// on different cells.
const SNAP: f64 = 1e6;

/// Project a [`PolarSpec`] onto the cell grid.
///
/// Offsets are rounded to the nearest cell (ties away from zero). The `y`
/// axis grows downwards, so the vertical offset is subtracted.
pub fn polar_segment(spec: &PolarSpec) -> LineSegment {
    let (ex, ey) = spec.angle.sin_cos();
    let at = |distance: i32| {
        let d = f64::from(distance);
        Point::new(
            spec.center.x + to_cell(d * ex),
            spec.center.y - to_cell(d * ey),
        )
    };
    LineSegment::new(at(spec.inner), at(spec.outer))
}

/// Draw the segment described by `spec`.
///
/// Erasing a previously drawn segment means calling this again with the same
/// `spec` and [`PixelColor::Off`].
pub fn draw_polar_line<S>(sink: &mut S, color: PixelColor, spec: &PolarSpec)
where
    S: PixelSink + ?Sized,
{
    let segment = polar_segment(spec);
    draw_line(sink, color, segment.start, segment.end);
}

fn to_cell(offset: f64) -> i32 {
    ((offset * SNAP).round() / SNAP).round() as i32
}
