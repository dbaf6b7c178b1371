//! Circle outlines.

use tokei_core::{PixelColor, PixelSink, Point};

/// Draw the outline of a circle with the midpoint algorithm.
///
/// The four axis extremes are painted first, then one octant is walked and
/// mirrored into the other seven. Cells on the octant boundaries may be
/// painted more than once. A zero radius paints the center only.
pub fn draw_circle<S>(sink: &mut S, color: PixelColor, center: Point, radius: u32)
where
    S: PixelSink + ?Sized,
{
    let Point { x: cx, y: cy } = center;
    let r = i32::try_from(radius).unwrap_or(i32::MAX / 2);

    sink.set_pixel(color, cx + r, cy);
    sink.set_pixel(color, cx - r, cy);
    sink.set_pixel(color, cx, cy + r);
    sink.set_pixel(color, cx, cy - r);

    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        sink.set_pixel(color, cx + x, cy + y);
        sink.set_pixel(color, cx - x, cy + y);
        sink.set_pixel(color, cx + x, cy - y);
        sink.set_pixel(color, cx - x, cy - y);
        sink.set_pixel(color, cx + y, cy + x);
        sink.set_pixel(color, cx - y, cy + x);
        sink.set_pixel(color, cx + y, cy - x);
        sink.set_pixel(color, cx - y, cy - x);
    }
}
