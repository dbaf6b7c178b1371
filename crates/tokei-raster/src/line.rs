//! Straight lines.

use tokei_core::{PixelColor, PixelSink, Point};

/// Draw a line from `start` to `end`.
///
/// Axis-aligned lines take a fast path and cover the whole inclusive range.
/// Everything else goes through Bresenham's algorithm, which paints the start
/// cell and walks the major axis up to, but not onto, the end column (or row
/// for steep lines). The last painted cell is therefore adjacent to `end`.
///
/// Each cell is painted exactly once.
pub fn draw_line<S>(sink: &mut S, color: PixelColor, start: Point, end: Point)
where
    S: PixelSink + ?Sized,
{
    if start.x == end.x {
        let (top, bottom) = (start.y.min(end.y), start.y.max(end.y));
        for y in top..=bottom {
            sink.set_pixel(color, start.x, y);
        }
    } else if start.y == end.y {
        let (left, right) = (start.x.min(end.x), start.x.max(end.x));
        for x in left..=right {
            sink.set_pixel(color, x, start.y);
        }
    } else {
        bresenham(sink, color, start, end);
    }
}

/// Integer-only walk for lines that are neither vertical nor horizontal.
///
/// Both deltas are non-zero here, so the loop always terminates.
fn bresenham<S>(sink: &mut S, color: PixelColor, start: Point, end: Point)
where
    S: PixelSink + ?Sized,
{
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let steep = dy.abs() >= dx.abs();

    // Walk in transposed space when steep so the major axis is always `x`.
    let (x0, y0, x1, dx, dy) = if steep {
        (start.y, start.x, end.y, dy, dx)
    } else {
        (start.x, start.y, end.x, dx, dy)
    };

    let x_step = if dx >= 0 { 1 } else { -1 };
    let y_step = if dy >= 0 { 1 } else { -1 };
    let (dx, dy) = (dx.abs(), dy.abs());

    let mut err = 2 * dy - dx;
    let mut x = x0;
    let mut y = y0;
    while x != x1 {
        if steep {
            sink.set_pixel(color, y, x);
        } else {
            sink.set_pixel(color, x, y);
        }
        if err > 0 {
            err += 2 * (dy - dx);
            y += y_step;
        } else {
            err += 2 * dy;
        }
        x += x_step;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::testing::Recorder;

    fn trace(start: (i32, i32), end: (i32, i32)) -> Vec<Point> {
        let mut rec = Recorder::new();
        draw_line(&mut rec, PixelColor::On, start.into(), end.into());
        rec.points()
    }

    #[test]
    fn test_vertical_line_covers_inclusive_range() {
        for (start, end) in [((4, 2), (4, 9)), ((4, 9), (4, 2)), ((-3, -5), (-3, 5))] {
            let points = trace(start, end);
            let span = (end.1 - start.1).abs() as usize + 1;
            assert_eq!(points.len(), span);

            let ys: HashSet<i32> = points.iter().map(|p| p.y).collect();
            assert_eq!(ys.len(), span, "no cell painted twice");
            assert!(points.iter().all(|p| p.x == start.0));
            assert!(ys.contains(&start.1) && ys.contains(&end.1));
        }
    }

    #[test]
    fn test_horizontal_line_covers_inclusive_range() {
        for (start, end) in [((0, 3), (7, 3)), ((7, 3), (0, 3)), ((-6, -1), (2, -1))] {
            let points = trace(start, end);
            let span = (end.0 - start.0).abs() as usize + 1;
            assert_eq!(points.len(), span);

            let xs: HashSet<i32> = points.iter().map(|p| p.x).collect();
            assert_eq!(xs.len(), span);
            assert!(points.iter().all(|p| p.y == start.1));
            assert!(xs.contains(&start.0) && xs.contains(&end.0));
        }
    }

    #[test]
    fn test_zero_length_line_paints_one_cell() {
        assert_eq!(trace((5, 5), (5, 5)), vec![Point::new(5, 5)]);
    }

    #[test]
    fn test_general_lines_are_connected() {
        let origin = (0, 0);
        for ex in -9..=9 {
            for ey in -9..=9 {
                if ex == 0 || ey == 0 {
                    continue;
                }
                let end = Point::new(ex, ey);
                let points = trace(origin, (ex, ey));

                assert_eq!(points[0], Point::new(0, 0), "starts on the start cell");
                assert_eq!(points.len(), ex.abs().max(ey.abs()) as usize);

                for pair in points.windows(2) {
                    assert!((pair[1].x - pair[0].x).abs() <= 1);
                    assert!((pair[1].y - pair[0].y).abs() <= 1);
                    assert_ne!(pair[0], pair[1]);
                }

                let last = points[points.len() - 1];
                assert!(
                    (end.x - last.x).abs() <= 1 && (end.y - last.y).abs() <= 1,
                    "line to {end:?} stopped at {last:?}"
                );

                let unique: HashSet<Point> = points.iter().copied().collect();
                assert_eq!(unique.len(), points.len());
            }
        }
    }

    #[test]
    fn test_diagonal_line() {
        assert_eq!(
            trace((0, 0), (4, 4)),
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_shallow_line_trace() {
        assert_eq!(
            trace((0, 0), (6, 2)),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(4, 1),
                Point::new(5, 2),
            ]
        );
    }

    #[test]
    fn test_steep_line_walks_rows() {
        let points = trace((2, 10), (1, 0));
        assert_eq!(points.len(), 10);
        let ys: Vec<i32> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys, (1..=10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_line_uses_given_color() {
        let mut rec = Recorder::new();
        draw_line(&mut rec, PixelColor::Off, Point::new(0, 0), Point::new(3, 7));
        assert!(rec.calls.iter().all(|&(c, _)| c == PixelColor::Off));
    }
}
