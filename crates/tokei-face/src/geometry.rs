//! Fitting the dial onto a character grid.

use tokei_core::{Circle, Point};

/// Default radius as a fraction of the largest circle that fits.
pub const DEFAULT_RADIUS_RATIO: f64 = 0.9;

/// Center and radius of the dial, in logical cells.
///
/// One logical cell is two terminal columns wide, which roughly squares up
/// the usual 1:2 character cell so the dial does not come out elliptical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGeometry {
    pub center: Point,
    pub radius: u32,
}

impl FaceGeometry {
    /// Fit the dial into a surface of `columns` x `rows` character cells.
    pub fn fit(columns: u16, rows: u16, radius_ratio: f64) -> Self {
        let center = Point::new(i32::from(columns / 4), i32::from(rows / 2));
        let room = center.x.min(center.y);
        // Nudge before truncating so e.g. 0.9 * 30 does not come out as 26.
        let radius = (radius_ratio * f64::from(room) + 1e-9).floor().max(0.0) as u32;

        let geometry = Self { center, radius };
        log::debug!("fitted dial into {columns}x{rows}: {geometry:?}");
        geometry
    }

    /// The dial outline.
    pub fn outline(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// A distance from the center given as a fraction of the radius,
    /// truncated toward zero.
    pub fn scaled(&self, fraction: f64) -> i32 {
        (fraction * f64::from(self.radius)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_standard_terminal() {
        let g = FaceGeometry::fit(80, 24, DEFAULT_RADIUS_RATIO);
        assert_eq!(g.center, Point::new(20, 12));
        assert_eq!(g.radius, 10);
    }

    #[test]
    fn test_fit_matches_integer_formula() {
        for columns in (4..=400u16).step_by(3) {
            for rows in [2u16, 10, 24, 31, 60, 100] {
                let g = FaceGeometry::fit(columns, rows, DEFAULT_RADIUS_RATIO);
                let room = (columns / 4).min(rows / 2) as u32;
                assert_eq!(g.radius, 9 * room / 10, "{columns}x{rows}");
            }
        }
    }

    #[test]
    fn test_fit_tiny_surface() {
        let g = FaceGeometry::fit(1, 1, DEFAULT_RADIUS_RATIO);
        assert_eq!(g.center, Point::new(0, 0));
        assert_eq!(g.radius, 0);
    }

    #[test]
    fn test_scaled_truncates_toward_zero() {
        let g = FaceGeometry {
            center: Point::new(0, 0),
            radius: 9,
        };
        assert_eq!(g.scaled(0.95), 8);
        assert_eq!(g.scaled(-0.1), 0);
        assert_eq!(g.scaled(-0.2), -1);
    }
}
