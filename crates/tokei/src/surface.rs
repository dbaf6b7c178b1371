//! Terminal-backed pixel sink.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use tokei_core::{PixelColor, PixelSink};

/// The cells the clock has drawn so far.
///
/// Logical cell `(x, y)` lands on terminal column `2 * x` of row `y`; the
/// column in between stays blank so the dial keeps a roughly square aspect.
/// Writes outside the surface are dropped.
#[derive(Debug)]
pub struct Surface {
    buffer: Buffer,
    glyph: String,
    style: Style,
}

impl Surface {
    pub fn new(area: Rect, glyph: char, color: Color) -> Self {
        Self {
            buffer: Buffer::empty(area),
            glyph: glyph.to_string(),
            style: Style::new().fg(color),
        }
    }

    /// Drop everything drawn so far and take on a new size.
    pub fn resize(&mut self, area: Rect) {
        self.buffer = Buffer::empty(area);
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }
}

impl PixelSink for Surface {
    fn set_pixel(&mut self, color: PixelColor, x: i32, y: i32) {
        let (Some(column), Ok(row)) = (x.checked_mul(2), u16::try_from(y)) else {
            return;
        };
        let Ok(column) = u16::try_from(column) else {
            return;
        };
        let Some(cell) = self.buffer.cell_mut((column, row)) else {
            return;
        };
        match color {
            PixelColor::On => {
                cell.set_symbol(&self.glyph).set_style(self.style);
            }
            _ => {
                cell.reset();
            }
        }
    }
}

impl Widget for &Surface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(self.buffer.area);
        for row in area.top()..area.bottom() {
            for column in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (
                    self.buffer.cell((column, row)),
                    buf.cell_mut((column, row)),
                ) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(Rect::new(0, 0, 20, 10), '●', Color::Cyan)
    }

    #[test]
    fn test_pixel_lands_on_even_column() {
        let mut s = surface();
        s.set_pixel(PixelColor::On, 3, 4);
        assert_eq!(s.buffer[(6, 4)].symbol(), "●");
        assert_eq!(s.buffer[(6, 4)].fg, Color::Cyan);
        assert_eq!(s.buffer[(7, 4)].symbol(), " ");
        assert_eq!(s.buffer[(3, 4)].symbol(), " ");
    }

    #[test]
    fn test_off_clears_cell() {
        let mut s = surface();
        s.set_pixel(PixelColor::On, 2, 2);
        s.set_pixel(PixelColor::Off, 2, 2);
        assert_eq!(s.buffer[(4, 2)].symbol(), " ");
        assert_eq!(s.buffer[(4, 2)].fg, Color::Reset);
    }

    #[test]
    fn test_out_of_range_is_clipped() {
        let mut s = surface();
        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MAX, 0), (i32::MIN, i32::MIN)] {
            s.set_pixel(PixelColor::On, x, y);
        }
        assert!(s.buffer.content.iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn test_render_copies_cells() {
        let mut s = surface();
        s.set_pixel(PixelColor::On, 0, 0);
        s.set_pixel(PixelColor::On, 9, 9);

        let mut target = Buffer::empty(Rect::new(0, 0, 20, 10));
        (&s).render(target.area, &mut target);
        assert_eq!(target[(0, 0)].symbol(), "●");
        assert_eq!(target[(18, 9)].symbol(), "●");
    }

    #[test]
    fn test_resize_clears() {
        let mut s = surface();
        s.set_pixel(PixelColor::On, 1, 1);
        s.resize(Rect::new(0, 0, 40, 20));
        assert_eq!(s.area(), Rect::new(0, 0, 40, 20));
        assert!(s.buffer.content.iter().all(|cell| cell.symbol() == " "));
    }
}
