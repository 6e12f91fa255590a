//! Presents a [`PixelCanvas`] in the terminal.
//!
//! Each terminal cell shows two vertically stacked playfield samples using
//! the upper half block: foreground = upper sample, background = lower.
//! The playfield keeps its aspect ratio and is centred in the area.

use super::canvas::PixelCanvas;
use super::TextColor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const HALF_BLOCK: char = '\u{2580}'; // ▀

// Absorbs float error in scale products that should be whole numbers.
const EPSILON: f64 = 1e-9;

/// Mapping from playfield pixels to terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Terminal cells (columns) or half-cells (rows) per playfield pixel.
    pub scale: f64,
    /// Top-left cell of the playfield.
    pub origin_x: u16,
    pub origin_y: u16,
    /// Size of the playfield in cells.
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Fit a `logical_w` × `logical_h` playfield into `area`.
    pub fn fit(area: Rect, logical_w: usize, logical_h: usize) -> Self {
        let sx = area.width as f64 / logical_w as f64;
        let sy = (area.height as f64 * 2.0) / logical_h as f64;
        let scale = sx.min(sy);

        let cols = ((logical_w as f64 * scale + EPSILON).floor() as u16).min(area.width);
        let rows = (((logical_h as f64 * scale) / 2.0 - EPSILON).ceil() as u16).min(area.height);

        Self {
            scale,
            origin_x: area.x + (area.width - cols) / 2,
            origin_y: area.y + (area.height - rows) / 2,
            cols,
            rows,
        }
    }

    /// Playfield pixel sampled for a half-cell (column, half-row).
    fn sample(&self, col: u16, half_row: u16) -> (usize, usize) {
        let lx = ((col as f64 + 0.5) / self.scale) as usize;
        let ly = ((half_row as f64 + 0.5) / self.scale) as usize;
        (lx, ly)
    }

    /// Terminal cell containing playfield position (x, y).
    pub fn to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let col = (x as f64 * self.scale + EPSILON).floor() as i32;
        let row = (y as f64 * self.scale / 2.0 + EPSILON).floor() as i32;
        (self.origin_x as i32 + col, self.origin_y as i32 + row)
    }
}

/// Widget for rendering the composed playfield.
pub struct PlayfieldWidget<'a> {
    canvas: &'a PixelCanvas,
}

impl<'a> PlayfieldWidget<'a> {
    pub fn new(canvas: &'a PixelCanvas) -> Self {
        Self { canvas }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

fn text_style(color: TextColor) -> Style {
    let fg = match color {
        TextColor::White => Color::White,
        TextColor::Red => Color::Red,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

impl Widget for PlayfieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pixels = self.canvas.pixels();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let view = Viewport::fit(area, pixels.width, pixels.height);
        let max_x = pixels.width - 1;
        let max_y = pixels.height - 1;

        for row in 0..view.rows {
            for col in 0..view.cols {
                let (lx, top_y) = view.sample(col, row * 2);
                let (_, bottom_y) = view.sample(col, row * 2 + 1);
                let lx = lx.min(max_x);
                let top = pixels.get(lx, top_y.min(max_y));
                let bottom = pixels.get(lx, bottom_y.min(max_y));

                buf.get_mut(view.origin_x + col, view.origin_y + row)
                    .set_char(HALF_BLOCK)
                    .set_fg(rgb(top))
                    .set_bg(rgb(bottom));
            }
        }

        let right = (area.x + area.width) as i32;
        let bottom = (area.y + area.height) as i32;
        for label in self.canvas.labels() {
            let (x, y) = view.to_cell(label.x, label.y);
            if y < area.y as i32 || y >= bottom || x >= right {
                continue;
            }
            let x = x.max(area.x as i32);
            let max_width = (right - x) as usize;
            buf.set_stringn(
                x as u16,
                y as u16,
                &label.text,
                max_width,
                text_style(label.color),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Assets, Sprite, SpriteId};
    use crate::ui::Surface;

    fn canvas() -> PixelCanvas {
        let mut background = Sprite::solid(360, 640, [0, 0, 200, 255]);
        // Lower half of the playfield is green.
        for y in 320..640 {
            for x in 0..360 {
                background.pixels[y * 360 + x] = [0, 200, 0, 255];
            }
        }
        let mut canvas = PixelCanvas::new(Assets {
            background,
            bird: Sprite::solid(34, 24, [255, 255, 0, 255]),
            pipe_top: Sprite::solid(64, 512, [0, 255, 0, 255]),
            pipe_bottom: Sprite::solid(64, 512, [0, 255, 0, 255]),
        });
        canvas.blit(SpriteId::Background, 0, 0);
        canvas
    }

    #[test]
    fn test_viewport_height_limited() {
        // 80x24 terminal: 48 half-rows, playfield is tall.
        let view = Viewport::fit(Rect::new(0, 0, 80, 24), 360, 640);
        assert!((view.scale - 0.075).abs() < 1e-9);
        assert_eq!(view.cols, 27);
        assert_eq!(view.rows, 24);
        assert_eq!(view.origin_x, 26);
        assert_eq!(view.origin_y, 0);
    }

    #[test]
    fn test_viewport_width_limited() {
        let view = Viewport::fit(Rect::new(0, 0, 36, 100), 360, 640);
        assert!((view.scale - 0.1).abs() < 1e-9);
        assert_eq!(view.cols, 36);
        assert_eq!(view.rows, 32);
        assert_eq!(view.origin_y, 34);
    }

    #[test]
    fn test_to_cell() {
        let view = Viewport::fit(Rect::new(0, 0, 36, 32), 360, 640);
        assert_eq!(view.to_cell(0, 0), (0, 0));
        assert_eq!(view.to_cell(100, 300), (10, 15));
    }

    #[test]
    fn test_render_half_blocks() {
        let canvas = canvas();
        let area = Rect::new(0, 0, 36, 32);
        let mut buf = Buffer::empty(area);
        PlayfieldWidget::new(&canvas).render(area, &mut buf);

        let top = buf.get(5, 0);
        assert_eq!(top.symbol(), "▀");
        assert_eq!(top.fg, Color::Rgb(0, 0, 200));
        let low = buf.get(5, 31);
        assert_eq!(low.bg, Color::Rgb(0, 200, 0));
    }

    #[test]
    fn test_labels_are_clipped_to_area() {
        let mut canvas = canvas();
        canvas.text("Press SPACE to Restart", 300, 100, TextColor::White);
        canvas.text("off screen", 10, 2000, TextColor::Red);
        let area = Rect::new(0, 0, 36, 32);
        let mut buf = Buffer::empty(area);
        PlayfieldWidget::new(&canvas).render(area, &mut buf);

        // Label starts at column 30 and only "Press " fits.
        assert_eq!(buf.get(30, 5).symbol(), "P");
        assert_eq!(buf.get(34, 5).symbol(), "s");
        assert_eq!(buf.get(35, 5).symbol(), " ");
    }
}
