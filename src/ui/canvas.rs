//! Software rasterizer for the logical playfield.

use super::{Surface, TextColor};
use crate::assets::{Assets, Sprite, SpriteId};
use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// A text overlay, positioned in playfield pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: TextColor,
}

/// RGB pixel buffer.
#[derive(Debug, Clone)]
pub struct PixelBuf {
    pub width: usize,
    pub height: usize,
    px: Vec<[u8; 3]>,
}

impl PixelBuf {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![[0, 0, 0]; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.px[y * self.width + x]
    }

    /// Copy `sprite` with its top-left corner at (x, y). Pixels with alpha
    /// below half are transparent; anything outside the buffer is clipped.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sprite.width as i32).min(self.width as i32);
        let y1 = (y + sprite.height as i32).min(self.height as i32);

        for py in y0..y1 {
            for px in x0..x1 {
                let [r, g, b, a] = sprite.pixel((px - x) as u32, (py - y) as u32);
                if a < 128 {
                    continue;
                }
                self.px[py as usize * self.width + px as usize] = [r, g, b];
            }
        }
    }
}

/// The playfield-sized [`Surface`] used by the game: pixels plus the
/// frame's text labels.
#[derive(Debug)]
pub struct PixelCanvas {
    buf: PixelBuf,
    labels: Vec<Label>,
    assets: Assets,
}

impl PixelCanvas {
    pub fn new(assets: Assets) -> Self {
        Self {
            buf: PixelBuf::new(PLAYFIELD_WIDTH as usize, PLAYFIELD_HEIGHT as usize),
            labels: Vec::new(),
            assets,
        }
    }

    /// Drop last frame's labels. Pixels are overwritten by the background.
    pub fn begin_frame(&mut self) {
        self.labels.clear();
    }

    pub fn pixels(&self) -> &PixelBuf {
        &self.buf
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl Surface for PixelCanvas {
    fn blit(&mut self, sprite: SpriteId, x: i32, y: i32) {
        self.buf.blit(self.assets.get(sprite), x, y);
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: TextColor) {
        self.labels.push(Label {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }
}
