pub mod text;

use image::RgbaImage;

use crate::color::Color;
use crate::geometry::{Rect, ellipse_contains};

use text::{Font, layout_text};

/// CPU-side RGBA drawing surface.
///
/// Every primitive overwrites pixels (no alpha blending) and is clipped to
/// the canvas bounds, so shapes may hang off any edge.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// A fully transparent canvas of `width × height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The whole canvas as an inclusive box, or `None` for a 0×0 canvas.
    pub fn bounds(&self) -> Option<Rect> {
        let r = Rect::new(0, 0, self.width() as i32 - 1, self.height() as i32 - 1);
        if r.is_empty() { None } else { Some(r) }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill the inclusive box `rect` with `color`.
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let Some(clip) = self.bounds().and_then(|b| b.intersect(rect)) else {
            return;
        };
        let px = color.to_rgba();
        for y in clip.y0..=clip.y1 {
            for x in clip.x0..=clip.x1 {
                self.image.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    /// Fill the ellipse inscribed in the inclusive box `bbox`.
    pub fn fill_ellipse(&mut self, bbox: &Rect, color: Color) {
        let Some(clip) = self.bounds().and_then(|b| b.intersect(bbox)) else {
            return;
        };
        let px = color.to_rgba();
        for y in clip.y0..=clip.y1 {
            for x in clip.x0..=clip.x1 {
                if ellipse_contains(bbox, x, y) {
                    self.image.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    /// Draw (possibly multi-line) `text` with its top-left corner at `origin`.
    pub fn draw_text(&mut self, font: &Font, text: &str, origin: (i32, i32), scale: u32, color: Color) {
        for placed in layout_text(text, font, origin, scale) {
            let Some(glyph) = font.glyphs.get(&placed.ch) else {
                continue;
            };
            let s = placed.scale as i32;
            for (dx, dy) in glyph.pixels() {
                let x = placed.x + dx as i32 * s;
                let y = placed.y + dy as i32 * s;
                self.fill_rect(&Rect::new(x, y, x + s - 1, y + s - 1), color);
            }
        }
    }
}
