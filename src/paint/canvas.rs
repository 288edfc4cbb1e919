//! Software drawing surface
//!
//! Pixels are stored as premultiplied RGBA8 so that source-over blending
//! stays a single multiply-add per channel and the buffer can be uploaded
//! to a premultiplied-alpha swapchain unchanged.

use crate::geometry::{Point, Rect, Size};
use crate::paint::font;
use crate::paint::{Color, RoundedPath};

/// Premultiplied RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Resize, discarding the contents
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize * 4];
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Raw premultiplied RGBA8 rows, top to bottom
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Premultiplied RGBA of one pixel
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let index = self.index(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[index..index + 4]);
        Some(px)
    }

    /// Overwrite every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        let px = to_bytes(color.to_premultiplied());
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Blend a solid rectangle over the canvas
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let src = color.to_premultiplied();
        for y in rect.y()..rect.y() + rect.height() {
            for x in rect.x()..rect.x() + rect.width() {
                self.blend(x, y, src, 1.0);
            }
        }
    }

    /// Blend `path`, placed with its top-left at `origin`, antialiased
    pub fn fill_path(&mut self, path: &RoundedPath, origin: Point, color: Color) {
        let src = color.to_premultiplied();
        let width = path.width().ceil() as i32;
        let height = path.height().ceil() as i32;

        let x_range = origin.x.max(0)..(origin.x + width).min(self.width as i32);
        let y_range = origin.y.max(0)..(origin.y + height).min(self.height as i32);

        for y in y_range {
            for x in x_range.clone() {
                let coverage = path.coverage(x - origin.x, y - origin.y);
                if coverage > 0.0 {
                    self.blend(x, y, src, coverage);
                }
            }
        }
    }

    /// Blend a straight-alpha RGBA8 image with its top-left at `origin`
    pub fn draw_image(&mut self, origin: Point, width: u32, height: u32, rgba: &[u8]) {
        for (row, line) in rgba.chunks_exact(width as usize * 4).take(height as usize).enumerate() {
            for (col, px) in line.chunks_exact(4).enumerate() {
                let color = Color::from_rgba(px[0], px[1], px[2], px[3]);
                self.blend(
                    origin.x + col as i32,
                    origin.y + row as i32,
                    color.to_premultiplied(),
                    1.0,
                );
            }
        }
    }

    /// Draw `text` with the bitmap font, top-left at `origin`
    pub fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        let src = color.to_premultiplied();
        for (index, ch) in text.chars().enumerate() {
            let cell_x = origin.x + index as i32 * font::FONT_W;
            for (dx, dy) in font::glyph_pixels(ch) {
                self.blend(cell_x + dx, origin.y + dy, src, 1.0);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Source-over with premultiplied source scaled by `coverage`
    fn blend(&mut self, x: i32, y: i32, src: [f32; 4], coverage: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let dst = &mut self.pixels[index..index + 4];
        let src_alpha = src[3] * coverage;
        for channel in 0..4 {
            let d = dst[channel] as f32 / 255.0;
            let s = src[channel] * coverage;
            let out = s + d * (1.0 - src_alpha);
            dst[channel] = (out.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
}

fn to_bytes(premultiplied: [f32; 4]) -> [u8; 4] {
    premultiplied.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::CornerRadii;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 4);
        assert_eq!(canvas.pixel(3, 2), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_path_square_vs_rounded_corner() {
        let mut canvas = Canvas::new(20, 20);
        let square = RoundedPath::build(20.0, 20.0, CornerRadii::ZERO);
        canvas.fill_path(&square, Point::ZERO, Color::from_rgb(255, 0, 0));
        assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0, 255]));

        let mut canvas = Canvas::new(20, 20);
        let rounded = RoundedPath::build(20.0, 20.0, CornerRadii::uniform(6.0));
        canvas.fill_path(&rounded, Point::ZERO, Color::from_rgb(255, 0, 0));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(10, 10), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_source_over_blending() {
        let mut canvas = Canvas::new(1, 1);
        canvas.clear(Color::from_rgb(0, 0, 255));
        canvas.fill_rect(Rect::new(0, 0, 1, 1), Color::new(1.0, 0.0, 0.0, 0.5));
        let [r, g, b, a] = canvas.pixel(0, 0).unwrap();
        assert_eq!((r, g, a), (128, 0, 255));
        assert!((126..=128).contains(&b));
    }

    #[test]
    fn test_fill_path_clipped_to_canvas() {
        let mut canvas = Canvas::new(10, 10);
        let path = RoundedPath::build(30.0, 30.0, CornerRadii::ZERO);
        canvas.fill_path(&path, Point::new(-5, 5), Color::WHITE);
        assert_eq!(canvas.pixel(0, 5), Some([255; 4]));
        assert_eq!(canvas.pixel(0, 4), Some([0; 4]));
    }

    #[test]
    fn test_draw_text_and_image() {
        let mut canvas = Canvas::new(16, 8);
        canvas.draw_text(Point::ZERO, "-", Color::BLACK);
        assert_eq!(canvas.pixel(1, 3), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(0, 3), Some([0, 0, 0, 0]));

        let image = [255u8, 255, 255, 128];
        canvas.draw_image(Point::new(10, 0), 1, 1, &image);
        assert_eq!(canvas.pixel(10, 0), Some([128, 128, 128, 128]));
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Color::WHITE);
        canvas.resize(3, 1);
        assert_eq!(canvas.size(), Size::new(3, 1));
        assert_eq!(canvas.pixel(2, 0), Some([0; 4]));
    }
}
