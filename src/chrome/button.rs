//! Custom-painted title bar buttons

use crate::geometry::{Point, Rect, Size};
use crate::paint::{font, Canvas, Color, CornerRadii, RoundedPath};

/// Which title bar action a button triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Minimize,
    Maximize,
    Close,
}

impl ButtonKind {
    /// Size, corner radius and glyph of the stock button for this action
    pub fn stock(&self) -> (Size, f32, &'static str) {
        match self {
            ButtonKind::Minimize => (Size::new(10, 10), 5.0, "-"),
            ButtonKind::Maximize => (Size::new(20, 20), 10.0, "[]"),
            ButtonKind::Close => (Size::new(20, 20), 10.0, "x"),
        }
    }
}

/// A fixed-size clickable element drawn as a rounded rectangle with a glyph
#[derive(Debug, Clone)]
pub struct ChromeButton {
    kind: ButtonKind,
    size: Size,
    radius: f32,
    glyph: String,
    background: Color,
    foreground: Color,
    armed: bool,
}

impl ChromeButton {
    pub fn new(kind: ButtonKind, size: Size, radius: f32, glyph: &str, background: Color, foreground: Color) -> Self {
        Self {
            kind,
            size,
            radius,
            glyph: glyph.to_string(),
            background,
            foreground,
            armed: false,
        }
    }

    /// The stock button for `kind`
    pub fn stock(kind: ButtonKind, background: Color, foreground: Color) -> Self {
        let (size, radius, glyph) = kind.stock();
        Self::new(kind, size, radius, glyph, background, foreground)
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Whether a press landed on this button and has not been released yet
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Hit test in button-local coordinates
    pub fn contains(&self, local: Point) -> bool {
        Rect::from_parts(Point::ZERO, self.size).contains(local)
    }

    /// Arm the button if `local` is inside it; returns whether it took the press
    pub fn press(&mut self, local: Point) -> bool {
        self.armed = self.contains(local);
        self.armed
    }

    /// Disarm; returns true when this completes a click inside the button
    pub fn release(&mut self, local: Point) -> bool {
        let activated = self.armed && self.contains(local);
        self.armed = false;
        activated
    }

    /// Drop an armed press without activating
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Draw the button with its top-left at `origin`
    pub fn render(&self, canvas: &mut Canvas, origin: Point) {
        let path = RoundedPath::build(
            self.size.width as f32,
            self.size.height as f32,
            CornerRadii::uniform(self.radius),
        );
        canvas.fill_path(&path, origin, self.background);

        // Center the glyph, letting it overflow buttons smaller than a cell
        let text_w = font::text_width(&self.glyph);
        let glyph_origin = Point::new(
            origin.x + (self.size.width - text_w) / 2,
            origin.y + (self.size.height - font::FONT_H) / 2,
        );
        canvas.draw_text(glyph_origin, &self.glyph, self.foreground);
    }
}
