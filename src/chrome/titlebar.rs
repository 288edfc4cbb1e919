//! Custom title bar
//!
//! The bar shows the window icon and title on the left and the minimize,
//! maximize and close buttons on the right. Pressing anywhere else on the
//! bar starts a drag that moves the window; double-clicking it toggles
//! maximization. The bar never touches the window itself: it reports what
//! the user asked for as a `TitleBarIntent`.

use crate::chrome::button::{ButtonKind, ChromeButton};
use crate::chrome::icon::Icon;
use crate::chrome::layout::{Direction, ElementTable, RowLayout};
use crate::geometry::{Point, Rect, Size};
use crate::paint::{font, Canvas, Color, CornerRadii, RoundedPath};
use crate::utils::config::{ButtonConfig, TitleBarConfig};
use crate::utils::error::Result;
use crate::window::drag::MoveGesture;
use crate::window::events::{MouseButton, PointerEvent, PointerKind};
use log::debug;
use serde_json::Value;

/// Things the title bar lays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleBarElement {
    Icon,
    Label,
    Button(ButtonKind),
}

/// What the user asked the window to do through the title bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBarIntent {
    Minimize,
    ToggleMaximize,
    Close,
    /// Put the title bar's top-left at this global position
    Move(Point),
}

pub struct TitleBar {
    title: String,
    width: i32,
    height: i32,
    corner_radius: f32,
    background: Color,
    label_color: Color,
    icon: Option<Icon>,
    buttons: Vec<ChromeButton>,
    layout: RowLayout<TitleBarElement>,
    placed: Vec<(TitleBarElement, Rect)>,
    drag: MoveGesture,
}

impl TitleBar {
    /// Title bar with the standard layout
    pub fn new(title: &str, config: &TitleBarConfig, buttons: &ButtonConfig, icon: Option<Icon>) -> Result<Self> {
        Self::build(title, config, buttons, icon, |elements| Ok(standard_layout(elements)))
    }

    /// Title bar arranged by a layout description naming `title_icon`,
    /// `title_label`, `minimize_button`, `maximize_button` and `close_button`
    pub fn with_layout(
        layout: &Value,
        title: &str,
        config: &TitleBarConfig,
        buttons: &ButtonConfig,
        icon: Option<Icon>,
    ) -> Result<Self> {
        Self::build(title, config, buttons, icon, |elements| {
            RowLayout::from_description(Direction::Horizontal, layout, elements)
        })
    }

    fn build<F>(title: &str, config: &TitleBarConfig, buttons: &ButtonConfig, icon: Option<Icon>, make_layout: F) -> Result<Self>
    where
        F: FnOnce(&ElementTable<'_, TitleBarElement>) -> Result<RowLayout<TitleBarElement>>,
    {
        let button_bg = Color::from_hex(&buttons.background)?;
        let glyph = Color::from_hex(&buttons.glyph_color)?;
        let buttons: Vec<ChromeButton> = [ButtonKind::Minimize, ButtonKind::Maximize, ButtonKind::Close]
            .into_iter()
            .map(|kind| ChromeButton::stock(kind, button_bg, glyph))
            .collect();

        let icon_size = icon.as_ref().map_or(Size::ZERO, Icon::size);
        let mut elements = vec![
            ("title_icon", TitleBarElement::Icon, icon_size),
            ("title_label", TitleBarElement::Label, label_size(title)),
        ];
        for (name, button) in ["minimize_button", "maximize_button", "close_button"]
            .into_iter()
            .zip(&buttons)
        {
            elements.push((name, TitleBarElement::Button(button.kind()), button.size()));
        }

        let layout = make_layout(&elements)?;

        let mut bar = Self {
            title: title.to_string(),
            width: 0,
            height: config.height as i32,
            corner_radius: config.corner_radius as f32,
            background: Color::from_hex(&config.background)?,
            label_color: Color::from_hex(&config.label_color)?,
            icon,
            buttons,
            layout,
            placed: Vec::new(),
            drag: MoveGesture::new(),
        };
        bar.set_width(bar.minimum_width());
        Ok(bar)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title text and re-run the layout
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.layout.set_element_size(TitleBarElement::Label, label_size(title));
        self.relayout();
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Set the bar width and re-run the layout
    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(0);
        self.relayout();
    }

    /// Narrowest width that fits every element
    pub fn minimum_width(&self) -> i32 {
        self.layout.minimum_length()
    }

    /// Where `element` sits, in title bar coordinates
    pub fn element_rect(&self, element: TitleBarElement) -> Option<Rect> {
        rect_of(&self.placed, element)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Handle a pointer event whose local position is in title bar coordinates
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<TitleBarIntent> {
        match event.kind {
            PointerKind::Press(MouseButton::Left) => {
                if !self.press_buttons(event.local) {
                    self.drag.begin(event.local);
                }
                None
            }

            PointerKind::DoubleClick(MouseButton::Left) => {
                if self.press_buttons(event.local) {
                    None
                } else {
                    debug!("Title bar double-clicked");
                    Some(TitleBarIntent::ToggleMaximize)
                }
            }

            PointerKind::Move => self.drag.update(event.global).map(TitleBarIntent::Move),

            PointerKind::Release(MouseButton::Left) => {
                self.drag.end();
                self.release_buttons(event.local)
            }

            _ => None,
        }
    }

    /// Draw the bar with its top-left at `origin`
    pub fn paint(&self, canvas: &mut Canvas, origin: Point) {
        let path = RoundedPath::build(
            self.width as f32,
            self.height as f32,
            CornerRadii::top(self.corner_radius),
        );
        canvas.fill_path(&path, origin, self.background);

        for (element, rect) in &self.placed {
            let at = origin + rect.origin;
            match element {
                TitleBarElement::Icon => {
                    if let Some(icon) = &self.icon {
                        canvas.draw_image(at, icon.width(), icon.height(), icon.rgba());
                    }
                }
                TitleBarElement::Label => canvas.draw_text(at, &self.title, self.label_color),
                TitleBarElement::Button(kind) => {
                    if let Some(button) = self.buttons.iter().find(|b| b.kind() == *kind) {
                        button.render(canvas, at);
                    }
                }
            }
        }
    }

    fn relayout(&mut self) {
        self.placed = self.layout.arrange(Rect::new(0, 0, self.width, self.height));
    }

    /// Offer a press to every button; returns whether one took it
    fn press_buttons(&mut self, local: Point) -> bool {
        let mut taken = false;
        for button in &mut self.buttons {
            match rect_of(&self.placed, TitleBarElement::Button(button.kind())) {
                Some(rect) => taken |= button.press(local - rect.origin),
                None => button.disarm(),
            }
        }
        taken
    }

    fn release_buttons(&mut self, local: Point) -> Option<TitleBarIntent> {
        let mut intent = None;
        for button in &mut self.buttons {
            let origin = rect_of(&self.placed, TitleBarElement::Button(button.kind()))
                .map_or(Point::ZERO, |rect| rect.origin);
            if button.release(local - origin) {
                debug!("{:?} button clicked", button.kind());
                intent = Some(match button.kind() {
                    ButtonKind::Minimize => TitleBarIntent::Minimize,
                    ButtonKind::Maximize => TitleBarIntent::ToggleMaximize,
                    ButtonKind::Close => TitleBarIntent::Close,
                });
            }
        }
        intent
    }
}

/// `[5, icon, 10, label, stretch, minimize, maximize, close, 5]`
fn standard_layout(elements: &ElementTable<'_, TitleBarElement>) -> RowLayout<TitleBarElement> {
    let size_of = |key: TitleBarElement| {
        elements
            .iter()
            .find(|(_, k, _)| *k == key)
            .map_or(Size::ZERO, |(_, _, size)| *size)
    };

    let mut layout = RowLayout::new(Direction::Horizontal);
    layout
        .add_spacing(5)
        .add_element(TitleBarElement::Icon, size_of(TitleBarElement::Icon))
        .add_spacing(10)
        .add_element(TitleBarElement::Label, size_of(TitleBarElement::Label))
        .add_stretch();
    for kind in [ButtonKind::Minimize, ButtonKind::Maximize, ButtonKind::Close] {
        layout.add_element(TitleBarElement::Button(kind), size_of(TitleBarElement::Button(kind)));
    }
    layout.add_spacing(5);
    layout
}

fn label_size(title: &str) -> Size {
    Size::new(font::text_width(title), font::FONT_H)
}

fn rect_of(placed: &[(TitleBarElement, Rect)], element: TitleBarElement) -> Option<Rect> {
    placed
        .iter()
        .find(|(placed_element, _)| *placed_element == element)
        .map(|(_, rect)| *rect)
}
