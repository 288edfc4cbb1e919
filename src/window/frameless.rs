//! Frameless top-level window
//!
//! `FramelessWindow` owns the window geometry and everything the platform
//! frame would normally do: it senses the invisible resize border, runs
//! resize gestures, routes pointer input to the title bar, applies the
//! title bar's intents and paints the rounded silhouette.
//!
//! Pointer events are routed in priority order:
//! 1. an active resize gesture,
//! 2. an active title bar drag,
//! 3. the title bar rectangle,
//! 4. the window's own border logic.

use crate::chrome::{Icon, TitleBar, TitleBarIntent};
use crate::geometry::{Point, Rect, Size};
use crate::paint::{Canvas, Color, CornerRadii, RoundedPath};
use crate::utils::config::Config;
use crate::utils::error::Result;
use crate::window::events::{MouseButton, PointerEvent, PointerKind};
use crate::window::resize::{sense, CursorKind, EdgeDistance, EdgeProximity, ResizeGesture};
use crate::window::HostWindow;
use log::{debug, trace};

pub struct FramelessWindow<H: HostWindow> {
    host: H,

    /// Global geometry; only this type changes it
    frame: Rect,

    min_size: Size,
    edge_sense: i32,
    corner_radius: f32,
    round_when_maximized: bool,
    background: Color,
    content_color: Color,

    maximized: bool,

    /// 0 while maximized, the edge sense distance otherwise
    margin: i32,

    cursor: CursorKind,

    /// Edges sensed by the last move, consumed by the next press
    pending: Option<(EdgeProximity, EdgeDistance)>,

    resize: Option<ResizeGesture>,
    title_bar: TitleBar,
}

impl<H: HostWindow> FramelessWindow<H> {
    /// Wrap `host`, whose current geometry is `frame`
    pub fn new(host: H, frame: Rect, config: &Config, icon: Option<Icon>) -> Result<Self> {
        let window = &config.window;
        let title_bar = TitleBar::new(&window.title, &config.title_bar, &config.buttons, icon)?;
        let edge_sense = window.edge_sense_distance as i32;

        let mut chrome = Self {
            host,
            frame,
            min_size: Size::new(window.min_width as i32, window.min_height as i32),
            edge_sense,
            corner_radius: window.corner_radius as f32,
            round_when_maximized: window.round_when_maximized,
            background: Color::from_hex(&window.background)?,
            content_color: Color::from_hex(&window.content_color)?,
            maximized: false,
            margin: edge_sense,
            cursor: CursorKind::Arrow,
            pending: None,
            resize: None,
            title_bar,
        };
        chrome.layout_title_bar();
        Ok(chrome)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }

    pub fn title(&self) -> &str {
        self.title_bar.title()
    }

    pub fn title_bar(&self) -> &TitleBar {
        &self.title_bar
    }

    /// Title bar rectangle in window coordinates
    pub fn title_bar_rect(&self) -> Rect {
        Rect::from_parts(self.title_bar_origin(), self.title_bar.size())
    }

    /// Smallest size a resize gesture may produce
    pub fn minimum_size(&self) -> Size {
        Size::new(
            self.min_size.width.max(self.title_bar.minimum_width() + 2 * self.margin),
            self.min_size.height.max(self.title_bar.height() + 2 * self.margin),
        )
    }

    pub fn set_title(&mut self, title: &str) {
        self.title_bar.set_title(title);
        self.host.request_redraw();
    }

    /// Route a pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.resize.is_some() {
            self.handle_resize_event(event);
            return;
        }

        if self.title_bar.is_dragging() {
            self.forward_to_title_bar(event);
            return;
        }

        if self.title_bar_rect().contains(event.local) {
            self.pending = None;
            self.set_cursor(CursorKind::Arrow);
            self.forward_to_title_bar(event);
            return;
        }

        self.handle_border_event(event);
    }

    /// The host reports a new inner size, including after maximize/restore
    pub fn on_resized(&mut self, size: Size) {
        let maximized = self.host.is_maximized();
        let stale = maximized == self.maximized && self.resize.is_some() && size != self.frame.size;
        if stale {
            // Late echo of an earlier resize step
            trace!("Ignoring stale size {}x{}", size.width, size.height);
        } else {
            self.frame.size = size;
        }
        if maximized != self.maximized {
            debug!("Window {}", if maximized { "maximized" } else { "restored" });
        }

        self.maximized = maximized;
        self.margin = if maximized { 0 } else { self.edge_sense };
        if maximized {
            self.pending = None;
            self.resize = None;
        }

        // Keep the resize cursor while the user is still dragging an edge
        if self.resize.is_none() {
            self.set_cursor(CursorKind::Arrow);
        }

        self.layout_title_bar();
        self.host.request_redraw();
    }

    /// The host reports a new position
    pub fn on_moved(&mut self, origin: Point) {
        let gesture_active = self.resize.is_some() || self.title_bar.is_dragging();
        if gesture_active && origin != self.frame.origin && !self.host.is_maximized() {
            trace!("Ignoring stale position ({}, {})", origin.x, origin.y);
            return;
        }
        self.frame.origin = origin;
    }

    pub fn toggle_maximize(&mut self) {
        if self.host.is_maximized() {
            debug!("Restoring window");
            self.host.set_maximized(false);
        } else {
            self.show_maximized();
        }
    }

    /// Maximize, bringing the window back first if it is hidden or minimized
    pub fn show_maximized(&mut self) {
        if !self.host.is_visible() || self.host.is_minimized() {
            self.host.set_visible(true);
            self.host.set_minimized(false);
        }
        debug!("Maximizing window");
        self.host.set_maximized(true);
    }

    pub fn apply_intent(&mut self, intent: TitleBarIntent) {
        match intent {
            TitleBarIntent::Minimize => {
                debug!("Minimizing window");
                self.host.set_minimized(true);
            }
            TitleBarIntent::ToggleMaximize => self.toggle_maximize(),
            TitleBarIntent::Close => {
                debug!("Closing window");
                self.host.close();
            }
            TitleBarIntent::Move(target) => {
                if self.maximized {
                    return;
                }
                let origin = target - self.title_bar_origin();
                if origin != self.frame.origin {
                    self.frame.origin = origin;
                    self.host.set_position(origin);
                }
            }
        }
    }

    /// Paint the whole window into `canvas`, resizing it to the frame
    pub fn paint(&self, canvas: &mut Canvas) {
        let width = self.frame.width().max(0);
        let height = self.frame.height().max(0);
        canvas.resize(width as u32, height as u32);
        canvas.clear(Color::TRANSPARENT);

        let radius = if self.maximized && !self.round_when_maximized {
            0.0
        } else {
            self.corner_radius
        };
        let silhouette = RoundedPath::build(width as f32, height as f32, CornerRadii::uniform(radius));
        canvas.fill_path(&silhouette, Point::ZERO, self.background);

        let bar = self.title_bar_rect();
        let inner = Rect::new(0, 0, width, height).inset(self.margin);
        let content = Rect::new(
            inner.x(),
            inner.y() + bar.height(),
            inner.width(),
            inner.height() - bar.height(),
        );
        if !content.is_empty() {
            canvas.fill_rect(content, self.content_color);
        }

        self.title_bar.paint(canvas, bar.origin);
    }

    fn title_bar_origin(&self) -> Point {
        Point::new(self.margin, self.margin)
    }

    fn layout_title_bar(&mut self) {
        self.title_bar.set_width(self.frame.width() - 2 * self.margin);
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        if cursor != self.cursor {
            self.cursor = cursor;
            self.host.set_cursor(cursor);
        }
    }

    fn forward_to_title_bar(&mut self, event: PointerEvent) {
        let local = event.translated(self.title_bar_origin());
        if let Some(intent) = self.title_bar.handle_pointer(local) {
            self.apply_intent(intent);
        }
    }

    fn handle_border_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerKind::Move => self.sense_edges(event.global),
            _ if event.is_left_press() => self.begin_resize(),
            PointerKind::Release(MouseButton::Left) => self.forward_to_title_bar(event),
            _ => {}
        }
    }

    fn handle_resize_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerKind::Move => self.apply_resize(event.global),
            PointerKind::Release(MouseButton::Left) => {
                if let Some(gesture) = self.resize.take() {
                    debug!("Resize of {:?} finished at {:?}", gesture.proximity(), self.frame);
                }
                self.forward_to_title_bar(event);
            }
            _ => {}
        }
    }

    fn sense_edges(&mut self, global: Point) {
        if self.maximized {
            self.pending = None;
            return;
        }

        let (proximity, distance) = sense(global, self.frame, self.edge_sense);
        trace!(
            "Edge proximity l={} r={} t={} b={}",
            proximity.left,
            proximity.right,
            proximity.top,
            proximity.bottom
        );
        self.pending = Some((proximity, distance));
        self.set_cursor(proximity.classify());
    }

    fn begin_resize(&mut self) {
        // Kept until the next sensing move, so a second press at the same spot resizes too
        let Some((proximity, distance)) = self.pending else {
            return;
        };
        if self.maximized || !proximity.any() {
            return;
        }
        debug!("Resize started with {:?}", proximity);
        self.resize = Some(ResizeGesture::new(proximity, distance));
    }

    fn apply_resize(&mut self, global: Point) {
        let Some(gesture) = self.resize else {
            return;
        };

        let (_, distance) = sense(global, self.frame, self.edge_sense);
        let target = gesture.resized_frame(self.frame, distance);
        let min = self.minimum_size();
        if target.width() < min.width || target.height() < min.height {
            trace!(
                "Rejected resize to {}x{} (minimum {}x{})",
                target.width(),
                target.height(),
                min.width,
                min.height
            );
            return;
        }
        if target == self.frame {
            return;
        }

        self.frame = target;
        self.host.set_geometry(target);
        self.layout_title_bar();
        self.host.request_redraw();
    }
}
