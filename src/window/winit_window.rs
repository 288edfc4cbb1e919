//! Winit window implementation for frameless-chrome
//!
//! `WinitHost` exposes a borderless winit window through `HostWindow`, and
//! `FramelessApp` is the winit application that feeds window events to the
//! `FramelessWindow` state machine and presents its canvas.

use crate::chrome::Icon;
use crate::geometry::{Point, Rect, Size};
use crate::paint::Canvas;
use crate::renderer::{Renderer, WgpuRenderer};
use crate::utils::config::Config;
use crate::utils::error::{ChromeError, IntoChromeError, Result};
use crate::window::events::{ClickTracker, EventHandler};
use crate::window::frameless::FramelessWindow;
use crate::window::resize::CursorKind;
use crate::window::HostWindow;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorIcon, Window, WindowId},
};

/// Map the chrome's cursor kinds onto winit cursor icons
pub fn cursor_icon(kind: CursorKind) -> CursorIcon {
    match kind {
        CursorKind::Arrow => CursorIcon::Default,
        CursorKind::Horizontal => CursorIcon::EwResize,
        CursorKind::Vertical => CursorIcon::NsResize,
        CursorKind::DiagonalNwSe => CursorIcon::NwseResize,
        CursorKind::DiagonalNeSw => CursorIcon::NeswResize,
    }
}

/// `HostWindow` backed by a winit window
pub struct WinitHost {
    window: Arc<Window>,
    close_requested: bool,
}

impl WinitHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            close_requested: false,
        }
    }

    /// Whether the chrome asked for the window to close
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl HostWindow for WinitHost {
    fn set_position(&mut self, origin: Point) {
        self.window
            .set_outer_position(PhysicalPosition::new(origin.x, origin.y));
    }

    fn set_geometry(&mut self, frame: Rect) {
        self.set_position(frame.origin);
        let _ = self.window.request_inner_size(PhysicalSize::new(
            frame.width().max(1) as u32,
            frame.height().max(1) as u32,
        ));
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.window.set_cursor(cursor_icon(cursor));
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn is_minimized(&self) -> bool {
        self.window.is_minimized().unwrap_or(false)
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible().unwrap_or(true)
    }

    fn set_visible(&mut self, visible: bool) {
        self.window.set_visible(visible);
    }

    fn set_minimized(&mut self, minimized: bool) {
        self.window.set_minimized(minimized);
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }

    fn close(&mut self) {
        self.close_requested = true;
    }
}

/// Everything that exists once the window has been created
struct AppState {
    window: Arc<Window>,
    chrome: FramelessWindow<WinitHost>,
    renderer: WgpuRenderer,
    canvas: Canvas,
    events: EventHandler,
    surface_size: (u32, u32),
}

impl AppState {
    fn new(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(true)
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height));

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .window_err("Failed to create window")?,
        );

        let icon = Icon::load_or_warn(&config.title_bar.icon_path, config.title_bar.icon_height);
        if let Some(icon) = &icon {
            match icon.to_window_icon() {
                Ok(window_icon) => window.set_window_icon(Some(window_icon)),
                Err(e) => warn!("Could not set window icon: {}", e),
            }
        }

        let renderer = WgpuRenderer::new(window.clone())?;

        let origin = match window.outer_position() {
            Ok(position) => Point::new(position.x, position.y),
            Err(e) => {
                warn!("Window position unavailable ({}), assuming the screen origin", e);
                Point::ZERO
            }
        };
        let size = window.inner_size();
        let frame = Rect::new(origin.x, origin.y, size.width as i32, size.height as i32);

        let mut chrome = FramelessWindow::new(WinitHost::new(window.clone()), frame, config, icon)?;
        if config.window.start_maximized {
            chrome.show_maximized();
        }

        let clicks = ClickTracker::new(
            Duration::from_millis(config.input.double_click_ms),
            config.input.double_click_distance,
        );

        info!(
            "Created {}x{} window '{}' at ({}, {})",
            size.width, size.height, config.window.title, origin.x, origin.y
        );
        window.request_redraw();

        Ok(Self {
            window,
            chrome,
            renderer,
            canvas: Canvas::new(size.width, size.height),
            events: EventHandler::new(clicks),
            surface_size: (size.width, size.height),
        })
    }

    /// Screen position of the window, falling back to the tracked geometry
    fn window_origin(&self) -> Point {
        self.window
            .outer_position()
            .map_or(self.chrome.frame().origin, |p| Point::new(p.x, p.y))
    }

    fn redraw(&mut self) -> Result<()> {
        let size = self.window.inner_size();
        if (size.width, size.height) != self.surface_size {
            self.renderer.resize(size.width, size.height)?;
            self.surface_size = (size.width, size.height);
        }

        self.chrome.paint(&mut self.canvas);
        self.renderer.present(&self.canvas)
    }
}

/// The winit application driving a frameless window
pub struct FramelessApp {
    config: Config,
    state: Option<AppState>,
    error: Option<ChromeError>,
}

impl FramelessApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }

    /// Outcome of the run: the first fatal error, if any
    pub fn into_result(self) -> Result<()> {
        self.error.map_or(Ok(()), Err)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ChromeError) {
        error!("{}", err);
        self.error.get_or_insert(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for FramelessApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match AppState::new(event_loop, &self.config) {
            Ok(state) => self.state = Some(state),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                event_loop.exit();
                return;
            }

            WindowEvent::Resized(size) => {
                if let Err(e) = state.renderer.resize(size.width, size.height) {
                    warn!("Renderer resize failed: {}", e);
                }
                state.surface_size = (size.width, size.height);
                state
                    .chrome
                    .on_resized(Size::new(size.width as i32, size.height as i32));
            }

            WindowEvent::Moved(position) => {
                state.chrome.on_moved(Point::new(position.x, position.y));
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = state.redraw() {
                    self.fail(event_loop, e);
                    return;
                }
            }

            other => {
                let origin = state.window_origin();
                if let Some(pointer) = state.events.handle_event(&other, origin, Instant::now()) {
                    state.chrome.handle_pointer(pointer);
                }
            }
        }

        if state.chrome.host().close_requested() {
            debug!("Closing from the title bar");
            event_loop.exit();
        }
    }
}

/// Open the window described by `config` and run until it closes
pub fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::new().window_err("Failed to create event loop")?;
    let mut app = FramelessApp::new(config);
    event_loop.run_app(&mut app).window_err("Event loop error")?;
    app.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(cursor_icon(CursorKind::Arrow), CursorIcon::Default);
        assert_eq!(cursor_icon(CursorKind::Horizontal), CursorIcon::EwResize);
        assert_eq!(cursor_icon(CursorKind::Vertical), CursorIcon::NsResize);
        assert_eq!(cursor_icon(CursorKind::DiagonalNwSe), CursorIcon::NwseResize);
        assert_eq!(cursor_icon(CursorKind::DiagonalNeSw), CursorIcon::NeswResize);
    }

    #[test]
    fn test_app_starts_without_error() {
        let app = FramelessApp::new(Config::default());
        assert!(app.state.is_none());
        assert!(app.into_result().is_ok());
    }
}
