//! Integration test utilities for frameless-chrome
//!
//! This module provides common utilities for integration testing including:
//! - A recording `HostWindow` that behaves like a simple window manager
//! - A scenario driver feeding pointer events in screen coordinates
//! - Test fixtures with generated icon files

use anyhow::Result;
use frameless_chrome::chrome::Icon;
use frameless_chrome::utils::Config;
use frameless_chrome::window::{CursorKind, FramelessWindow, HostWindow, MouseButton, PointerEvent, PointerKind};
use frameless_chrome::{Point, Rect, Size};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for integration tests
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub icon_png: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with a generated 32x32 solid blue icon
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let icon_png = temp_dir.path().join("icon.png");
        RgbaImage::from_pixel(32, 32, Rgba([0, 0, 255, 255])).save(&icon_png)?;

        Ok(Self { temp_dir, icon_png })
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Everything the chrome asked the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    SetPosition(Point),
    SetGeometry(Rect),
    SetCursor(CursorKind),
    SetVisible(bool),
    SetMinimized(bool),
    SetMaximized(bool),
    RequestRedraw,
    Close,
}

/// Host that records every call and applies it like a window manager would,
/// queueing the move/resize notifications a real platform sends back
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub frame: Rect,
    pub screen: Size,
    pub maximized: bool,
    pub minimized: bool,
    pub visible: bool,
    pub closed: bool,
    restored: Rect,
    pending_move: Option<Point>,
    pending_resize: Option<Size>,
}

impl RecordingHost {
    pub fn new(frame: Rect) -> Self {
        Self {
            calls: Vec::new(),
            frame,
            screen: Size::new(1920, 1080),
            maximized: false,
            minimized: false,
            visible: true,
            closed: false,
            restored: frame,
            pending_move: None,
            pending_resize: None,
        }
    }

    /// Last cursor the chrome asked for
    pub fn cursor(&self) -> Option<CursorKind> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::SetCursor(kind) => Some(*kind),
            _ => None,
        })
    }

    /// Every position the window was moved to
    pub fn positions(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SetPosition(origin) => Some(*origin),
                _ => None,
            })
            .collect()
    }

    /// Every geometry a resize applied
    pub fn geometries(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SetGeometry(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }

    /// Notifications the platform would deliver next
    pub fn take_notifications(&mut self) -> (Option<Point>, Option<Size>) {
        (self.pending_move.take(), self.pending_resize.take())
    }

    fn place(&mut self, frame: Rect) {
        if frame.origin != self.frame.origin {
            self.pending_move = Some(frame.origin);
        }
        if frame.size != self.frame.size {
            self.pending_resize = Some(frame.size);
        }
        self.frame = frame;
    }
}

impl HostWindow for RecordingHost {
    fn set_position(&mut self, origin: Point) {
        self.calls.push(HostCall::SetPosition(origin));
        self.place(Rect::from_parts(origin, self.frame.size));
    }

    fn set_geometry(&mut self, frame: Rect) {
        self.calls.push(HostCall::SetGeometry(frame));
        self.place(frame);
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.calls.push(HostCall::SetCursor(cursor));
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn is_minimized(&self) -> bool {
        self.minimized
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.calls.push(HostCall::SetVisible(visible));
        self.visible = visible;
    }

    fn set_minimized(&mut self, minimized: bool) {
        self.calls.push(HostCall::SetMinimized(minimized));
        self.minimized = minimized;
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.calls.push(HostCall::SetMaximized(maximized));
        if maximized == self.maximized {
            return;
        }
        self.maximized = maximized;
        if maximized {
            self.restored = self.frame;
            self.place(Rect::from_parts(Point::ZERO, self.screen));
        } else {
            let restored = self.restored;
            self.place(restored);
        }
    }

    fn request_redraw(&mut self) {
        self.calls.push(HostCall::RequestRedraw);
    }

    fn close(&mut self) {
        self.calls.push(HostCall::Close);
        self.closed = true;
    }
}

/// Drives a `FramelessWindow` with screen-coordinate pointer events
pub struct Scenario {
    pub window: FramelessWindow<RecordingHost>,
}

impl Scenario {
    /// Default-configured window at `frame`
    pub fn new(frame: Rect) -> Result<Self> {
        Self::with_config(frame, &Config::default(), None)
    }

    pub fn with_config(frame: Rect, config: &Config, icon: Option<Icon>) -> Result<Self> {
        let window = FramelessWindow::new(RecordingHost::new(frame), frame, config, icon)?;
        Ok(Self { window })
    }

    pub fn host(&self) -> &RecordingHost {
        self.window.host()
    }

    pub fn frame(&self) -> Rect {
        self.window.frame()
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.send(PointerKind::Move, x, y);
    }

    pub fn press(&mut self, x: i32, y: i32) {
        self.send(PointerKind::Press(MouseButton::Left), x, y);
    }

    pub fn release(&mut self, x: i32, y: i32) {
        self.send(PointerKind::Release(MouseButton::Left), x, y);
    }

    pub fn double_click(&mut self, x: i32, y: i32) {
        self.send(PointerKind::DoubleClick(MouseButton::Left), x, y);
    }

    /// Hover, press, move and release, like a user dragging with the mouse
    pub fn drag(&mut self, from: Point, to: Point) {
        self.move_to(from.x, from.y);
        self.press(from.x, from.y);
        self.move_to(to.x, to.y);
        self.release(to.x, to.y);
    }

    /// Click at one spot
    pub fn click(&mut self, x: i32, y: i32) {
        self.press(x, y);
        self.release(x, y);
    }

    /// Deliver the move/resize notifications the host has queued
    pub fn pump(&mut self) {
        let (moved, resized) = self.window.host_mut().take_notifications();
        if let Some(origin) = moved {
            self.window.on_moved(origin);
        }
        if let Some(size) = resized {
            self.window.on_resized(size);
        }
    }

    fn send(&mut self, kind: PointerKind, x: i32, y: i32) {
        let global = Point::new(x, y);
        let local = global - self.window.frame().origin;
        self.window.handle_pointer(PointerEvent::new(kind, local, global));
        self.pump();
    }
}
