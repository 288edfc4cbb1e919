//! Window management module for frameless-chrome
//!
//! This module holds the frameless window state machine, the pointer and
//! gesture plumbing it relies on, and the winit host that drives it. The
//! core talks to the platform only through the `HostWindow` trait, so it
//! runs unchanged against a real window or a test double.

use crate::geometry::{Point, Rect};

pub mod drag;
pub mod events;
pub mod frameless;
pub mod resize;
pub mod winit_window;

pub use drag::MoveGesture;
pub use events::{ClickTracker, EventHandler, MouseButton, PointerEvent, PointerKind};
pub use frameless::FramelessWindow;
pub use resize::{classify, sense, CursorKind, EdgeDistance, EdgeProximity, ResizeGesture};
pub use winit_window::{run, FramelessApp, WinitHost};

/// Window primitives the frameless chrome needs from the platform
#[cfg_attr(test, mockall::automock)]
pub trait HostWindow {
    /// Move the window so its top-left lands on `origin`
    fn set_position(&mut self, origin: Point);

    /// Move and resize the window in one step
    fn set_geometry(&mut self, frame: Rect);

    /// Change the cursor shown over the window
    fn set_cursor(&mut self, cursor: CursorKind);

    fn is_maximized(&self) -> bool;

    fn is_minimized(&self) -> bool;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn set_minimized(&mut self, minimized: bool);

    fn set_maximized(&mut self, maximized: bool);

    /// Schedule a repaint
    fn request_redraw(&mut self);

    /// Close the window and end the event loop
    fn close(&mut self);
}
