//! frameless-chrome: a borderless desktop window that draws its own title
//! bar and implements move and edge-resize by hand.
//!
//! The window state machine (`window::FramelessWindow`) is platform-agnostic
//! and talks to the real window through `window::HostWindow`; `window::run`
//! wires it to winit and a wgpu presenter.

pub mod chrome;
pub mod geometry;
pub mod paint;
pub mod renderer;
pub mod utils;
pub mod window;

pub use geometry::{Point, Rect, Size};
pub use utils::{ChromeError, Config, Result};
