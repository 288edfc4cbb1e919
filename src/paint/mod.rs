//! Painting primitives for the window chrome
//!
//! Everything the chrome draws goes through a CPU `Canvas`: rounded
//! silhouettes from `RoundedPath`, solid rectangles, the title icon and
//! bitmap text. The renderer only ever presents the finished canvas.

pub mod canvas;
pub mod color;
pub mod font;
pub mod path;

pub use canvas::Canvas;
pub use color::Color;
pub use path::{CornerRadii, Disk, RoundedPath};
