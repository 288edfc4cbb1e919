//! Window chrome: the title bar and the pieces it is built from

pub mod button;
pub mod icon;
pub mod layout;
pub mod titlebar;

pub use button::{ButtonKind, ChromeButton};
pub use icon::Icon;
pub use layout::{Direction, LayoutItem, RowLayout};
pub use titlebar::{TitleBar, TitleBarElement, TitleBarIntent};
