//! Pointer event handling for the frameless window
//!
//! This module converts winit events into `PointerEvent`s carrying both the
//! window-local and the global cursor position, and synthesizes double-clicks
//! since winit does not report them.

use crate::geometry::Point;
use std::time::{Duration, Instant};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent as WinitWindowEvent};

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press(MouseButton),
    Release(MouseButton),
    DoubleClick(MouseButton),
    Move,
}

/// A pointer event in both coordinate spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Relative to the window's top-left
    pub local: Point,
    /// Screen position
    pub global: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, local: Point, global: Point) -> Self {
        Self {
            kind,
            local,
            global,
        }
    }

    pub fn press(local: Point, global: Point) -> Self {
        Self::new(PointerKind::Press(MouseButton::Left), local, global)
    }

    pub fn release(local: Point, global: Point) -> Self {
        Self::new(PointerKind::Release(MouseButton::Left), local, global)
    }

    pub fn double_click(local: Point, global: Point) -> Self {
        Self::new(PointerKind::DoubleClick(MouseButton::Left), local, global)
    }

    pub fn moved(local: Point, global: Point) -> Self {
        Self::new(PointerKind::Move, local, global)
    }

    /// Same event with the local position shifted into a child's coordinates
    pub fn translated(&self, child_origin: Point) -> Self {
        Self {
            local: self.local - child_origin,
            ..*self
        }
    }

    /// Whether this is a left press or a left double-click
    pub fn is_left_press(&self) -> bool {
        matches!(
            self.kind,
            PointerKind::Press(MouseButton::Left) | PointerKind::DoubleClick(MouseButton::Left)
        )
    }
}

/// Turns presses into double-clicks when they come quickly at the same spot
#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    distance: i32,
    last_press: Option<(Instant, Point, MouseButton)>,
}

impl ClickTracker {
    pub fn new(interval: Duration, distance: u32) -> Self {
        Self {
            interval,
            distance: distance as i32,
            last_press: None,
        }
    }

    /// Classify a press at `position`; a double-click resets the tracker
    pub fn register(&mut self, button: MouseButton, position: Point, now: Instant) -> PointerKind {
        let is_double = self.last_press.is_some_and(|(at, pos, last_button)| {
            last_button == button
                && now.saturating_duration_since(at) <= self.interval
                && (position.x - pos.x).abs() <= self.distance
                && (position.y - pos.y).abs() <= self.distance
        });

        if is_double {
            self.last_press = None;
            PointerKind::DoubleClick(button)
        } else {
            self.last_press = Some((now, position, button));
            PointerKind::Press(button)
        }
    }
}

/// Event handler converting winit window events into pointer events
pub struct EventHandler {
    clicks: ClickTracker,

    /// Last known cursor position, window-local
    cursor: Point,
}

impl EventHandler {
    pub fn new(clicks: ClickTracker) -> Self {
        Self {
            clicks,
            cursor: Point::ZERO,
        }
    }

    /// Convert a winit event; `window_origin` is the window's screen position
    pub fn handle_event(&mut self, event: &WinitWindowEvent, window_origin: Point, now: Instant) -> Option<PointerEvent> {
        match event {
            WinitWindowEvent::CursorMoved { position, .. } => {
                let local = Point::new(position.x.floor() as i32, position.y.floor() as i32);
                Some(self.cursor_moved(local, window_origin))
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                let button = convert_mouse_button(*button)?;
                Some(self.button_input(button, *state, window_origin, now))
            }

            _ => None,
        }
    }

    /// The cursor is now at window-local `position`
    pub fn cursor_moved(&mut self, position: Point, window_origin: Point) -> PointerEvent {
        self.cursor = position;
        PointerEvent::moved(position, window_origin + position)
    }

    /// A button changed state at the last known cursor position
    pub fn button_input(&mut self, button: MouseButton, state: ElementState, window_origin: Point, now: Instant) -> PointerEvent {
        let global = window_origin + self.cursor;
        // Screen position: a title bar drag keeps the window-local one fixed
        let kind = match state {
            ElementState::Pressed => self.clicks.register(button, global, now),
            ElementState::Released => PointerKind::Release(button),
        };
        PointerEvent::new(kind, self.cursor, global)
    }

    /// Last known cursor position, window-local
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

/// Convert winit mouse button to our mouse button
fn convert_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ClickTracker {
        ClickTracker::new(Duration::from_millis(400), 4)
    }

    #[test]
    fn test_quick_second_press_is_double_click() {
        let mut clicks = tracker();
        let t0 = Instant::now();

        assert_eq!(
            clicks.register(MouseButton::Left, Point::new(50, 10), t0),
            PointerKind::Press(MouseButton::Left)
        );
        assert_eq!(
            clicks.register(MouseButton::Left, Point::new(52, 11), t0 + Duration::from_millis(200)),
            PointerKind::DoubleClick(MouseButton::Left)
        );
        // A third press starts over
        assert_eq!(
            clicks.register(MouseButton::Left, Point::new(52, 11), t0 + Duration::from_millis(300)),
            PointerKind::Press(MouseButton::Left)
        );
    }

    #[test]
    fn test_slow_or_distant_press_is_single() {
        let mut clicks = tracker();
        let t0 = Instant::now();

        clicks.register(MouseButton::Left, Point::new(50, 10), t0);
        assert_eq!(
            clicks.register(MouseButton::Left, Point::new(50, 10), t0 + Duration::from_millis(401)),
            PointerKind::Press(MouseButton::Left)
        );
        assert_eq!(
            clicks.register(MouseButton::Left, Point::new(60, 10), t0 + Duration::from_millis(450)),
            PointerKind::Press(MouseButton::Left)
        );
        assert_eq!(
            clicks.register(MouseButton::Right, Point::new(60, 10), t0 + Duration::from_millis(460)),
            PointerKind::Press(MouseButton::Right)
        );
    }

    #[test]
    fn test_regrab_after_drag_is_not_double_click() {
        let mut events = EventHandler::new(tracker());
        let t0 = Instant::now();
        let before = Point::new(100, 50);
        let after = Point::new(400, 50);

        events.cursor_moved(Point::new(50, 10), before);
        let first = events.button_input(MouseButton::Left, ElementState::Pressed, before, t0);
        assert_eq!(first.kind, PointerKind::Press(MouseButton::Left));
        assert_eq!(first.global, Point::new(150, 60));

        // The window followed the cursor 300px to the right
        events.button_input(
            MouseButton::Left,
            ElementState::Released,
            after,
            t0 + Duration::from_millis(300),
        );
        let second = events.button_input(
            MouseButton::Left,
            ElementState::Pressed,
            after,
            t0 + Duration::from_millis(350),
        );
        assert_eq!(second.kind, PointerKind::Press(MouseButton::Left));
        assert_eq!(second.local, Point::new(50, 10));
        assert_eq!(second.global, Point::new(450, 60));

        // Pressing again at the same screen spot is a double-click
        let third = events.button_input(
            MouseButton::Left,
            ElementState::Pressed,
            after,
            t0 + Duration::from_millis(450),
        );
        assert_eq!(third.kind, PointerKind::DoubleClick(MouseButton::Left));
    }

    #[test]
    fn test_translated_keeps_global() {
        let event = PointerEvent::press(Point::new(20, 8), Point::new(120, 58));
        let child = event.translated(Point::new(3, 3));
        assert_eq!(child.local, Point::new(17, 5));
        assert_eq!(child.global, Point::new(120, 58));
        assert!(child.is_left_press());
        assert!(!PointerEvent::moved(Point::ZERO, Point::ZERO).is_left_press());
    }

    #[test]
    fn test_mouse_button_conversion() {
        assert_eq!(convert_mouse_button(WinitMouseButton::Left), Some(MouseButton::Left));
        assert_eq!(convert_mouse_button(WinitMouseButton::Back), None);
    }
}
