//! Title bar drag-to-move implementation
//!
//! A press on the title bar remembers where inside the bar the pointer went
//! down. Every later move asks for the bar's top-left to follow the cursor
//! at that same offset, so the window never creeps.

use crate::geometry::Point;

/// Press-to-release drag state of the title bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveGesture {
    anchor: Option<Point>,
}

impl MoveGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging from a press at `local` (title bar coordinates)
    pub fn begin(&mut self, local: Point) {
        self.anchor = Some(local);
    }

    /// Target global position of the title bar's top-left, if dragging
    pub fn update(&self, global: Point) -> Option<Point> {
        self.anchor.map(|anchor| global - anchor)
    }

    /// Stop dragging; releasing while idle is a no-op
    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }
}
