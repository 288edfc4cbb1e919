//! Edge resize handling for frameless windows
//!
//! This module senses when the cursor is near a window edge, picks the
//! matching resize cursor, and turns cursor travel into new window geometry
//! for an active resize gesture.

use crate::geometry::{Point, Rect};

/// Which edges the cursor is currently near; several may be set at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct EdgeProximity {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgeProximity {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    pub const fn new(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Whether any edge is near
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    /// Resize cursor for this combination of edges
    pub fn classify(&self) -> CursorKind {
        match (self.left, self.right, self.top, self.bottom) {
            (true, false, true, false) | (false, true, false, true) => CursorKind::DiagonalNwSe,
            (true, false, false, true) | (false, true, true, false) => CursorKind::DiagonalNeSw,
            (true, false, false, false) | (false, true, false, false) => CursorKind::Horizontal,
            (false, false, true, false) | (false, false, false, true) => CursorKind::Vertical,
            _ => CursorKind::Arrow,
        }
    }
}

/// Signed offset of the cursor from each edge (cursor minus edge)
///
/// Right and bottom edges are the last pixel column and row inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct EdgeDistance {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Cursor shapes the window chrome asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CursorKind {
    #[default]
    Arrow,
    Horizontal,
    Vertical,
    DiagonalNwSe,
    DiagonalNeSw,
}

/// Proximity and distance of a global cursor position to `frame`'s edges
pub fn sense(global: Point, frame: Rect, edge_sense: i32) -> (EdgeProximity, EdgeDistance) {
    let distance = EdgeDistance {
        left: global.x - frame.x(),
        right: global.x - frame.right(),
        top: global.y - frame.y(),
        bottom: global.y - frame.bottom(),
    };

    let near = |d: i32| d.abs() < edge_sense;
    let proximity = EdgeProximity::new(
        near(distance.left),
        near(distance.right),
        near(distance.top),
        near(distance.bottom),
    );

    (proximity, distance)
}

/// Resize cursor for a proximity tuple
pub fn classify(proximity: EdgeProximity) -> CursorKind {
    proximity.classify()
}

/// An in-progress edge resize, locked to the edges sensed at press time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGesture {
    anchor_proximity: EdgeProximity,
    anchor_distance: EdgeDistance,
}

impl ResizeGesture {
    pub fn new(anchor_proximity: EdgeProximity, anchor_distance: EdgeDistance) -> Self {
        Self {
            anchor_proximity,
            anchor_distance,
        }
    }

    pub fn proximity(&self) -> EdgeProximity {
        self.anchor_proximity
    }

    pub fn anchor(&self) -> EdgeDistance {
        self.anchor_distance
    }

    /// Per-edge movement since the anchor, zero for edges not being dragged
    pub fn deltas(&self, current: EdgeDistance) -> EdgeDistance {
        let p = self.anchor_proximity;
        let a = self.anchor_distance;
        let masked = |flag: bool, cur: i32, anchor: i32| if flag { cur - anchor } else { 0 };

        EdgeDistance {
            left: masked(p.left, current.left, a.left),
            right: masked(p.right, current.right, a.right),
            top: masked(p.top, current.top, a.top),
            bottom: masked(p.bottom, current.bottom, a.bottom),
        }
    }

    /// Geometry `frame` would take with the cursor at `current`, unconstrained
    pub fn resized_frame(&self, frame: Rect, current: EdgeDistance) -> Rect {
        let d = self.deltas(current);
        Rect::new(
            frame.x() + d.left,
            frame.y() + d.top,
            frame.width() - d.left + d.right,
            frame.height() - d.top + d.bottom,
        )
    }
}
