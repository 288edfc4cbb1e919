//! Integer geometry shared by the window, the title bar and the painter.
//!
//! All coordinates are signed pixels. Screen ("global") and widget-local
//! positions use the same `Point` type; which one a value holds is named
//! at the call site.

use std::ops::{Add, Sub};

/// A position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle; `origin` is the top-left pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Last column inside the rectangle (inclusive right edge)
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width - 1
    }

    /// Last row inside the rectangle (inclusive bottom edge)
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height - 1
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.right()
            && point.y >= self.origin.y
            && point.y <= self.bottom()
    }

    /// Shrink by `margin` on every side; never produces a negative size
    pub fn inset(&self, margin: i32) -> Rect {
        Rect::new(
            self.origin.x + margin,
            self.origin.y + margin,
            (self.size.width - 2 * margin).max(0),
            (self.size.height - 2 * margin).max(0),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_edges() {
        let rect = Rect::new(100, 50, 400, 300);
        assert_eq!(rect.right(), 499);
        assert_eq!(rect.bottom(), 349);
        assert!(rect.contains(Point::new(499, 349)));
        assert!(!rect.contains(Point::new(500, 349)));
        assert!(!rect.contains(Point::new(99, 50)));
    }

    #[test]
    fn test_inset_clamps() {
        let rect = Rect::new(0, 0, 10, 4);
        assert_eq!(rect.inset(3), Rect::new(3, 3, 4, 0));
        assert!(rect.inset(3).is_empty());
    }

    #[test]
    fn test_point_arithmetic() {
        assert_eq!(Point::new(15, 12) - Point::new(10, 10), Point::new(5, 2));
        assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
    }
}
