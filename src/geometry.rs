// Integer geometry for cloud placement.
//
// Rectangles are top-left anchored. Centers use integer division, which
// truncates toward zero, so a 3x3 rectangle at (-3, -3) has center (-2, -2).

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Coordinate along the given axis.
    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub location: Point,
    pub size: Size,
}

impl Rectangle {
    pub fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    /// Rectangle of `size` whose center lands on `anchor`.
    pub fn centered_at(anchor: Point, size: Size) -> Self {
        let location = Point {
            x: anchor.x - size.width / 2,
            y: anchor.y - size.height / 2,
        };
        Self { location, size }
    }

    pub fn left(&self) -> i32 { self.location.x }
    pub fn top(&self) -> i32 { self.location.y }
    pub fn right(&self) -> i32 { self.location.x + self.size.width }
    pub fn bottom(&self) -> i32 { self.location.y + self.size.height }

    pub fn center(&self) -> Point {
        Point {
            x: self.location.x + self.size.width / 2,
            y: self.location.y + self.size.height / 2,
        }
    }

    /// Copy of this rectangle moved by one unit along `axis`.
    /// Only the sign of `sign` matters.
    pub fn shifted_by_axis(&self, sign: i32, axis: Axis) -> Rectangle {
        let step = sign.signum();
        let location = match axis {
            Axis::Horizontal => Point { x: self.location.x + step, y: self.location.y },
            Axis::Vertical => Point { x: self.location.x, y: self.location.y + step },
        };
        Rectangle { location, size: self.size }
    }

    /// Strict overlap: rectangles sharing only an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rectangle {
            location: Point { x: x0, y: y0 },
            size: Size { width: x1 - x0, height: y1 - y0 },
        }
    }
}
