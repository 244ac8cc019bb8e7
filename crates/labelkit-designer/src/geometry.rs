//! Percentage-space geometry for label elements.
//!
//! Element boxes are stored as percentages of the canvas width and height.
//! Angles are measured in canvas pixel space, where one percent of width and
//! one percent of height are generally not the same length, so rotation math
//! takes the canvas aspect into account.

use serde::{Deserialize, Serialize};

/// A point in percentage space (or pixel space, depending on context).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned box in percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Corner position for a resize handle.
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.left(), self.top()),
            Corner::TopRight => Point::new(self.right(), self.top()),
            Corner::BottomLeft => Point::new(self.left(), self.bottom()),
            Corner::BottomRight => Point::new(self.right(), self.bottom()),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// Resize handle positions.
///
/// Handle indices follow the designer convention 0=TL, 1=TR, 2=BL, 3=BR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn from_handle(handle: usize) -> Option<Self> {
        match handle {
            0 => Some(Self::TopLeft),
            1 => Some(Self::TopRight),
            2 => Some(Self::BottomLeft),
            3 => Some(Self::BottomRight),
            _ => None,
        }
    }

    pub fn handle(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }

    /// Whether dragging this corner moves the left edge.
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Whether dragging this corner moves the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Angle of the vector (dx, dy) in degrees.
///
/// The zero vector has angle 0.
pub fn angle_deg(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    dy.atan2(dx).to_degrees()
}

/// Rotation for a pointer relative to a rotation center.
///
/// The handle rests directly above the element, which maps to 0 degrees.
/// A pointer exactly on the center leaves the rotation at 0 rather than
/// producing the +90 offset of the atan2 convention.
pub fn rotation_from_pointer(center_px: Point, pointer_px: Point) -> f64 {
    let dx = pointer_px.x - center_px.x;
    let dy = pointer_px.y - center_px.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    angle_deg(dx, dy) + 90.0
}

/// Normalize an angle into [0, 360).
pub fn normalize_deg(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Rotate `p` around `center` by `degrees` (clockwise on screen, y down).
pub fn rotate_point(p: Point, center: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}
