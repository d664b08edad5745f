//! 2D position type.

/// A position in the workspace frame, millimeters, no heading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    /// X position in millimeters.
    pub x: f32,
    /// Y position in millimeters.
    pub y: f32,
}

impl Point2D {
    /// Origin point (0, 0).
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
