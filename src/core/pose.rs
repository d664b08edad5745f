//! 2D pose type for robot position and heading.
//!
//! Unlike most of the robotics stack this crate works in the raster frame
//! that the pre-inflated workspace is rasterized in: X right, Y down,
//! millimeters, with headings in **degrees** counter-clockwise from the
//! X-axis, normalized to (-180, 180].

use super::math::normalize_heading;
use super::point::Point2D;

/// A robot pose in the workspace frame.
///
/// Immutable value type: position in millimeters, heading in degrees
/// normalized to (-180, 180]. A pose has no identity beyond its value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2D {
    /// X position in millimeters.
    pub x: f32,
    /// Y position in millimeters.
    pub y: f32,
    /// Heading in degrees, (-180, 180], CCW positive from the X-axis.
    pub heading: f32,
}

impl Pose2D {
    /// Create a new pose. The heading is normalized into (-180, 180].
    #[inline]
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            x,
            y,
            heading: normalize_heading(heading),
        }
    }

    /// Get the position as a [`Point2D`].
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Euclidean distance from this pose's position to a point,
    /// ignoring heading.
    #[inline]
    pub fn distance_to(self, point: &Point2D) -> f32 {
        self.position().distance(point)
    }

    /// Exact bit-pattern key for this pose.
    ///
    /// Two poses produce the same key only when their components are
    /// bitwise identical. Used for parent/primitive bookkeeping, which is
    /// keyed by the exact continuous pose, never by the coarse search
    /// bucket (see [`crate::planning::DiscreteKey`]).
    #[inline]
    pub fn key(self) -> PoseKey {
        PoseKey(self.x.to_bits(), self.y.to_bits(), self.heading.to_bits())
    }
}

/// Exact continuous-pose identity (bit patterns of x, y, heading).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoseKey(u32, u32, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_normalizes_heading() {
        let pose = Pose2D::new(10.0, 20.0, 270.0);
        assert_relative_eq!(pose.heading, -90.0);

        let pose = Pose2D::new(0.0, 0.0, -200.0);
        assert_relative_eq!(pose.heading, 160.0);
    }

    #[test]
    fn test_distance_ignores_heading() {
        let pose = Pose2D::new(0.0, 0.0, 135.0);
        assert_relative_eq!(pose.distance_to(&Point2D::new(0.0, 10.0)), 10.0);
    }

    #[test]
    fn test_key_is_exact() {
        let a = Pose2D::new(1.0, 2.0, 30.0);
        let b = Pose2D::new(1.0, 2.0, 30.0);
        assert_eq!(a.key(), b.key());

        // A pose one float step away gets a different key
        let c = Pose2D::new(f32::from_bits(1.0f32.to_bits() + 1), 2.0, 30.0);
        assert_ne!(a.key(), c.key());
    }
}
