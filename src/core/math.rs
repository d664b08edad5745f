//! Scalar helpers for heading and raster math.

/// Normalize a heading in degrees into (-180, 180].
///
/// A single wrap correction is enough: one motion-primitive rollout can
/// never change the heading by more than a full turn.
#[inline]
pub fn normalize_heading(heading: f32) -> f32 {
    if heading > 180.0 {
        heading - 360.0
    } else if heading <= -180.0 {
        heading + 360.0
    } else {
        heading
    }
}

/// Round a value to the nearest half unit.
///
/// Applied before any integer bucketing or raster lookup so that poses a
/// float-jitter apart land on the same cell.
#[inline]
pub fn round_half(value: f32) -> f32 {
    (value * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_in_range_unchanged() {
        assert_relative_eq!(normalize_heading(0.0), 0.0);
        assert_relative_eq!(normalize_heading(179.9), 179.9);
        assert_relative_eq!(normalize_heading(-179.9), -179.9);
        assert_relative_eq!(normalize_heading(180.0), 180.0);
    }

    #[test]
    fn test_normalize_wraps() {
        assert_relative_eq!(normalize_heading(185.0), -175.0);
        assert_relative_eq!(normalize_heading(-185.0), 175.0);
        // -180 is excluded from the range, wraps to +180
        assert_relative_eq!(normalize_heading(-180.0), 180.0);
    }

    #[test]
    fn test_round_half() {
        assert_relative_eq!(round_half(19.99), 20.0);
        assert_relative_eq!(round_half(20.24), 20.0);
        assert_relative_eq!(round_half(20.26), 20.5);
        assert_relative_eq!(round_half(-0.3), -0.5);
    }
}
