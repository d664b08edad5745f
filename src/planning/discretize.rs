//! Coarse pose bucketing for duplicate detection.
//!
//! The search keeps its visited/cost bookkeeping per bucket, not per
//! continuous pose; collapsing many nearby poses into one bucket is the
//! approximation that keeps the search space finite. Buckets are never used
//! for any geometric computation.

use crate::config::SearchConfig;
use crate::core::{Pose2D, round_half};

/// Integer bucket identity of a continuous pose.
///
/// Many poses map to the same key by design. Derived by independently
/// quantizing x and y by the distance threshold and the heading by the
/// angular threshold, after rounding each component to the nearest half
/// unit to absorb float jitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiscreteKey {
    pub x: i32,
    pub y: i32,
    pub heading: i32,
}

impl DiscreteKey {
    /// Bucket a pose using the configured thresholds. Pure function.
    pub fn from_pose(pose: &Pose2D, search: &SearchConfig) -> Self {
        Self {
            x: bucket(pose.x, search.distance_threshold_mm),
            y: bucket(pose.y, search.distance_threshold_mm),
            heading: bucket(pose.heading, search.angular_threshold_deg),
        }
    }
}

#[inline]
fn bucket(value: f32, threshold: i32) -> i32 {
    round_half(value).trunc() as i32 / threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> SearchConfig {
        SearchConfig::default()
    }

    #[test]
    fn test_nearby_poses_share_a_bucket() {
        let a = Pose2D::new(30.0, 30.0, 0.0);
        let b = Pose2D::new(35.5, 32.0, 10.0);
        assert_eq!(
            DiscreteKey::from_pose(&a, &search()),
            DiscreteKey::from_pose(&b, &search())
        );
    }

    #[test]
    fn test_threshold_crossing_changes_bucket() {
        let a = Pose2D::new(39.0, 30.0, 0.0);
        let b = Pose2D::new(41.0, 30.0, 0.0);
        assert_ne!(
            DiscreteKey::from_pose(&a, &search()).x,
            DiscreteKey::from_pose(&b, &search()).x
        );
    }

    #[test]
    fn test_half_rounding_absorbs_jitter() {
        // 19.999 and 20.001 both half-round to 20.0
        let a = Pose2D::new(19.999, 50.0, 0.0);
        let b = Pose2D::new(20.001, 50.0, 0.0);
        assert_eq!(
            DiscreteKey::from_pose(&a, &search()),
            DiscreteKey::from_pose(&b, &search())
        );
        assert_eq!(DiscreteKey::from_pose(&a, &search()).x, 1);
    }

    #[test]
    fn test_heading_bucketing() {
        let k = DiscreteKey::from_pose(&Pose2D::new(0.0, 0.0, 95.0), &search());
        assert_eq!(k.heading, 3);
        let k = DiscreteKey::from_pose(&Pose2D::new(0.0, 0.0, -95.0), &search());
        assert_eq!(k.heading, -3);
    }
}
