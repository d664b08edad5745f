//! Plan reconstruction and the emitted path type.

use std::collections::HashMap;

use crate::core::{Pose2D, PoseKey};
use crate::error::{PlanError, Result};
use crate::kinematics::WheelRpm;

/// How a continuous pose was reached: its parent pose and the primitive
/// applied at the parent. Keyed by the exact pose bits, never by the coarse
/// search bucket.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Arrival {
    pub parent: Pose2D,
    pub rpm: WheelRpm,
}

/// One step of a plan: a pose and the primitive that was applied to
/// *arrive* at it. The start step carries [`WheelRpm::STOP`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanStep {
    pub pose: Pose2D,
    pub rpm: WheelRpm,
}

/// An ordered start-to-goal plan.
#[derive(Clone, Debug)]
pub struct PlanPath {
    /// Steps in execution order; the first step is the start pose.
    pub steps: Vec<PlanStep>,
    /// Accumulated edge cost of the achieved goal node, in millimeters.
    pub cost: f32,
    /// Nodes expanded by the search that produced this plan.
    pub nodes_expanded: usize,
}

impl PlanPath {
    /// Number of steps (including the start step).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Geometric path length in millimeters (sum of straight-line step
    /// displacements; the simulated arcs are slightly longer).
    pub fn length_mm(&self) -> f32 {
        self.steps
            .windows(2)
            .map(|pair| pair[0].pose.distance_to(&pair[1].pose.position()))
            .sum()
    }

    /// Walk the parent chain from the achieved goal pose back to the start
    /// and emit the steps in execution order.
    ///
    /// The start pose is its own parent, which terminates the walk. A chain
    /// that misses an arrival entry or fails to reach the start within
    /// `arrivals.len()` hops is a corrupted parent map: the reconstruction
    /// fails fast rather than emit a partial path.
    pub(crate) fn reconstruct(
        arrivals: &HashMap<PoseKey, Arrival>,
        achieved: Pose2D,
        start: Pose2D,
        cost: f32,
        nodes_expanded: usize,
    ) -> Result<Self> {
        let mut steps = Vec::new();
        let mut current = achieved;

        while current != start {
            let arrival = arrivals.get(&current.key()).ok_or_else(|| {
                PlanError::Invariant(format!(
                    "no arrival entry for pose ({}, {}, {})",
                    current.x, current.y, current.heading
                ))
            })?;
            steps.push(PlanStep {
                pose: current,
                rpm: arrival.rpm,
            });
            current = arrival.parent;

            if steps.len() > arrivals.len() {
                return Err(PlanError::Invariant(
                    "parent chain does not terminate at the start pose".into(),
                ));
            }
        }

        steps.push(PlanStep {
            pose: start,
            rpm: WheelRpm::STOP,
        });
        steps.reverse();

        Ok(Self {
            steps,
            cost,
            nodes_expanded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arrival(parent: Pose2D, left: f32, right: f32) -> Arrival {
        Arrival {
            parent,
            rpm: WheelRpm::new(left, right),
        }
    }

    #[test]
    fn test_reconstruct_orders_start_to_goal() {
        let start = Pose2D::new(0.0, 0.0, 0.0);
        let mid = Pose2D::new(50.0, 0.0, 0.0);
        let end = Pose2D::new(100.0, 10.0, 15.0);

        let mut arrivals = HashMap::new();
        arrivals.insert(start.key(), arrival(start, 0.0, 0.0));
        arrivals.insert(mid.key(), arrival(start, 100.0, 100.0));
        arrivals.insert(end.key(), arrival(mid, 50.0, 100.0));

        let path = PlanPath::reconstruct(&arrivals, end, start, 101.0, 7).unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(path.steps[0].pose, start);
        assert_eq!(path.steps[0].rpm, WheelRpm::STOP);
        assert_eq!(path.steps[1].rpm, WheelRpm::new(100.0, 100.0));
        assert_eq!(path.steps[2].pose, end);
        assert_relative_eq!(path.cost, 101.0);
        assert_eq!(path.nodes_expanded, 7);
    }

    #[test]
    fn test_reconstruct_start_equals_goal() {
        let start = Pose2D::new(0.0, 0.0, 0.0);
        let mut arrivals = HashMap::new();
        arrivals.insert(start.key(), arrival(start, 0.0, 0.0));

        let path = PlanPath::reconstruct(&arrivals, start, start, 0.0, 1).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.steps[0].rpm, WheelRpm::STOP);
    }

    #[test]
    fn test_reconstruct_detects_cycle() {
        let start = Pose2D::new(0.0, 0.0, 0.0);
        let a = Pose2D::new(10.0, 0.0, 0.0);
        let b = Pose2D::new(20.0, 0.0, 0.0);

        // a and b point at each other, never reaching start
        let mut arrivals = HashMap::new();
        arrivals.insert(a.key(), arrival(b, 50.0, 50.0));
        arrivals.insert(b.key(), arrival(a, 50.0, 50.0));

        let err = PlanPath::reconstruct(&arrivals, a, start, 0.0, 1).unwrap_err();
        assert!(matches!(err, PlanError::Invariant(_)));
    }

    #[test]
    fn test_reconstruct_detects_missing_entry() {
        let start = Pose2D::new(0.0, 0.0, 0.0);
        let orphan = Pose2D::new(10.0, 0.0, 0.0);

        let arrivals = HashMap::new();
        let err = PlanPath::reconstruct(&arrivals, orphan, start, 0.0, 1).unwrap_err();
        assert!(matches!(err, PlanError::Invariant(_)));
    }

    #[test]
    fn test_length_mm() {
        let start = Pose2D::new(0.0, 0.0, 0.0);
        let mid = Pose2D::new(30.0, 40.0, 0.0);
        let end = Pose2D::new(30.0, 100.0, 0.0);

        let mut arrivals = HashMap::new();
        arrivals.insert(mid.key(), arrival(start, 50.0, 50.0));
        arrivals.insert(end.key(), arrival(mid, 50.0, 50.0));

        let path = PlanPath::reconstruct(&arrivals, end, start, 110.0, 3).unwrap();
        assert_relative_eq!(path.length_mm(), 110.0);
    }
}
