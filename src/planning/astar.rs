//! A* search over motion primitives.
//!
//! A continuous-state variant of A*: edges are short simulated rollouts of
//! the differential-drive model under the fixed action catalog, and
//! duplicate detection runs on coarse pose buckets ([`DiscreteKey`]) while
//! parent bookkeeping stays keyed by the exact continuous pose. The
//! heuristic is the straight-line distance to the goal (heading ignored),
//! admissible because every edge is charged at least its own endpoint
//! displacement.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, info, trace};

use crate::config::PlannerConfig;
use crate::core::{Point2D, Pose2D, PoseKey};
use crate::error::{PlanError, Result};
use crate::kinematics::{DiffDriveModel, WheelRpm, action_catalog};
use crate::planning::discretize::DiscreteKey;
use crate::planning::path::{Arrival, PlanPath};
use crate::workspace::FreeSpace;

/// Frontier entry: a continuous pose and its estimated total cost.
///
/// The frontier tolerates stale duplicates; the authoritative costs live in
/// the bucket-keyed maps, never on a popped entry.
#[derive(Clone, Debug)]
struct FrontierEntry {
    pose: Pose2D,
    f_cost: f32,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Motion-primitive A* planner.
///
/// Owns the immutable configuration, the kinematic model, and the action
/// catalog. One `plan` call owns all of its search state exclusively; the
/// planner itself is stateless between calls.
pub struct PrimitivePlanner {
    config: PlannerConfig,
    model: DiffDriveModel,
    catalog: [WheelRpm; 8],
}

impl PrimitivePlanner {
    /// Create a planner from configuration.
    pub fn new(config: PlannerConfig) -> Self {
        let model = DiffDriveModel::new(&config.robot, &config.search);
        let catalog = action_catalog(config.robot.rpm_low, config.robot.rpm_high);
        Self {
            config,
            model,
            catalog,
        }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Plan a collision-free path from `start` to within the capture radius
    /// of `goal`.
    ///
    /// The endpoints are validated before any search: the goal must lie
    /// inside the workspace and in free space, and the start must be in free
    /// space. On success the returned path runs start to goal; a partial
    /// path is never returned.
    pub fn plan<W: FreeSpace>(&self, ws: &W, start: Pose2D, goal: Point2D) -> Result<PlanPath> {
        trace!(
            "plan: start=({:.1}, {:.1}, {:.1}°) goal=({:.1}, {:.1})",
            start.x, start.y, start.heading, goal.x, goal.y
        );

        if !ws.in_bounds(goal.x, goal.y) {
            debug!("rejected goal ({:.1}, {:.1}): out of bounds", goal.x, goal.y);
            return Err(PlanError::GoalOutOfBounds {
                x: goal.x,
                y: goal.y,
            });
        }
        if !ws.is_free(goal.x, goal.y) {
            debug!("rejected goal ({:.1}, {:.1}): not free", goal.x, goal.y);
            return Err(PlanError::GoalBlocked {
                x: goal.x,
                y: goal.y,
            });
        }
        if !ws.is_free(start.x, start.y) {
            debug!("rejected start ({:.1}, {:.1}): not free", start.x, start.y);
            return Err(PlanError::StartBlocked {
                x: start.x,
                y: start.y,
            });
        }

        let search = &self.config.search;

        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<DiscreteKey> = HashSet::new();
        let mut cost_to_come: HashMap<DiscreteKey, f32> = HashMap::new();
        let mut total_cost: HashMap<DiscreteKey, f32> = HashMap::new();
        let mut arrivals: HashMap<PoseKey, Arrival> = HashMap::new();

        let start_key = DiscreteKey::from_pose(&start, search);
        visited.insert(start_key);
        cost_to_come.insert(start_key, 0.0);
        total_cost.insert(start_key, 0.0);
        // The start is its own parent: the sentinel that ends reconstruction
        arrivals.insert(
            start.key(),
            Arrival {
                parent: start,
                rpm: WheelRpm::STOP,
            },
        );
        frontier.push(FrontierEntry {
            pose: start,
            f_cost: 0.0,
        });

        let mut nodes_expanded = 0usize;

        while let Some(entry) = frontier.pop() {
            nodes_expanded += 1;
            if nodes_expanded > search.max_expansions {
                debug!("expansion budget of {} exhausted", search.max_expansions);
                return Err(PlanError::BudgetExhausted { nodes_expanded });
            }

            let pose = entry.pose;

            // Goal test on the popped pose; heading is not checked
            if pose.distance_to(&goal) < search.capture_radius_mm {
                let key = DiscreteKey::from_pose(&pose, search);
                let cost = *cost_to_come
                    .get(&key)
                    .ok_or_else(|| missing_cost(key, pose))?;
                info!(
                    "goal reached: cost={:.0}mm, {} nodes expanded",
                    cost, nodes_expanded
                );
                return PlanPath::reconstruct(&arrivals, pose, start, cost, nodes_expanded);
            }

            let key = DiscreteKey::from_pose(&pose, search);
            let c2c = *cost_to_come
                .get(&key)
                .ok_or_else(|| missing_cost(key, pose))?;

            for &rpm in &self.catalog {
                let rollout = self.model.simulate(ws, pose, rpm);
                let edge_cost = rollout.distance.trunc();

                // Primitive made no usable progress (first sub-step collided
                // or the whole rollout stayed sub-millimeter)
                if rollout.pose == pose || edge_cost <= 0.0 {
                    continue;
                }
                // Clamping may have dragged the endpoint into blocked space
                if !ws.is_free(rollout.pose.x, rollout.pose.y) {
                    continue;
                }

                let new_key = DiscreteKey::from_pose(&rollout.pose, search);
                let new_c2c = c2c + edge_cost;

                if !visited.contains(&new_key) {
                    visited.insert(new_key);
                    cost_to_come.insert(new_key, new_c2c);
                    total_cost.insert(new_key, new_c2c + rollout.pose.distance_to(&goal));
                    arrivals.insert(rollout.pose.key(), Arrival { parent: pose, rpm });
                    frontier.push(FrontierEntry {
                        pose: rollout.pose,
                        f_cost: total_cost[&new_key],
                    });
                } else if new_c2c < *cost_to_come.get(&new_key).unwrap_or(&f32::INFINITY) {
                    // Strictly better route into an already-seen bucket:
                    // overwrite the bucket costs and re-queue. Stale frontier
                    // entries for this bucket stay behind and are harmless.
                    cost_to_come.insert(new_key, new_c2c);
                    total_cost.insert(new_key, new_c2c + rollout.pose.distance_to(&goal));
                    arrivals.insert(rollout.pose.key(), Arrival { parent: pose, rpm });
                    frontier.push(FrontierEntry {
                        pose: rollout.pose,
                        f_cost: total_cost[&new_key],
                    });
                }
            }
        }

        debug!("frontier exhausted after {} expansions", nodes_expanded);
        Err(PlanError::Unreachable { nodes_expanded })
    }

    /// The configuration this planner was built with.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

fn missing_cost(key: DiscreteKey, pose: Pose2D) -> PlanError {
    PlanError::Invariant(format!(
        "no cost-to-come for popped bucket {:?} (pose ({}, {}, {}))",
        key, pose.x, pose.y, pose.heading
    ))
}
