//! Differential-drive kinematics and motion-primitive rollouts.
//!
//! A motion primitive is a fixed pair of wheel speeds applied for a fixed
//! duration. [`DiffDriveModel::simulate`] integrates the standard
//! differential-drive equations in fixed Euler sub-steps, collision-checking
//! against the free-space oracle after every sub-step, and returns the last
//! known-free pose together with the distance actually traveled. Edges in
//! the planner's search tree are exactly these rollouts.

use crate::config::{RobotConfig, SearchConfig};
use crate::core::Pose2D;
use crate::workspace::FreeSpace;

/// rpm -> rad/s
const RPM_TO_RAD_S: f32 = 2.0 * std::f32::consts::PI / 60.0;

/// A wheel-speed action primitive: left and right wheel rates in rpm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelRpm {
    pub left: f32,
    pub right: f32,
}

impl WheelRpm {
    /// Both wheels stopped. Sentinel primitive attached to the start step
    /// of a plan, which no rollout produced.
    pub const STOP: WheelRpm = WheelRpm {
        left: 0.0,
        right: 0.0,
    };

    /// Create a new primitive.
    #[inline]
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }
}

/// The fixed eight-primitive action catalog over two nominal rpm levels:
/// pivot-ish turns on each level, straights on each level, and the two
/// mixed-speed arcs.
pub fn action_catalog(rpm_low: f32, rpm_high: f32) -> [WheelRpm; 8] {
    [
        WheelRpm::new(0.0, rpm_low),
        WheelRpm::new(rpm_low, 0.0),
        WheelRpm::new(rpm_low, rpm_low),
        WheelRpm::new(0.0, rpm_high),
        WheelRpm::new(rpm_high, 0.0),
        WheelRpm::new(rpm_high, rpm_high),
        WheelRpm::new(rpm_low, rpm_high),
        WheelRpm::new(rpm_high, rpm_low),
    ]
}

/// Result of simulating one primitive from one pose.
///
/// `pose` is the last known-free pose reached (heading normalized, position
/// clamped to the workspace rectangle) and `distance` the Euclidean path
/// length accumulated over the free sub-steps. When `collided` is set the
/// rollout stopped before the nominal horizon and the edge is shorter than
/// usual; a collision on the very first sub-step yields the start pose and
/// zero distance.
#[derive(Clone, Copy, Debug)]
pub struct Rollout {
    pub pose: Pose2D,
    pub distance: f32,
    pub collided: bool,
}

/// Forward-simulation model for a differential-drive robot.
#[derive(Clone, Debug)]
pub struct DiffDriveModel {
    wheel_radius: f32,
    wheel_base: f32,
    time_step: f32,
    sub_steps: usize,
}

impl DiffDriveModel {
    /// Create a model from robot geometry and rollout timing.
    pub fn new(robot: &RobotConfig, search: &SearchConfig) -> Self {
        Self {
            wheel_radius: robot.wheel_radius_mm,
            wheel_base: robot.wheel_base_mm,
            time_step: search.time_step_s,
            sub_steps: (search.horizon_s / search.time_step_s).round() as usize,
        }
    }

    /// Simulate one primitive from `start` for the configured horizon.
    ///
    /// Kinematics per sub-step of duration dt:
    /// - linear speed `v = r/2 * (wl + wr)`
    /// - heading rate `dtheta = r/L * (wr - wl)`
    ///
    /// After each sub-step the new position is checked against the oracle;
    /// on the first violation the rollout reverts to the previous sub-pose
    /// and stops.
    pub fn simulate<W: FreeSpace>(&self, ws: &W, start: Pose2D, rpm: WheelRpm) -> Rollout {
        let wl = rpm.left * RPM_TO_RAD_S;
        let wr = rpm.right * RPM_TO_RAD_S;
        let speed = self.wheel_radius / 2.0 * (wl + wr);
        let heading_rate = (self.wheel_radius / self.wheel_base * (wr - wl)).to_degrees();

        let (mut x, mut y, mut heading) = (start.x, start.y, start.heading);
        let mut distance = 0.0f32;
        let mut collided = false;

        for _ in 0..self.sub_steps {
            let theta = heading.to_radians();
            let dx = speed * theta.cos() * self.time_step;
            let dy = speed * theta.sin() * self.time_step;

            let (x_prev, y_prev, heading_prev) = (x, y, heading);
            x += dx;
            y += dy;
            heading += heading_rate * self.time_step;

            if ws.is_free(x, y) {
                distance += (dx * dx + dy * dy).sqrt();
            } else {
                x = x_prev;
                y = y_prev;
                heading = heading_prev;
                collided = true;
                break;
            }
        }

        Rollout {
            // Pose2D::new normalizes the heading into (-180, 180]
            pose: Pose2D::new(x.clamp(0.0, ws.width()), y.clamp(0.0, ws.height()), heading),
            distance,
            collided,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::workspace::GridCanvas;
    use approx::assert_relative_eq;

    fn model() -> DiffDriveModel {
        let config = PlannerConfig::default();
        DiffDriveModel::new(&config.robot, &config.search)
    }

    #[test]
    fn test_catalog_has_eight_primitives() {
        let catalog = action_catalog(50.0, 100.0);
        assert_eq!(catalog.len(), 8);
        assert!(catalog.contains(&WheelRpm::new(50.0, 100.0)));
        assert!(catalog.contains(&WheelRpm::new(100.0, 100.0)));
        assert!(!catalog.contains(&WheelRpm::STOP));
    }

    #[test]
    fn test_straight_rollout() {
        let canvas = GridCanvas::open(2000, 2000, 0);
        let start = Pose2D::new(500.0, 500.0, 0.0);
        let rollout = model().simulate(&canvas, start, WheelRpm::new(50.0, 50.0));

        // v = r/2 * 2w = 33 * 2*pi*50/60 = 172.8 mm/s over 0.3 s
        assert!(!rollout.collided);
        assert_relative_eq!(rollout.pose.heading, 0.0);
        assert_relative_eq!(rollout.pose.y, 500.0, epsilon = 1e-3);
        assert_relative_eq!(rollout.distance, 51.8, epsilon = 0.1);
        assert_relative_eq!(rollout.pose.x, 500.0 + rollout.distance, epsilon = 1e-3);
    }

    #[test]
    fn test_single_wheel_turns() {
        let canvas = GridCanvas::open(2000, 2000, 0);
        let start = Pose2D::new(500.0, 500.0, 0.0);

        let right_only = model().simulate(&canvas, start, WheelRpm::new(0.0, 50.0));
        assert!(right_only.pose.heading > 0.0);

        let left_only = model().simulate(&canvas, start, WheelRpm::new(50.0, 0.0));
        assert!(left_only.pose.heading < 0.0);

        // Symmetric arcs turn by the same magnitude
        assert_relative_eq!(
            right_only.pose.heading,
            -left_only.pose.heading,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_distance_bounds_displacement() {
        let canvas = GridCanvas::open(2000, 2000, 0);
        let start = Pose2D::new(500.0, 500.0, 20.0);

        for rpm in action_catalog(50.0, 100.0) {
            let rollout = model().simulate(&canvas, start, rpm);
            let displacement = start.distance_to(&rollout.pose.position());
            // Edge cost must never undercut the straight-line displacement,
            // or the Euclidean heuristic loses admissibility.
            assert!(rollout.distance + 1e-3 >= displacement);
        }
    }

    #[test]
    fn test_collision_reverts_to_last_free_pose() {
        // Wall right in front of the robot
        let mut canvas = GridCanvas::open(2000, 2000, 10);
        canvas.block_rect(550, 560, 0, 2000);

        let start = Pose2D::new(500.0, 1000.0, 0.0);
        let rollout = model().simulate(&canvas, start, WheelRpm::new(100.0, 100.0));

        assert!(rollout.collided);
        // First sub-step lands ~34.6mm ahead (free), the second would cross
        // into the inflated wall at 540
        assert!(rollout.pose.x > 500.0);
        assert!(rollout.pose.x < 540.0);
        assert!(rollout.distance < 40.0);
        assert!(canvas.is_free(rollout.pose.x, rollout.pose.y));
    }

    #[test]
    fn test_immediate_collision_yields_zero_edge() {
        let mut canvas = GridCanvas::open(2000, 2000, 10);
        canvas.block_rect(520, 560, 0, 2000);

        let start = Pose2D::new(500.0, 1000.0, 0.0);
        let rollout = model().simulate(&canvas, start, WheelRpm::new(100.0, 100.0));

        assert!(rollout.collided);
        assert_eq!(rollout.pose, start);
        assert_relative_eq!(rollout.distance, 0.0);
    }

    #[test]
    fn test_heading_stays_normalized() {
        let canvas = GridCanvas::open(2000, 2000, 0);
        let mut pose = Pose2D::new(1000.0, 1000.0, 170.0);
        // Keep arcing left until the heading wraps
        for _ in 0..20 {
            let rollout = model().simulate(&canvas, pose, WheelRpm::new(0.0, 100.0));
            pose = rollout.pose;
            assert!(pose.heading > -180.0 && pose.heading <= 180.0);
        }
    }
}
