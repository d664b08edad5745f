//! Configuration for marga-plan.
//!
//! All tunables live in one immutable structure handed to the planner at
//! construction; nothing is read from ambient global state.

use crate::error::{PlanError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure.
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Robot physical parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct RobotConfig {
    /// Wheel radius in millimeters (default: 33.0)
    #[serde(default = "default_wheel_radius")]
    pub wheel_radius_mm: f32,

    /// Distance between wheels in millimeters (default: 287.0)
    #[serde(default = "default_wheel_base")]
    pub wheel_base_mm: f32,

    /// Robot body radius in millimeters, used by map builders to inflate
    /// obstacles (default: 220.0)
    #[serde(default = "default_robot_radius")]
    pub robot_radius_mm: f32,

    /// Extra clearance beyond the robot radius in millimeters (default: 10.0)
    #[serde(default = "default_safety_margin")]
    pub safety_margin_mm: f32,

    /// Low nominal wheel speed in rpm (default: 50.0)
    #[serde(default = "default_rpm_low")]
    pub rpm_low: f32,

    /// High nominal wheel speed in rpm (default: 100.0)
    #[serde(default = "default_rpm_high")]
    pub rpm_high: f32,
}

/// Search thresholds and rollout timing.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchConfig {
    /// Position bucket size for duplicate detection in millimeters
    /// (default: 20)
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold_mm: i32,

    /// Heading bucket size for duplicate detection in degrees (default: 30)
    #[serde(default = "default_angular_threshold")]
    pub angular_threshold_deg: i32,

    /// Distance from goal within which the goal counts as reached, in
    /// millimeters; heading is not checked (default: 10.0)
    #[serde(default = "default_capture_radius")]
    pub capture_radius_mm: f32,

    /// Euler integration sub-step in seconds (default: 0.1)
    #[serde(default = "default_time_step")]
    pub time_step_s: f32,

    /// Total rollout duration per primitive in seconds (default: 0.3)
    #[serde(default = "default_horizon")]
    pub horizon_s: f32,

    /// Maximum node expansions before giving up (default: 2,000,000)
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

impl RobotConfig {
    /// Total obstacle inflation distance: robot radius plus safety margin.
    pub fn clearance_mm(&self) -> f32 {
        self.robot_radius_mm + self.safety_margin_mm
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            wheel_radius_mm: default_wheel_radius(),
            wheel_base_mm: default_wheel_base(),
            robot_radius_mm: default_robot_radius(),
            safety_margin_mm: default_safety_margin(),
            rpm_low: default_rpm_low(),
            rpm_high: default_rpm_high(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            distance_threshold_mm: default_distance_threshold(),
            angular_threshold_deg: default_angular_threshold(),
            capture_radius_mm: default_capture_radius(),
            time_step_s: default_time_step(),
            horizon_s: default_horizon(),
            max_expansions: default_max_expansions(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            robot: RobotConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

// Default value functions
fn default_wheel_radius() -> f32 {
    33.0
}
fn default_wheel_base() -> f32 {
    287.0
}
fn default_robot_radius() -> f32 {
    220.0
}
fn default_safety_margin() -> f32 {
    10.0
}
fn default_rpm_low() -> f32 {
    50.0
}
fn default_rpm_high() -> f32 {
    100.0
}
fn default_distance_threshold() -> i32 {
    20
}
fn default_angular_threshold() -> i32 {
    30
}
fn default_capture_radius() -> f32 {
    10.0
}
fn default_time_step() -> f32 {
    0.1
}
fn default_horizon() -> f32 {
    0.3
}
fn default_max_expansions() -> usize {
    2_000_000
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlanError::Config(format!("Failed to read config file: {}", e)))?;
        let config: PlannerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
