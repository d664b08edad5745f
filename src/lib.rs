//! # Marga-Plan: Motion-Primitive Path Planner
//!
//! An offline path planner for nonholonomic differential-drive robots.
//! Instead of searching a unit-step grid graph, the planner expands short
//! simulated rollouts of the robot's kinematic model under a fixed set of
//! wheel-speed primitives, so every edge in the search tree is a motion the
//! robot can actually execute.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_plan::{GridCanvas, PlannerConfig, Point2D, Pose2D, PrimitivePlanner};
//!
//! // 1000mm x 200mm workspace, obstacles already inflated by clearance
//! let canvas = GridCanvas::open(1000, 200, 0);
//!
//! let planner = PrimitivePlanner::new(PlannerConfig::default());
//! let path = planner
//!     .plan(&canvas, Pose2D::new(30.0, 30.0, 0.0), Point2D::new(970.0, 30.0))
//!     .expect("goal is reachable");
//!
//! for step in &path.steps {
//!     println!("({:.1}, {:.1}, {:.1}°) <- rpm ({}, {})",
//!         step.pose.x, step.pose.y, step.pose.heading,
//!         step.rpm.left, step.rpm.right);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! The workspace frame is a raster frame: X right, Y down, millimeters.
//! Headings are degrees in (-180, 180], counter-clockwise positive from the
//! X-axis. See [`core::Pose2D`].
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`Pose2D`], [`Point2D`], heading math)
//! - [`config`]: immutable planner configuration (robot geometry, search
//!   thresholds), TOML-loadable
//! - [`workspace`]: the [`FreeSpace`] oracle trait and the [`GridCanvas`]
//!   reference implementation
//! - [`kinematics`]: wheel-speed primitives and the sub-stepped
//!   differential-drive rollout model
//! - [`planning`]: the A* search engine over motion primitives and path
//!   reconstruction
//!
//! ## Data Flow
//!
//! ```text
//! FreeSpace oracle -> DiffDriveModel rollouts -> PrimitivePlanner (A*)
//!                  -> PlanPath (pose + wheel-rpm steps, start to goal)
//! ```
//!
//! The emitted [`PlanPath`] is the sole artifact handed to a downstream
//! trajectory-tracking controller; no transport, rendering, or map building
//! lives in this crate.

pub mod config;
pub mod core;
pub mod error;
pub mod kinematics;
pub mod planning;
pub mod workspace;

pub use config::{PlannerConfig, RobotConfig, SearchConfig};
pub use core::{Point2D, Pose2D, normalize_heading};
pub use error::{PlanError, Result};
pub use kinematics::{DiffDriveModel, Rollout, WheelRpm, action_catalog};
pub use planning::{DiscreteKey, PlanPath, PlanStep, PrimitivePlanner};
pub use workspace::{FreeSpace, GridCanvas};
