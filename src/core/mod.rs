//! Core types for the marga-plan planner.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Pose2D`]: robot pose (position + heading) in the workspace frame
//! - [`PoseKey`]: exact bit-pattern identity of a continuous pose
//! - [`Point2D`]: a position without heading
//! - Heading math: [`normalize_heading`], [`round_half`]

mod math;
mod point;
mod pose;

pub use math::{normalize_heading, round_half};
pub use point::Point2D;
pub use pose::{Pose2D, PoseKey};
