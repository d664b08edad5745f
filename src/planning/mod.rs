//! Motion-primitive path planning.
//!
//! - [`astar`]: the A* search engine over kinematic rollouts
//! - [`discretize`]: coarse pose bucketing for duplicate detection
//! - [`path`]: plan reconstruction and the emitted path type
//!
//! ```rust,ignore
//! use marga_plan::{PlannerConfig, PrimitivePlanner, Pose2D, Point2D};
//!
//! let planner = PrimitivePlanner::new(PlannerConfig::default());
//! let path = planner.plan(&canvas, start, goal)?;
//! println!("{} steps, cost {:.0}mm", path.len(), path.cost);
//! ```

pub mod astar;
pub mod discretize;
pub mod path;

pub use astar::PrimitivePlanner;
pub use discretize::DiscreteKey;
pub use path::{PlanPath, PlanStep};
