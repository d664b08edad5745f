//! Error types for marga-plan.

use thiserror::Error;

/// Planning failure.
///
/// The first four variants are user-facing planning outcomes; `Invariant`
/// signals an internal defect and is never a recoverable condition.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Goal position lies outside the workspace rectangle.
    #[error("goal ({x:.1}, {y:.1}) is outside the workspace bounds")]
    GoalOutOfBounds { x: f32, y: f32 },

    /// Goal position lies inside the inflated obstacle space.
    #[error("goal ({x:.1}, {y:.1}) is not in free space")]
    GoalBlocked { x: f32, y: f32 },

    /// Start pose lies inside the inflated obstacle space.
    #[error("start ({x:.1}, {y:.1}) is not in free space")]
    StartBlocked { x: f32, y: f32 },

    /// The frontier was exhausted without reaching the goal.
    #[error("goal unreachable: frontier exhausted after {nodes_expanded} expansions")]
    Unreachable { nodes_expanded: usize },

    /// The configured expansion budget ran out before the goal was found.
    #[error("expansion budget exhausted after {nodes_expanded} expansions")]
    BudgetExhausted { nodes_expanded: usize },

    /// A bookkeeping invariant was violated (internal defect).
    #[error("planner invariant violated: {0}")]
    Invariant(String),

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for PlanError {
    fn from(e: toml::de::Error) -> Self {
        PlanError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
