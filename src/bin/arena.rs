//! Arena demo: plan across the 6m x 2m competition workspace.
//!
//! Builds the rasterized arena (two rectangular pillars and one circular
//! obstacle, all inflated by robot radius + safety margin), plans from the
//! fixed start pose on the left to a goal in the rightmost strip, and prints
//! the wheel-speed schedule.
//!
//! Usage: `arena [config.toml] --goal <x> <y>`
//! Goal coordinates are millimeters relative to the bottom-left corner of
//! the arena, as on the printed course map.

use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};

use marga_plan::{GridCanvas, PlanError, PlannerConfig, Point2D, Pose2D, PrimitivePlanner};

const ARENA_WIDTH: usize = 6000;
const ARENA_HEIGHT: usize = 2000;
/// Goals must lie in the rightmost strip of the arena (course rule).
const GOAL_STRIP_MM: f32 = 250.0;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_plan=info".parse().unwrap())
                .add_directive("arena=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = if args.len() > 1 && !args[1].starts_with("--") {
        let config_path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", config_path);
        match PlannerConfig::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    } else if Path::new("marga.toml").exists() {
        info!("Loading configuration from marga.toml");
        match PlannerConfig::load(Path::new("marga.toml")) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        info!("Using default configuration");
        PlannerConfig::default()
    };

    let goal = match parse_goal(&args) {
        Some(goal) => goal,
        None => {
            error!("Usage: arena [config.toml] --goal <x_mm> <y_mm>");
            return ExitCode::FAILURE;
        }
    };

    let clearance = config.robot.clearance_mm() as usize;
    info!(
        "Arena {}x{}mm, clearance {}mm (robot radius {:.0}mm + margin {:.0}mm)",
        ARENA_WIDTH,
        ARENA_HEIGHT,
        clearance,
        config.robot.robot_radius_mm,
        config.robot.safety_margin_mm
    );

    let canvas = build_arena(clearance);

    // Goal input is bottom-left relative; the canvas frame has Y down
    let goal_canvas = Point2D::new(goal.x, ARENA_HEIGHT as f32 - goal.y - 1.0);

    if goal_canvas.x < ARENA_WIDTH as f32 - GOAL_STRIP_MM {
        error!(
            "goal x {:.0} outside the permitted target strip ({}..{})",
            goal_canvas.x,
            ARENA_WIDTH as f32 - GOAL_STRIP_MM,
            ARENA_WIDTH - clearance - 1
        );
        return ExitCode::FAILURE;
    }

    let start = Pose2D::new(500.0, ARENA_HEIGHT as f32 / 2.0, 0.0);
    info!(
        "Planning from ({:.0}, {:.0}, {:.0}°) to ({:.0}, {:.0})",
        start.x, start.y, start.heading, goal_canvas.x, goal_canvas.y
    );

    let planner = PrimitivePlanner::new(config);
    let path = match planner.plan(&canvas, start, goal_canvas) {
        Ok(path) => path,
        Err(e @ (PlanError::GoalBlocked { .. } | PlanError::GoalOutOfBounds { .. })) => {
            error!("invalid goal: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("planning failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Path found: {} steps, cost {:.0}mm, length {:.0}mm, {} nodes expanded",
        path.len(),
        path.cost,
        path.length_mm(),
        path.nodes_expanded
    );

    println!("#    x(mm)    y(mm)  heading(deg)  rpm_l  rpm_r");
    for (i, step) in path.steps.iter().enumerate() {
        println!(
            "{:<4} {:>8.1} {:>8.1} {:>12.1} {:>6.0} {:>6.0}",
            i, step.pose.x, step.pose.y, step.pose.heading, step.rpm.left, step.rpm.right
        );
    }

    ExitCode::SUCCESS
}

/// Build the competition arena with all obstacles inflated by `clearance`.
fn build_arena(clearance: usize) -> GridCanvas {
    let mut canvas = GridCanvas::open(ARENA_WIDTH, ARENA_HEIGHT, clearance);
    // Upper pillar
    canvas.block_rect(1500, 1750, 0, 1000);
    // Lower pillar
    canvas.block_rect(2500, 2750, 1000, 2000);
    // Circular obstacle
    canvas.block_circle(4200, 800, 600);
    canvas
}

fn parse_goal(args: &[String]) -> Option<Point2D> {
    let i = args.iter().position(|a| a == "--goal")?;
    let x: f32 = args.get(i + 1)?.parse().ok()?;
    let y: f32 = args.get(i + 2)?.parse().ok()?;
    Some(Point2D::new(x, y))
}
