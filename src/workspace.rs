//! Free-space oracle interface and the rasterized reference implementation.
//!
//! Map construction is the embedding application's concern; the planner only
//! needs an O(1) point-in-free-space query over a pre-inflated workspace.
//! [`GridCanvas`] is the reference adapter used by the tests and the demo
//! binary: a one-cell-per-millimeter bitmap whose obstacle painters also
//! paint the clearance inflation ring, so a point-robot query suffices.

use crate::core::round_half;

/// Read-only free-space oracle over a pre-inflated workspace.
///
/// Implementations must answer in O(1); the search engine queries the oracle
/// several times per node expansion. The oracle is never mutated during a
/// planning call.
pub trait FreeSpace {
    /// Whether the point (x, y) lies in free space.
    ///
    /// Positions are continuous; implementations quantize as they see fit.
    /// Out-of-bounds points are not free.
    fn is_free(&self, x: f32, y: f32) -> bool;

    /// Workspace width in millimeters.
    fn width(&self) -> f32;

    /// Workspace height in millimeters.
    fn height(&self) -> f32;

    /// Whether the point lies inside the workspace rectangle.
    fn in_bounds(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x < self.width() && y >= 0.0 && y < self.height()
    }
}

/// Rasterized free-space bitmap, one cell per millimeter.
///
/// Cells are free or blocked; obstacle painters block the obstacle footprint
/// plus the clearance ring around it. Queries round the position to the
/// nearest half unit before the cell lookup to stabilize float jitter.
#[derive(Clone, Debug)]
pub struct GridCanvas {
    width: usize,
    height: usize,
    clearance: usize,
    free: Vec<bool>,
}

impl GridCanvas {
    /// Create a canvas whose interior rectangle, inset by `clearance` on all
    /// sides, is free; the border band stays blocked so the robot center can
    /// never come closer than `clearance` to the workspace boundary.
    pub fn open(width: usize, height: usize, clearance: usize) -> Self {
        let mut canvas = Self {
            width,
            height,
            clearance,
            free: vec![false; width * height],
        };
        for y in clearance..height.saturating_sub(clearance) {
            for x in clearance..width.saturating_sub(clearance) {
                canvas.free[y * width + x] = true;
            }
        }
        canvas
    }

    /// Block an axis-aligned rectangle `[x1, x2) x [y1, y2)` plus the
    /// clearance ring around it.
    pub fn block_rect(&mut self, x1: usize, x2: usize, y1: usize, y2: usize) {
        let c = self.clearance as i64;
        let (x_lo, x_hi) = (x1 as i64 - c, x2 as i64 + c);
        let (y_lo, y_hi) = (y1 as i64 - c, y2 as i64 + c);
        for y in y_lo.max(0)..y_hi.min(self.height as i64) {
            for x in x_lo.max(0)..x_hi.min(self.width as i64) {
                self.free[y as usize * self.width + x as usize] = false;
            }
        }
    }

    /// Block a disc of radius `r` centered at (cx, cy) plus the clearance
    /// ring around it.
    pub fn block_circle(&mut self, cx: usize, cy: usize, r: usize) {
        let (cx, cy) = (cx as i64, cy as i64);
        let inflated = (r + self.clearance) as i64;
        let r2 = inflated * inflated;
        for y in (cy - inflated).max(0)..(cy + inflated + 1).min(self.height as i64) {
            for x in (cx - inflated).max(0)..(cx + inflated + 1).min(self.width as i64) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r2 {
                    self.free[y as usize * self.width + x as usize] = false;
                }
            }
        }
    }

    /// Obstacle inflation distance this canvas was built with, in cells.
    pub fn clearance(&self) -> usize {
        self.clearance
    }
}

impl FreeSpace for GridCanvas {
    fn is_free(&self, x: f32, y: f32) -> bool {
        let xi = round_half(x).trunc() as i64;
        let yi = round_half(y).trunc() as i64;
        if xi < 0 || yi < 0 || xi >= self.width as i64 || yi >= self.height as i64 {
            return false;
        }
        self.free[yi as usize * self.width + xi as usize]
    }

    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }
}
