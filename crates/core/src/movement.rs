//! Axis-separated movement with grid collision.

use crate::grid::Grid;
use crate::pose::Pose;
use crate::types::Pos;

/// World-space displacement requested for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub dx: f64,
    pub dy: f64,
}

impl MoveIntent {
    pub const NONE: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// `forward` is +1 for ahead and -1 for back; `strafe` is +1 for right and -1 for left.
    /// Both axes are scaled by `distance`, so pressing both moves diagonally faster.
    pub fn from_controls(heading: f64, forward: f64, strafe: f64, distance: f64) -> Self {
        let (sin, cos) = heading.sin_cos();
        Self {
            dx: (cos * forward - sin * strafe) * distance,
            dy: (sin * forward + cos * strafe) * distance,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Turns, then commits x and y independently: a blocked axis is dropped while the other one
/// still slides along the wall.
pub fn step_movement(grid: &Grid, pose: Pose, turn_delta: f64, intent: MoveIntent) -> Pose {
    let mut next = Pose { heading: pose.heading + turn_delta, ..pose };
    if intent.is_zero() {
        return next;
    }

    let candidate_x = next.x + intent.dx;
    if is_walkable(grid, candidate_x, next.y) {
        next.x = candidate_x;
    }
    let candidate_y = next.y + intent.dy;
    if is_walkable(grid, next.x, candidate_y) {
        next.y = candidate_y;
    }
    next
}

fn is_walkable(grid: &Grid, x: f64, y: f64) -> bool {
    let cell = Pos { y: y.floor() as i32, x: x.floor() as i32 };
    grid.in_bounds(cell) && !grid.tile_at(cell).blocks_movement()
}
