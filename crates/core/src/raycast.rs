//! Column-by-column DDA ray casting, wall projection, and flat shading.
//!
//! One frame is two passes. The first casts every column and marks the cells each ray walks
//! through as explored; the second turns the stored hits into draw calls. The minimap drawn at
//! the end of the frame therefore already includes everything visible this frame.

use crate::config::MazeConfig;
use crate::draw::{DrawSurface, Rect, Rgba};
use crate::grid::Grid;
use crate::minimap::{MinimapZoom, draw_minimap};
use crate::pose::Pose;
use crate::types::{HitSide, Pos, TileKind, Vec2};

/// Perpendicular distances are clamped up to this so a wall touching the camera stays finite.
pub const MIN_PERP_DISTANCE: f64 = 0.1;
/// Stand-in for `1 / 0` on an axis the ray never crosses.
const NO_CROSSING: f64 = 1e30;
/// Strips shorter than this are drawn full height.
const MIN_STRIP_HEIGHT: i32 = 4;

pub const CEILING_COLOR: Rgba = Rgba::rgb(60, 60, 100);
pub const FLOOR_COLOR: Rgba = Rgba::rgb(40, 40, 60);
pub const EXIT_WALL_COLOR: Rgba = Rgba::rgb(0, 255, 100);
pub const MAP_PIECE_WALL_COLOR: Rgba = Rgba::rgb(100, 150, 255);
const WALL_LIT: u8 = 220;
const WALL_SHADED: u8 = 140;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// The blocking cell, possibly just outside the grid.
    pub cell: Pos,
    pub tile: TileKind,
    pub side: HitSide,
    pub distance: f64,
    pub steps: usize,
}

/// Vertical extent of one wall strip, `top..bottom` in screen rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSpan {
    pub top: i32,
    pub bottom: i32,
}

/// Walks the grid from `origin` along `ray` until a sight-blocking cell or the edge of the
/// grid, marking every cell it enters. Never takes more than `width + height` steps.
pub fn cast_ray(grid: &mut Grid, origin: Vec2, ray: Vec2) -> RayHit {
    let mut cell = Pos { y: origin.y.floor() as i32, x: origin.x.floor() as i32 };
    let delta_x = if ray.x == 0.0 { NO_CROSSING } else { (1.0 / ray.x).abs() };
    let delta_y = if ray.y == 0.0 { NO_CROSSING } else { (1.0 / ray.y).abs() };
    let step_x = if ray.x < 0.0 { -1 } else { 1 };
    let step_y = if ray.y < 0.0 { -1 } else { 1 };

    let mut side_x = if ray.x < 0.0 {
        (origin.x - f64::from(cell.x)) * delta_x
    } else {
        (f64::from(cell.x) + 1.0 - origin.x) * delta_x
    };
    let mut side_y = if ray.y < 0.0 {
        (origin.y - f64::from(cell.y)) * delta_y
    } else {
        (f64::from(cell.y) + 1.0 - origin.y) * delta_y
    };

    let max_steps = grid.width() + grid.height();
    let mut side = HitSide::Vertical;
    let mut steps = 0;
    while steps < max_steps {
        if side_x < side_y {
            side_x += delta_x;
            cell.x += step_x;
            side = HitSide::Vertical;
        } else {
            side_y += delta_y;
            cell.y += step_y;
            side = HitSide::Horizontal;
        }
        steps += 1;
        grid.reveal(cell);
        if !grid.in_bounds(cell) || grid.tile_at(cell).blocks_sight() {
            break;
        }
    }

    let raw_distance = match side {
        HitSide::Vertical => {
            (f64::from(cell.x) - origin.x + f64::from(1 - step_x) / 2.0) / ray.x
        }
        HitSide::Horizontal => {
            (f64::from(cell.y) - origin.y + f64::from(1 - step_y) / 2.0) / ray.y
        }
    };

    RayHit {
        cell,
        tile: grid.tile_at(cell),
        side,
        // `f64::max` drops a NaN from a degenerate zero-length ray.
        distance: raw_distance.max(MIN_PERP_DISTANCE),
        steps,
    }
}

pub fn project_wall(distance: f64, screen_height: u32) -> WallSpan {
    let height = screen_height as i32;
    let line_height = (f64::from(screen_height) / distance) as i32;
    if line_height < MIN_STRIP_HEIGHT {
        return WallSpan { top: 0, bottom: height };
    }
    WallSpan {
        top: (-line_height / 2 + height / 2).max(0),
        bottom: (line_height / 2 + height / 2).min(height),
    }
}

pub fn wall_color(tile: TileKind, side: HitSide) -> Rgba {
    match (tile, side) {
        (TileKind::Exit, _) => EXIT_WALL_COLOR,
        (TileKind::Collectible, _) => MAP_PIECE_WALL_COLOR,
        (_, HitSide::Vertical) => Rgba::grey(WALL_LIT),
        (_, HitSide::Horizontal) => Rgba::grey(WALL_SHADED),
    }
}

/// Marks fog for every column, then draws ceiling, floor, wall strips, and optionally the
/// minimap overlay.
pub fn cast_and_render(
    grid: &mut Grid,
    pose: &Pose,
    config: &MazeConfig,
    minimap: Option<&MinimapZoom>,
    surface: &mut impl DrawSurface,
) {
    let camera = pose.camera(config.plane_scale());
    let columns = config.screen_width;
    let hits: Vec<RayHit> = (0..columns)
        .map(|column| cast_ray(grid, camera.origin, camera.ray_for_column(column, columns)))
        .collect();

    let width = config.screen_width as f32;
    let half_height = (config.screen_height / 2) as f32;
    surface.clear(Rgba::BLACK);
    surface.fill_rect(Rect::new(0.0, 0.0, width, half_height + 2.0), CEILING_COLOR);
    surface.fill_rect(Rect::new(0.0, half_height - 1.0, width, half_height + 2.0), FLOOR_COLOR);

    for (column, hit) in hits.iter().enumerate() {
        let span = project_wall(hit.distance, config.screen_height);
        surface.fill_rect(
            Rect::new(column as f32, span.top as f32, 1.0, (span.bottom - span.top) as f32),
            wall_color(hit.tile, hit.side),
        );
    }

    if let Some(zoom) = minimap {
        draw_minimap(grid, pose, zoom, config, surface);
    }
}
