//! Player-centred overhead view of explored cells.

use crate::config::MazeConfig;
use crate::draw::{DrawSurface, Rect, Rgba};
use crate::grid::Grid;
use crate::pose::Pose;
use crate::types::{Pos, TileKind};

/// Gap between the viewport and the top-right corner of the screen.
const MARGIN: f32 = 20.0;
const BACKDROP_BORDER: f32 = 5.0;
const GLOW_BORDER: f32 = 2.0;
const PLAYER_DOT_RADIUS: f32 = 4.0;
/// Heading line length, in minimap cells.
const HEADING_LINE_CELLS: f32 = 5.0;

pub const BACKDROP_COLOR: Rgba = Rgba::rgba(0, 0, 0, 180);
pub const WALL_COLOR: Rgba = Rgba::WHITE;
pub const MAP_PIECE_GLOW: Rgba = Rgba::rgb(100, 150, 255);
pub const MAP_PIECE_CORE: Rgba = Rgba::rgb(0, 100, 255);
pub const EXIT_GLOW: Rgba = Rgba::rgb(0, 255, 0);
pub const EXIT_CORE: Rgba = Rgba::rgb(0, 180, 0);
pub const PLAYER_COLOR: Rgba = Rgba::rgb(255, 0, 0);
pub const HEADING_COLOR: Rgba = Rgba::rgb(255, 255, 0);

/// Number of cells across the minimap, kept inside `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimapZoom {
    value: u32,
    min: u32,
    max: u32,
}

impl MinimapZoom {
    pub const STEP: u32 = 2;

    pub fn new(initial: u32, min: u32, max: u32) -> Self {
        let min = min.max(1);
        let max = max.max(min);
        Self { value: initial.clamp(min, max), min, max }
    }

    pub fn from_config(config: &MazeConfig) -> Self {
        Self::new(config.minimap_initial_zoom, config.minimap_min_zoom, config.minimap_max_zoom)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Fewer cells, bigger cells.
    pub fn zoom_in(&mut self) {
        self.set(self.value.saturating_sub(Self::STEP));
    }

    pub fn zoom_out(&mut self) {
        self.set(self.value.saturating_add(Self::STEP));
    }

    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }
}

/// Screen rectangle the minimap cells are laid out in, before the backdrop border.
pub fn viewport(config: &MazeConfig) -> Rect {
    let size = config.minimap_size as f32;
    Rect::new(config.screen_width as f32 - size - MARGIN, MARGIN, size, size)
}

pub fn draw_minimap(
    grid: &Grid,
    pose: &Pose,
    zoom: &MinimapZoom,
    config: &MazeConfig,
    surface: &mut impl DrawSurface,
) {
    let view = viewport(config);
    surface.fill_rect(view.inflated(BACKDROP_BORDER), BACKDROP_COLOR);

    let cell_size = config.minimap_size as f32 / zoom.value() as f32;
    let whole_cell = cell_size.trunc();
    let half = (zoom.value() / 2) as i32;
    let centre = pose.cell();
    let start = Pos { y: centre.y - half, x: centre.x - half };
    let visible: Vec<(Pos, f32, f32)> = (start.y..centre.y + half)
        .flat_map(|y| (start.x..centre.x + half).map(move |x| Pos { y, x }))
        .filter(|&pos| grid.is_explored(pos))
        .map(|pos| {
            let sx = view.x + ((pos.x - start.x) as f32 * cell_size).trunc();
            let sy = view.y + ((pos.y - start.y) as f32 * cell_size).trunc();
            (pos, sx, sy)
        })
        .collect();

    for &(pos, sx, sy) in &visible {
        if grid.tile_at(pos) == TileKind::Wall {
            surface.fill_rect(Rect::new(sx, sy, whole_cell + 1.0, whole_cell + 1.0), WALL_COLOR);
        }
    }
    for (tile, glow, core) in [
        (TileKind::Collectible, MAP_PIECE_GLOW, MAP_PIECE_CORE),
        (TileKind::Exit, EXIT_GLOW, EXIT_CORE),
    ] {
        for &(pos, sx, sy) in &visible {
            if grid.tile_at(pos) != tile {
                continue;
            }
            let core_rect = Rect::new(sx, sy, whole_cell, whole_cell);
            surface.fill_rect(core_rect.inflated(GLOW_BORDER), glow);
            surface.fill_rect(core_rect, core);
        }
    }

    let dot = ((view.x + view.w / 2.0).trunc(), (view.y + view.h / 2.0).trunc());
    surface.fill_circle(dot, PLAYER_DOT_RADIUS, PLAYER_COLOR);
    let line_length = (cell_size * HEADING_LINE_CELLS).trunc() as f64;
    let tip = (
        dot.0 + (pose.heading.cos() * line_length).trunc() as f32,
        dot.1 + (pose.heading.sin() * line_length).trunc() as f32,
    );
    surface.draw_line(dot, tip, 1.0, HEADING_COLOR);
}
