//! Maze construction pipeline that composes rooms, carving, and tile placement.

use std::f64::consts::FRAC_PI_2;

use log::{debug, info};

use crate::config::{ConfigError, MazeConfig};
use crate::grid::Grid;
use crate::pose::Pose;
use crate::rng::RandomSource;
use crate::types::{Pos, TileKind};

use super::carve::carve_passages;
use super::layout::{
    RoomRect, carve_l_shaped_corridor, connect_rooms, hollow_room_interiors, place_rooms,
    restore_room_interiors,
};
use super::placement::{SPAWN_CELL, SpawnPocket, link_entrance, place_collectibles, place_exit};

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedMaze {
    pub grid: Grid,
    pub rooms: Vec<RoomRect>,
    pub spawn: Pose,
}

pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    /// Rejects grids that cannot hold the configured rooms before any generation runs.
    pub fn new(config: MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn generate(&self, rng: &mut impl RandomSource) -> GeneratedMaze {
        let mut grid = Grid::new(self.config.grid_width, self.config.grid_height);
        let mut rooms = Vec::new();
        let spawn = self.build(&mut grid, &mut rooms, None, rng);
        GeneratedMaze { grid, rooms, spawn }
    }

    /// Rebuilds `grid` and `rooms` in place. Cells and fog from the old maze do not survive,
    /// and the new exit never lands where the old one was.
    pub fn regenerate(
        &self,
        grid: &mut Grid,
        rooms: &mut Vec<RoomRect>,
        rng: &mut impl RandomSource,
    ) -> Pose {
        let previous_exit = grid.positions_of(TileKind::Exit).first().copied();
        if grid.width() != self.config.grid_width || grid.height() != self.config.grid_height {
            *grid = Grid::new(self.config.grid_width, self.config.grid_height);
        }
        let spawn = self.build(grid, rooms, previous_exit, rng);
        info!("regenerated maze, previous exit {previous_exit:?}");
        spawn
    }

    fn build(
        &self,
        grid: &mut Grid,
        rooms: &mut Vec<RoomRect>,
        avoid_exit: Option<Pos>,
        rng: &mut impl RandomSource,
    ) -> Pose {
        grid.reset();
        *rooms = place_rooms(grid, &self.config, rng);

        hollow_room_interiors(grid, rooms);
        let first = rooms[0];
        carve_passages(grid, first.center(), rng);
        // A room inside the spawn reserve keeps its open interior, so the carve above cannot
        // leave it. Continue from the nearest lattice cell outside instead.
        let beyond = first.lattice_cell_east();
        if grid.tile_at(beyond) == TileKind::Wall {
            debug!("carve stayed inside the first room, continuing from {beyond:?}");
            carve_l_shaped_corridor(grid, first.center(), beyond);
            carve_passages(grid, beyond, rng);
        }
        restore_room_interiors(grid, rooms);

        connect_rooms(grid, rooms, rng);
        for room in rooms.iter() {
            carve_passages(grid, room.center(), rng);
        }

        let pocket = SpawnPocket::standard();
        link_entrance(grid, &rooms[0]);
        let pieces = place_collectibles(grid, self.config.collectible_count, &pocket, rng);
        let exit = place_exit(grid, &pocket, avoid_exit, rng);
        pocket.carve(grid);

        debug!(
            "maze ready: {} rooms, {} open cells, exit at {exit:?}, {} map pieces",
            rooms.len(),
            grid.count(TileKind::Path),
            pieces.len()
        );

        spawn_pose()
    }
}

fn spawn_pose() -> Pose {
    Pose::new(f64::from(SPAWN_CELL.x) + 0.5, f64::from(SPAWN_CELL.y) + 0.5, FRAC_PI_2)
}
