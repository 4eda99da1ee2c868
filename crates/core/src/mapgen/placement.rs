//! Entrance link, special tiles, and the forced spawn pocket.

use log::debug;

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::{Pos, TileKind};

use super::layout::{RoomRect, carve_l_shaped_corridor, carve_room};

pub(super) const ENTRANCE: Pos = Pos { y: 1, x: 1 };
pub(super) const SPAWN_CELL: Pos = Pos { y: 4, x: 4 };
const POCKET_SIZE: usize = 5;
const POCKET_CORRIDOR_LENGTH: usize = 10;
const PLACEMENT_ATTEMPTS: u32 = 1000;
/// Collectibles keep out of the Chebyshev box of this radius around the entrance.
const COLLECTIBLE_EXCLUSION: u32 = 12;
const COLLECTIBLE_BORDER: usize = 8;
const EXIT_EXCLUSION: u32 = 10;
const EXIT_BORDER: usize = 5;

/// The square around the spawn cell plus the short corridor heading east from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct SpawnPocket {
    square: RoomRect,
    corridor: RoomRect,
}

impl SpawnPocket {
    pub(super) fn standard() -> Self {
        let half = POCKET_SIZE / 2;
        let origin_x = SPAWN_CELL.x as usize;
        let origin_y = SPAWN_CELL.y as usize;
        Self {
            square: RoomRect {
                x: origin_x - half,
                y: origin_y - half,
                width: POCKET_SIZE,
                height: POCKET_SIZE,
            },
            corridor: RoomRect {
                x: origin_x,
                y: origin_y,
                width: POCKET_CORRIDOR_LENGTH,
                height: 1,
            },
        }
    }

    /// Inside the pocket or orthogonally/diagonally next to it.
    pub(super) fn touches(&self, pos: Pos) -> bool {
        self.square.expanded(1).contains(pos) || self.corridor.expanded(1).contains(pos)
    }

    pub(super) fn carve(&self, grid: &mut Grid) {
        for room in [self.square, self.corridor] {
            carve_room(grid, &room);
        }
    }
}

/// Opens the entrance and ties it, through the spawn cell, to the first room.
pub(super) fn link_entrance(grid: &mut Grid, first_room: &RoomRect) {
    grid.set_tile(ENTRANCE, TileKind::Path);
    carve_l_shaped_corridor(grid, ENTRANCE, SPAWN_CELL);
    carve_l_shaped_corridor(grid, SPAWN_CELL, first_room.center());
}

/// Places up to `count` map pieces. A piece with no valid cell in budget is skipped.
pub(super) fn place_collectibles(
    grid: &mut Grid,
    count: usize,
    pocket: &SpawnPocket,
    rng: &mut impl RandomSource,
) -> Vec<Pos> {
    let mut placed = Vec::with_capacity(count);
    for piece in 0..count {
        let found = sample_cell(grid, COLLECTIBLE_BORDER, rng, |grid, pos| {
            grid.tile_at(pos) == TileKind::Path
                && ENTRANCE.chebyshev(pos) >= COLLECTIBLE_EXCLUSION
                && !pocket.touches(pos)
        });
        match found {
            Some(pos) => {
                grid.set_tile(pos, TileKind::Collectible);
                placed.push(pos);
            }
            None => debug!("skipping map piece {piece}, no free cell within budget"),
        }
    }
    placed
}

/// Places the single exit, never on `avoid` (the previous maze's exit when regenerating).
pub(super) fn place_exit(
    grid: &mut Grid,
    pocket: &SpawnPocket,
    avoid: Option<Pos>,
    rng: &mut impl RandomSource,
) -> Pos {
    let allowed = |grid: &Grid, pos: Pos| {
        grid.tile_at(pos) == TileKind::Path && !pocket.touches(pos) && Some(pos) != avoid
    };
    let found = sample_cell(grid, EXIT_BORDER, rng, |grid, pos| {
        allowed(grid, pos) && ENTRANCE.chebyshev(pos) >= EXIT_EXCLUSION
    })
    .or_else(|| {
        debug!("exit sampling exhausted, using farthest open cell");
        farthest_cell_from_entrance(grid, |pos| {
            allowed(grid, pos) && ENTRANCE.chebyshev(pos) >= EXIT_EXCLUSION
        })
    })
    .or_else(|| farthest_cell_from_entrance(grid, |pos| allowed(grid, pos)));
    let exit = match found {
        Some(pos) => pos,
        None => open_far_corner(grid),
    };

    grid.set_tile(exit, TileKind::Exit);
    exit
}

/// Uniform draws from the window `border..size - border`, at most `PLACEMENT_ATTEMPTS` times.
fn sample_cell(
    grid: &Grid,
    border: usize,
    rng: &mut impl RandomSource,
    accept: impl Fn(&Grid, Pos) -> bool,
) -> Option<Pos> {
    let span_x = grid.width().saturating_sub(2 * border);
    let span_y = grid.height().saturating_sub(2 * border);
    for _ in 0..PLACEMENT_ATTEMPTS {
        let x = border + rng.below(span_x);
        let y = border + rng.below(span_y);
        let pos = Pos { y: y as i32, x: x as i32 };
        if accept(grid, pos) {
            return Some(pos);
        }
    }
    None
}

/// Largest Manhattan distance from the entrance, ties broken toward larger `(y, x)`.
fn farthest_cell_from_entrance(grid: &Grid, accept: impl Fn(Pos) -> bool) -> Option<Pos> {
    let mut best: Option<(u32, Pos)> = None;
    for pos in grid.positions() {
        if !accept(pos) {
            continue;
        }
        let distance = ENTRANCE.manhattan(pos);
        let better = match best {
            None => true,
            Some((best_distance, best_pos)) => {
                distance > best_distance
                    || (distance == best_distance && (pos.y, pos.x) > (best_pos.y, best_pos.x))
            }
        };
        if better {
            best = Some((distance, pos));
        }
    }
    best.map(|(_, pos)| pos)
}

/// Last resort when no open cell qualifies: digs through walls from the spawn cell, x first,
/// to the inner corner opposite the entrance and returns that corner.
fn open_far_corner(grid: &mut Grid) -> Pos {
    let corner = Pos { y: grid.height() as i32 - 2, x: grid.width() as i32 - 2 };
    debug!("no open cell can hold the exit, digging to {corner:?}");
    let mut cursor = SPAWN_CELL;
    while cursor != corner {
        if grid.tile_at(cursor) == TileKind::Wall {
            grid.set_tile(cursor, TileKind::Path);
        }
        if cursor.x != corner.x {
            cursor.x += (corner.x - cursor.x).signum();
        } else {
            cursor.y += (corner.y - cursor.y).signum();
        }
    }
    corner
}
