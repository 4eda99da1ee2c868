//! Room placement and corridor carving logic for base maze topology.

use log::debug;

use crate::config::{MazeConfig, ROOM_BORDER_MARGIN};
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::{Pos, TileKind};

/// Accepted rooms keep at least this many cells between their rectangles.
pub(super) const ROOM_PADDING: usize = 3;
/// Interior cells with both coordinates below this stay open while rooms are hollowed.
const SPAWN_RESERVE: usize = 8;
const FALLBACK_ROOM: RoomRect = RoomRect { x: 1, y: 1, width: 7, height: 7 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    fn right(self) -> usize {
        self.x + self.width - 1
    }

    fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + (self.height / 2)) as i32, x: (self.x + (self.width / 2)) as i32 }
    }

    /// First cell east of the room on the centre row that shares the centre's carve lattice.
    pub(super) fn lattice_cell_east(self) -> Pos {
        let center = self.center();
        let gap = self.right() as i32 - center.x + 1;
        Pos { y: center.y, x: center.x + gap + gap % 2 }
    }

    pub(super) fn expanded(self, margin: usize) -> Self {
        let expanded_x = self.x.saturating_sub(margin);
        let expanded_y = self.y.saturating_sub(margin);
        let expanded_right = self.right().saturating_add(margin);
        let expanded_bottom = self.bottom().saturating_add(margin);
        Self {
            x: expanded_x,
            y: expanded_y,
            width: expanded_right - expanded_x + 1,
            height: expanded_bottom - expanded_y + 1,
        }
    }

    /// True when the rectangles come closer than `padding` cells on both axes.
    pub(super) fn overlaps_padded(self, other: &Self, padding: usize) -> bool {
        self.x < other.x + other.width + padding
            && other.x < self.x + self.width + padding
            && self.y < other.y + other.height + padding
            && other.y < self.y + self.height + padding
    }

    pub fn contains(self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    fn cells(self) -> impl Iterator<Item = Pos> {
        (self.y..=self.bottom()).flat_map(move |y| {
            (self.x..=self.right()).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    /// Everything but the one-cell ring.
    fn interior(self) -> impl Iterator<Item = Pos> {
        let inner_y = (self.y + 1)..(self.y + self.height).saturating_sub(1);
        inner_y.flat_map(move |y| {
            ((self.x + 1)..(self.x + self.width).saturating_sub(1))
                .map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }
}

/// Samples odd-sized rooms until the target count or the attempt budget runs out.
/// Never returns an empty list.
pub(super) fn place_rooms(
    grid: &mut Grid,
    config: &MazeConfig,
    rng: &mut impl RandomSource,
) -> Vec<RoomRect> {
    let mut rooms: Vec<RoomRect> = Vec::new();
    let mut attempts = 0;
    while attempts < config.room_attempts && rooms.len() < config.room_count_target {
        attempts += 1;
        let width = rng.range_inclusive(config.room_size_min, config.room_size_max) | 1;
        let height = rng.range_inclusive(config.room_size_min, config.room_size_max) | 1;

        let x = ROOM_BORDER_MARGIN + rng.below(grid.width() - width - 2 * ROOM_BORDER_MARGIN);
        let y = ROOM_BORDER_MARGIN + rng.below(grid.height() - height - 2 * ROOM_BORDER_MARGIN);
        let candidate = RoomRect { x, y, width, height };
        if rooms.iter().any(|room| room.overlaps_padded(&candidate, ROOM_PADDING)) {
            continue;
        }

        carve_room(grid, &candidate);
        rooms.push(candidate);
    }

    if rooms.is_empty() {
        debug!("no room placed after {attempts} attempts, using fallback room");
        carve_room(grid, &FALLBACK_ROOM);
        rooms.push(FALLBACK_ROOM);
    } else {
        debug!("placed {} rooms in {attempts} attempts", rooms.len());
    }
    rooms
}

pub(super) fn carve_room(grid: &mut Grid, room: &RoomRect) {
    for pos in room.cells() {
        grid.set_tile(pos, TileKind::Path);
    }
}

/// Walls off room interiors so the carver tunnels through them like open ground.
pub(super) fn hollow_room_interiors(grid: &mut Grid, rooms: &[RoomRect]) {
    let reserve = SPAWN_RESERVE as i32;
    for room in rooms {
        for pos in room.interior() {
            if pos.x < reserve && pos.y < reserve {
                continue;
            }
            grid.set_tile(pos, TileKind::Wall);
        }
    }
}

pub(super) fn restore_room_interiors(grid: &mut Grid, rooms: &[RoomRect]) {
    for room in rooms {
        for pos in room.interior() {
            grid.set_tile(pos, TileKind::Path);
        }
    }
}

/// Shuffles `rooms` and joins each one to a random earlier room, a random spanning tree.
pub(super) fn connect_rooms(grid: &mut Grid, rooms: &mut [RoomRect], rng: &mut impl RandomSource) {
    if rooms.len() < 2 {
        return;
    }
    rng.shuffle(rooms);
    for index in 1..rooms.len() {
        let earlier = rooms[rng.below(index)];
        carve_l_shaped_corridor(grid, rooms[index].center(), earlier.center());
    }
}

/// Walks x first, then y. The end cell itself is left alone.
pub(super) fn carve_l_shaped_corridor(grid: &mut Grid, start: Pos, end: Pos) {
    let mut cursor = start;
    while cursor.x != end.x {
        grid.set_tile(cursor, TileKind::Path);
        cursor.x += (end.x - cursor.x).signum();
    }
    while cursor.y != end.y {
        grid.set_tile(cursor, TileKind::Path);
        cursor.y += (end.y - cursor.y).signum();
    }
}
