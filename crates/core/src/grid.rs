//! Maze cells and the explored mask, stored as parallel row-major buffers.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
    explored: Vec<bool>,
}

impl Grid {
    /// A solid block of walls with nothing explored.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![TileKind::Wall; width * height],
            explored: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-range cells read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        match self.index(pos) {
            Some(idx) => self.cells[idx],
            None => TileKind::Wall,
        }
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = tile;
        }
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|idx| self.explored[idx])
    }

    pub fn reveal(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.explored[idx] = true;
        }
    }

    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&seen| seen).count()
    }

    pub fn explored_mask(&self) -> &[bool] {
        &self.explored
    }

    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// Back to solid walls and an empty mask, keeping the allocation.
    pub fn reset(&mut self) {
        self.cells.fill(TileKind::Wall);
        self.explored.fill(false);
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn positions_of(&self, tile: TileKind) -> Vec<Pos> {
        self.positions().filter(|&pos| self.tile_at(pos) == tile).collect()
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.cells {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Path => 1,
                TileKind::Exit => 2,
                TileKind::Collectible => 3,
            });
        }
        bytes
    }

    /// Stable hash of the cell layout. The explored mask is not part of it.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }
}
