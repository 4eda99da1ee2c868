use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Path,
    Exit,
    Collectible,
}

impl TileKind {
    /// Rays stop on walls and on both special tiles; they are only told apart by color.
    pub fn blocks_sight(self) -> bool {
        matches!(self, Self::Wall | Self::Exit | Self::Collectible)
    }

    /// Only walls stop the player. Stepping onto a special tile is how it gets picked up.
    pub fn blocks_movement(self) -> bool {
        self == Self::Wall
    }

    pub fn is_special(self) -> bool {
        matches!(self, Self::Exit | Self::Collectible)
    }
}

/// Which grid line a ray crossed last. Drives the two-tone wall shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitSide {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What the frame loop reports after a tile-arrival check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrivalEvent {
    ExitReached { level: u32 },
    MapPieceCollected { at: Pos },
}
