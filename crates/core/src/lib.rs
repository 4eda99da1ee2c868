pub mod config;
pub mod draw;
pub mod fog;
pub mod grid;
pub mod mapgen;
pub mod minimap;
pub mod movement;
pub mod pose;
pub mod raycast;
pub mod rng;
pub mod session;
pub mod types;

pub use config::{ConfigError, MazeConfig};
pub use draw::{DrawCommand, DrawSurface, Rect, RecordingSurface, Rgba};
pub use fog::reveal_distant_patch;
pub use grid::Grid;
pub use mapgen::{GeneratedMaze, MazeGenerator, RoomRect, generate_maze};
pub use minimap::{MinimapZoom, draw_minimap};
pub use movement::{MoveIntent, step_movement};
pub use pose::{Camera, Pose};
pub use raycast::{RayHit, cast_and_render, cast_ray};
pub use rng::{RandomSource, SeededRng};
pub use session::{FrameControls, GameSession};
pub use types::*;
