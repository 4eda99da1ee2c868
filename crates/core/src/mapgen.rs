//! Procedural maze generation split into coherent submodules.

mod carve;
mod generator;
mod layout;
mod placement;

pub use generator::{GeneratedMaze, MazeGenerator};
pub use layout::RoomRect;

use crate::config::{ConfigError, MazeConfig};
use crate::rng::SeededRng;

/// One-shot helper for callers that only need a single maze for a seed.
pub fn generate_maze(config: MazeConfig, seed: u64) -> Result<GeneratedMaze, ConfigError> {
    Ok(MazeGenerator::new(config)?.generate(&mut SeededRng::new(seed)))
}

#[cfg(test)]
mod tests {
    use super::{MazeConfig, MazeGenerator, SeededRng};

    #[test]
    fn generate_maze_matches_map_generator_output() {
        let seed = 123_u64;
        let from_helper = super::generate_maze(MazeConfig::default(), seed).expect("valid");
        let from_generator = MazeGenerator::new(MazeConfig::default())
            .expect("valid")
            .generate(&mut SeededRng::new(seed));
        assert_eq!(from_helper, from_generator);
    }
}
