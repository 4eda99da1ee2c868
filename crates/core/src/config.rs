//! Tunables for generation, rendering, and the minimap, validated once up front.
//!
//! Every simulation operation downstream assumes a config that passed [`MazeConfig::validate`],
//! so the generator and ray caster never have to re-check bounds arithmetic.

use std::f64::consts::PI;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest grid side the spawn pocket, the entrance exclusion zones, and the
/// special-tile sampling windows all fit into.
pub const MIN_GRID_SIDE: usize = 21;
pub const MIN_ROOM_SIZE: usize = 3;
/// Rooms are sampled at least this far from the border on each side.
pub(crate) const ROOM_BORDER_MARGIN: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small, each side needs at least {required} cells")]
    GridTooSmall { width: usize, height: usize, required: usize },
    #[error("room size range {min}..={max} is invalid, rooms need at least 3 cells per side")]
    InvalidRoomSize { min: usize, max: usize },
    #[error("minimap zoom range {min}..={max} with initial zoom {initial} is invalid")]
    InvalidZoomRange { min: u32, max: u32, initial: u32 },
    #[error("field of view {0} must lie strictly between 0 and pi radians")]
    InvalidFieldOfView(f64),
    #[error("reveal radius {radius} exceeds {limit}, the grid's width plus height")]
    RevealRadiusTooLarge { radius: u32, limit: usize },
    #[error("{what} must be positive")]
    NonPositive { what: &'static str },
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub room_count_target: usize,
    pub room_size_min: usize,
    pub room_size_max: usize,
    pub room_attempts: u32,
    pub collectible_count: usize,
    /// Horizontal field of view in radians.
    pub field_of_view: f64,
    pub reveal_radius: u32,
    pub minimap_min_zoom: u32,
    pub minimap_max_zoom: u32,
    pub minimap_initial_zoom: u32,
    pub minimap_size: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Cells per second.
    pub move_speed: f64,
    /// Radians per second for keyboard turning.
    pub turn_speed: f64,
    /// Radians per pixel of horizontal mouse motion.
    pub mouse_sensitivity: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            grid_width: 101,
            grid_height: 101,
            room_count_target: 44,
            room_size_min: 4,
            room_size_max: 23,
            room_attempts: 500,
            collectible_count: 3,
            field_of_view: PI / 3.0,
            reveal_radius: 55,
            minimap_min_zoom: 1,
            minimap_max_zoom: 300,
            minimap_initial_zoom: 12,
            minimap_size: 300,
            screen_width: 1280,
            screen_height: 720,
            move_speed: 9.0,
            turn_speed: 5.4,
            mouse_sensitivity: 0.0036,
        }
    }
}

impl MazeConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&raw)
    }

    /// Largest room side the generator can produce once even sizes are bumped to odd.
    pub fn max_odd_room_size(&self) -> usize {
        self.room_size_max | 1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_size_min < MIN_ROOM_SIZE || self.room_size_min > self.room_size_max {
            return Err(ConfigError::InvalidRoomSize {
                min: self.room_size_min,
                max: self.room_size_max,
            });
        }

        let required = MIN_GRID_SIDE.max(self.max_odd_room_size() + 2 * ROOM_BORDER_MARGIN + 1);
        if self.grid_width < required || self.grid_height < required {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                required,
            });
        }

        if self.minimap_min_zoom == 0
            || self.minimap_min_zoom > self.minimap_max_zoom
            || !(self.minimap_min_zoom..=self.minimap_max_zoom)
                .contains(&self.minimap_initial_zoom)
        {
            return Err(ConfigError::InvalidZoomRange {
                min: self.minimap_min_zoom,
                max: self.minimap_max_zoom,
                initial: self.minimap_initial_zoom,
            });
        }

        let limit = self.grid_width + self.grid_height;
        if self.reveal_radius as usize > limit {
            return Err(ConfigError::RevealRadiusTooLarge { radius: self.reveal_radius, limit });
        }

        if !(self.field_of_view > 0.0 && self.field_of_view < PI) {
            return Err(ConfigError::InvalidFieldOfView(self.field_of_view));
        }

        for (what, positive) in [
            ("screen_width", self.screen_width > 0),
            ("screen_height", self.screen_height > 0),
            ("minimap_size", self.minimap_size > 0),
            ("move_speed", self.move_speed.is_finite() && self.move_speed > 0.0),
            ("turn_speed", self.turn_speed.is_finite() && self.turn_speed > 0.0),
            (
                "mouse_sensitivity",
                self.mouse_sensitivity.is_finite() && self.mouse_sensitivity > 0.0,
            ),
        ] {
            if !positive {
                return Err(ConfigError::NonPositive { what });
            }
        }

        Ok(())
    }

    /// Half-width of the camera plane relative to a unit direction vector.
    pub fn plane_scale(&self) -> f64 {
        (self.field_of_view / 2.0).tan()
    }
}
