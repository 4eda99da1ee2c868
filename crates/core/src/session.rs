//! One running game: the maze, the player, and the rules for stepping onto special tiles.

use log::info;

use crate::config::{ConfigError, MazeConfig};
use crate::draw::DrawSurface;
use crate::fog::reveal_distant_patch;
use crate::grid::Grid;
use crate::mapgen::{MazeGenerator, RoomRect};
use crate::minimap::MinimapZoom;
use crate::movement::{MoveIntent, step_movement};
use crate::pose::Pose;
use crate::raycast::cast_and_render;
use crate::rng::SeededRng;
use crate::types::{ArrivalEvent, TileKind};

/// Longest frame the simulation integrates in one go. Anything slower is treated as this long
/// so a stalled frame cannot carry the player through a wall.
pub const MAX_FRAME_SECONDS: f64 = 0.05;

/// Player controls sampled for one frame, already reduced to axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameControls {
    /// -1 turns left, +1 turns right.
    pub turn: f64,
    /// Horizontal mouse motion in pixels since the last frame.
    pub mouse_dx: f64,
    /// +1 ahead, -1 back.
    pub forward: f64,
    /// +1 right, -1 left.
    pub strafe: f64,
}

pub struct GameSession {
    generator: MazeGenerator,
    rng: SeededRng,
    grid: Grid,
    rooms: Vec<RoomRect>,
    pose: Pose,
    level: u32,
    zoom: MinimapZoom,
    show_minimap: bool,
    pieces_collected: u32,
}

impl GameSession {
    pub fn new(config: MazeConfig, seed: u64) -> Result<Self, ConfigError> {
        let zoom = MinimapZoom::from_config(&config);
        let generator = MazeGenerator::new(config)?;
        let mut rng = SeededRng::new(seed);
        let maze = generator.generate(&mut rng);
        info!("generated level 1 from seed {seed}");
        Ok(Self {
            generator,
            rng,
            grid: maze.grid,
            rooms: maze.rooms,
            pose: maze.spawn,
            level: 1,
            zoom,
            show_minimap: false,
            pieces_collected: 0,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        self.generator.config()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[RoomRect] {
        &self.rooms
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Starts at 1 and counts every exit taken.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pieces_collected(&self) -> u32 {
        self.pieces_collected
    }

    pub fn zoom(&self) -> &MinimapZoom {
        &self.zoom
    }

    pub fn zoom_mut(&mut self) -> &mut MinimapZoom {
        &mut self.zoom
    }

    pub fn show_minimap(&self) -> bool {
        self.show_minimap
    }

    pub fn set_show_minimap(&mut self, visible: bool) {
        self.show_minimap = visible;
    }

    pub fn toggle_minimap(&mut self) {
        self.show_minimap = !self.show_minimap;
    }

    /// Moves the player without collision checks. Tools and tests use it to stage scenarios.
    pub fn place_player(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Applies the rule for the tile under the player, if any.
    pub fn resolve_arrival(&mut self) -> Option<ArrivalEvent> {
        let at = self.pose.cell();
        match self.grid.tile_at(at) {
            TileKind::Exit => {
                self.pose =
                    self.generator.regenerate(&mut self.grid, &mut self.rooms, &mut self.rng);
                self.level += 1;
                info!("exit reached, now on level {}", self.level);
                Some(ArrivalEvent::ExitReached { level: self.level })
            }
            TileKind::Collectible => {
                let radius = self.config().reveal_radius;
                let centre =
                    reveal_distant_patch(&mut self.grid, &mut self.rng, at.x, at.y, radius);
                self.grid.set_tile(at, TileKind::Path);
                self.pieces_collected += 1;
                info!("map piece at {at:?} collected, revealed area around {centre:?}");
                Some(ArrivalEvent::MapPieceCollected { at })
            }
            TileKind::Wall | TileKind::Path => None,
        }
    }

    /// Arrival first, then turning and movement. Taking the exit ends the frame's simulation
    /// so the player starts the new maze from the spawn pose.
    pub fn frame(&mut self, controls: &FrameControls, dt: f64) -> Option<ArrivalEvent> {
        let arrival = self.resolve_arrival();
        if matches!(arrival, Some(ArrivalEvent::ExitReached { .. })) {
            return arrival;
        }
        self.apply_controls(controls, dt);
        arrival
    }

    pub fn apply_controls(&mut self, controls: &FrameControls, dt: f64) {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_SECONDS) } else { 0.0 };
        let config = self.generator.config();
        let turn =
            controls.turn * config.turn_speed * dt + controls.mouse_dx * config.mouse_sensitivity;
        let intent = MoveIntent::from_controls(
            self.pose.heading + turn,
            controls.forward,
            controls.strafe,
            config.move_speed * dt,
        );
        self.pose = step_movement(&self.grid, self.pose, turn, intent);
    }

    /// Casts the view (marking fog), then draws it and the minimap when it is shown.
    pub fn render(&mut self, surface: &mut impl DrawSurface) {
        let minimap = self.show_minimap.then_some(&self.zoom);
        cast_and_render(&mut self.grid, &self.pose, self.generator.config(), minimap, surface);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::draw::RecordingSurface;
    use crate::types::Pos;

    fn session(seed: u64) -> GameSession {
        GameSession::new(MazeConfig::default(), seed).expect("default config")
    }

    fn centre_of(pos: Pos) -> Pose {
        Pose::new(f64::from(pos.x) + 0.5, f64::from(pos.y) + 0.5, 0.0)
    }

    #[test]
    fn new_session_starts_on_level_one_at_spawn() {
        let game = session(1);
        assert_eq!(game.level(), 1);
        assert_eq!(game.pose(), Pose::new(4.5, 4.5, FRAC_PI_2));
        assert!(!game.show_minimap());
        assert_eq!(game.zoom().value(), 12);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = MazeConfig { grid_width: 10, ..MazeConfig::default() };
        assert!(matches!(
            GameSession::new(config, 1),
            Err(ConfigError::GridTooSmall { width: 10, .. })
        ));
    }

    #[test]
    fn stepping_on_the_exit_regenerates_and_bumps_the_level() {
        let mut game = session(2);
        let exit = game.grid().positions_of(TileKind::Exit)[0];
        game.place_player(centre_of(exit));

        let event = game.frame(&FrameControls { forward: 1.0, ..FrameControls::default() }, 0.05);
        assert_eq!(event, Some(ArrivalEvent::ExitReached { level: 2 }));
        assert_eq!(game.level(), 2);
        assert_eq!(game.pose(), Pose::new(4.5, 4.5, FRAC_PI_2));
        let new_exit = game.grid().positions_of(TileKind::Exit);
        assert_eq!(new_exit.len(), 1);
        assert_ne!(new_exit[0], exit);
        assert_eq!(game.grid().tile_at(game.pose().cell()), TileKind::Path);
    }

    #[test]
    fn map_piece_is_consumed_and_reveals_fog() {
        let mut game = session(3);
        let Some(&piece) = game.grid().positions_of(TileKind::Collectible).first() else {
            panic!("default maze should hold a map piece");
        };
        game.place_player(centre_of(piece));

        let before = game.grid().explored_count();
        let event = game.resolve_arrival();
        assert_eq!(event, Some(ArrivalEvent::MapPieceCollected { at: piece }));
        assert_eq!(game.grid().tile_at(piece), TileKind::Path);
        assert!(game.grid().explored_count() > before);
        assert_eq!(game.pieces_collected(), 1);
        assert_eq!(game.resolve_arrival(), None);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut game = session(4);
        let start = game.pose();
        game.apply_controls(&FrameControls { turn: 1.0, ..FrameControls::default() }, 10.0);
        let expected = start.heading + game.config().turn_speed * MAX_FRAME_SECONDS;
        assert!((game.pose().heading - expected).abs() < 1e-12);
    }

    #[test]
    fn mouse_motion_turns_by_sensitivity() {
        let mut game = session(4);
        let start = game.pose().heading;
        game.apply_controls(&FrameControls { mouse_dx: 100.0, ..FrameControls::default() }, 0.0);
        assert!((game.pose().heading - start - 0.36).abs() < 1e-12);
    }

    #[test]
    fn render_marks_fog_and_respects_the_minimap_toggle() {
        let mut game = session(5);
        let mut hidden = RecordingSurface::new();
        game.render(&mut hidden);
        assert!(game.grid().explored_count() > 0);

        game.toggle_minimap();
        let mut shown = RecordingSurface::new();
        game.render(&mut shown);
        assert!(shown.commands.len() > hidden.commands.len());
    }
}
