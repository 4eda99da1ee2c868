//! Player pose and the camera vectors derived from it.

use crate::types::{Pos, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Radians; 0 looks toward +x, pi/2 toward +y (down the grid).
    pub heading: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// The grid cell the player stands in.
    pub fn cell(&self) -> Pos {
        Pos { y: self.y.floor() as i32, x: self.x.floor() as i32 }
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), self.heading.sin())
    }

    /// Recomputed from the heading on every call so it can never go stale after a turn.
    pub fn camera(&self, plane_scale: f64) -> Camera {
        let dir = self.direction();
        Camera {
            origin: Vec2::new(self.x, self.y),
            dir,
            plane: Vec2::new(-dir.y * plane_scale, dir.x * plane_scale),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec2,
    pub dir: Vec2,
    /// Perpendicular to `dir`, length `tan(fov / 2)`.
    pub plane: Vec2,
}

impl Camera {
    /// Ray direction for `column` of a `screen_width` wide view.
    pub fn ray_for_column(&self, column: u32, screen_width: u32) -> Vec2 {
        let camera_x = 2.0 * f64::from(column) / f64::from(screen_width) - 1.0;
        Vec2::new(self.dir.x + self.plane.x * camera_x, self.dir.y + self.plane.y * camera_x)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn cell_floors_fractional_coordinates() {
        assert_eq!(Pose::new(4.5, 4.5, 0.0).cell(), Pos { y: 4, x: 4 });
        assert_eq!(Pose::new(3.999, 0.0, 0.0).cell(), Pos { y: 0, x: 3 });
    }

    #[test]
    fn plane_is_perpendicular_and_scaled() {
        let scale = (PI / 6.0).tan();
        let camera = Pose::new(1.0, 1.0, FRAC_PI_2).camera(scale);
        assert!(camera.dir.x.abs() < 1e-12);
        assert!((camera.dir.y - 1.0).abs() < 1e-12);
        assert!((camera.plane.x + scale).abs() < 1e-12);
        assert!(camera.plane.y.abs() < 1e-12);
    }

    #[test]
    fn camera_follows_heading_changes() {
        let mut pose = Pose::new(1.0, 1.0, 0.0);
        let before = pose.camera(1.0);
        pose.heading += FRAC_PI_2;
        let after = pose.camera(1.0);
        assert_ne!(before, after);
        assert!((after.dir.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn edge_columns_span_the_plane() {
        let camera = Pose::new(0.0, 0.0, 0.0).camera(0.5);
        let left = camera.ray_for_column(0, 100);
        let centre = camera.ray_for_column(50, 100);
        assert!((left.y + 0.5).abs() < 1e-12);
        assert_eq!(centre, Vec2::new(1.0, 0.0));
    }
}
