//! `DrawSurface` backed by macroquad's immediate-mode shapes.
//!
//! The core draws in the configured screen resolution; this surface stretches that to whatever
//! size the window currently has.

use macroquad::color::Color;
use macroquad::shapes::{draw_circle, draw_line, draw_rectangle};
use macroquad::window::{clear_background, screen_height, screen_width};
use maze_core::{DrawSurface, MazeConfig, Rect, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewScale {
    pub x: f32,
    pub y: f32,
}

impl ViewScale {
    pub fn between(virtual_size: (u32, u32), window_size: (f32, f32)) -> Self {
        let ratio = |window: f32, virtual_side: u32| {
            if virtual_side == 0 || window <= 0.0 { 1.0 } else { window / virtual_side as f32 }
        };
        Self { x: ratio(window_size.0, virtual_size.0), y: ratio(window_size.1, virtual_size.1) }
    }

    pub fn rect(&self, rect: Rect) -> Rect {
        Rect::new(rect.x * self.x, rect.y * self.y, rect.w * self.x, rect.h * self.y)
    }

    pub fn point(&self, point: (f32, f32)) -> (f32, f32) {
        (point.0 * self.x, point.1 * self.y)
    }
}

pub struct MacroquadSurface {
    scale: ViewScale,
}

impl MacroquadSurface {
    pub fn for_window(config: &MazeConfig) -> Self {
        let scale = ViewScale::between(
            (config.screen_width, config.screen_height),
            (screen_width(), screen_height()),
        );
        Self { scale }
    }
}

fn to_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

impl DrawSurface for MacroquadSurface {
    fn clear(&mut self, color: Rgba) {
        clear_background(to_color(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let rect = self.scale.rect(rect);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, to_color(color));
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba) {
        let (from, to) = (self.scale.point(from), self.scale.point(to));
        draw_line(from.0, from.1, to.0, to.1, thickness, to_color(color));
    }

    fn fill_circle(&mut self, centre: (f32, f32), radius: f32, color: Rgba) {
        let centre = self.scale.point(centre);
        draw_circle(centre.0, centre.1, radius * self.scale.x.min(self.scale.y), to_color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_sizes_keep_coordinates() {
        let scale = ViewScale::between((1280, 720), (1280.0, 720.0));
        let rect = Rect::new(10.0, 20.0, 1.0, 300.0);
        assert_eq!(scale.rect(rect), rect);
    }

    #[test]
    fn larger_window_stretches_each_axis() {
        let scale = ViewScale::between((640, 360), (1920.0, 720.0));
        assert_eq!(scale, ViewScale { x: 3.0, y: 2.0 });
        assert_eq!(scale.point((10.0, 10.0)), (30.0, 20.0));
    }

    #[test]
    fn minimised_window_falls_back_to_identity() {
        let scale = ViewScale::between((1280, 720), (0.0, 0.0));
        assert_eq!(scale, ViewScale { x: 1.0, y: 1.0 });
    }
}
