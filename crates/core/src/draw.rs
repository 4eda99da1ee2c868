//! Backend-neutral 2D drawing target.
//!
//! The renderer and the minimap only ever talk to [`DrawSurface`]. The desktop app adapts it to
//! macroquad; tests and the CLI tools use [`RecordingSurface`] to inspect what would be drawn.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn grey(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

/// Screen-space rectangle in pixels, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Grows the rectangle by `by` pixels on every side.
    pub fn inflated(self, by: f32) -> Self {
        Self { x: self.x - by, y: self.y - by, w: self.w + 2.0 * by, h: self.h + 2.0 * by }
    }
}

pub trait DrawSurface {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba);
    fn fill_circle(&mut self, centre: (f32, f32), radius: f32, color: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillRect { rect: Rect, color: Rgba },
    Line { from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba },
    Circle { centre: (f32, f32), radius: f32, color: Rgba },
}

impl DrawCommand {
    pub fn color(&self) -> Rgba {
        match self {
            Self::Clear(color) => *color,
            Self::FillRect { color, .. }
            | Self::Line { color, .. }
            | Self::Circle { color, .. } => *color,
        }
    }
}

/// Keeps every call in order instead of drawing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Rgba)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn count_color(&self, color: Rgba) -> usize {
        self.commands.iter().filter(|command| command.color() == color).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, thickness, color });
    }

    fn fill_circle(&mut self, centre: (f32, f32), radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { centre, radius, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflated_grows_each_side() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0).inflated(5.0);
        assert_eq!(rect, Rect::new(5.0, 15.0, 40.0, 50.0));
    }

    #[test]
    fn recording_surface_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        surface.clear(Rgba::BLACK);
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba::WHITE);
        surface.fill_circle((3.0, 3.0), 4.0, Rgba::rgb(255, 0, 0));

        assert_eq!(surface.commands.len(), 3);
        assert_eq!(surface.commands[0], DrawCommand::Clear(Rgba::BLACK));
        assert_eq!(surface.rects().count(), 1);
        assert_eq!(surface.count_color(Rgba::rgb(255, 0, 0)), 1);
    }
}
