use std::mem;

use maze_core::{ArrivalEvent, FrameControls, GameSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomAction {
    /// Fewer, larger cells.
    In,
    Out,
}

/// Everything the window reported for one frame, already decoded from keys and the mouse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub quit: bool,
    /// Edge-triggered: true only on the frame the key went down.
    pub toggle_minimap: bool,
    pub zoom: Option<ZoomAction>,
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    /// Horizontal mouse motion in pixels.
    pub mouse_dx: f64,
}

impl FrameInput {
    pub fn controls(&self) -> FrameControls {
        FrameControls {
            turn: axis(self.turn_left, self.turn_right),
            mouse_dx: self.mouse_dx,
            forward: axis(self.back, self.forward),
            strafe: axis(self.strafe_left, self.strafe_right),
        }
    }
}

fn axis(negative: bool, positive: bool) -> f64 {
    f64::from(u8::from(positive)) - f64::from(u8::from(negative))
}

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Exploring,
    Quit,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// What the player stepped onto during the last `tick()`.
    pub last_arrival: Option<ArrivalEvent>,
    prefs_dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewer toggles, then one simulation frame. Rendering is left to the caller.
    pub fn tick(&mut self, session: &mut GameSession, input: &FrameInput, dt: f64) {
        self.last_arrival = None;
        if self.mode == AppMode::Quit {
            return;
        }
        if input.quit {
            self.mode = AppMode::Quit;
            return;
        }

        if input.toggle_minimap {
            session.toggle_minimap();
            self.prefs_dirty = true;
        }
        match input.zoom {
            Some(ZoomAction::In) => session.zoom_mut().zoom_in(),
            Some(ZoomAction::Out) => session.zoom_mut().zoom_out(),
            None => {}
        }
        if input.zoom.is_some() {
            self.prefs_dirty = true;
        }

        self.last_arrival = session.frame(&input.controls(), dt);
    }

    /// True once after any viewer preference changed.
    pub fn take_prefs_dirty(&mut self) -> bool {
        mem::take(&mut self.prefs_dirty)
    }
}
