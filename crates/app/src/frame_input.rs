//! Keyboard and mouse collection for one rendered frame.

use macroquad::input::{KeyCode, is_key_down, is_key_pressed, mouse_delta_position};
use macroquad::window::screen_width;
use maze_app::app_loop::{FrameInput, ZoomAction};

const ZOOM_OUT_KEYS: [KeyCode; 2] = [KeyCode::Minus, KeyCode::KpSubtract];
const ZOOM_IN_KEYS: [KeyCode; 2] = [KeyCode::Equal, KeyCode::KpAdd];

pub fn capture_frame_input() -> FrameInput {
    let zoom = if ZOOM_OUT_KEYS.into_iter().any(is_key_pressed) {
        Some(ZoomAction::Out)
    } else if ZOOM_IN_KEYS.into_iter().any(is_key_pressed) {
        Some(ZoomAction::In)
    } else {
        None
    };

    // macroquad reports the delta in normalised window units, last minus current.
    let mouse_dx = -f64::from(mouse_delta_position().x) * f64::from(screen_width()) / 2.0;

    FrameInput {
        quit: is_key_pressed(KeyCode::Escape),
        toggle_minimap: is_key_pressed(KeyCode::Tab),
        zoom,
        turn_left: is_key_down(KeyCode::Left),
        turn_right: is_key_down(KeyCode::Right),
        forward: is_key_down(KeyCode::W),
        back: is_key_down(KeyCode::S),
        strafe_left: is_key_down(KeyCode::A),
        strafe_right: is_key_down(KeyCode::D),
        mouse_dx,
    }
}
