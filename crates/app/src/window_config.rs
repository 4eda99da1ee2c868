//! Window configuration for the desktop app.

use macroquad::window::Conf;
use maze_app::WINDOW_TITLE;

const DEFAULT_WINDOW_WIDTH: i32 = 1280;
const DEFAULT_WINDOW_HEIGHT: i32 = 720;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn uses_expected_title_and_size() {
        let conf = build_window_conf();
        assert_eq!(conf.window_title, "3D Maze - Distant Map Reveals");
        assert_eq!(conf.window_width, 1280);
        assert_eq!(conf.window_height, 720);
    }
}
