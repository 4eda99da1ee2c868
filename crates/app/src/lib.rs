pub mod app_loop;
pub mod launch_args;
pub mod macroquad_surface;
pub mod prefs_file;

pub const APP_NAME: &str = "fogmaze";
pub const WINDOW_TITLE: &str = "3D Maze - Distant Map Reveals";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a maze fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}

pub fn hud_text(level: u32) -> String {
    format!("Level {level}")
}
