mod frame_input;
mod window_config;

use std::env;
use std::process;

use anyhow::{Context, Result, anyhow};
use env_logger::Env;
use log::{debug, error, info, warn};
use macroquad::color::Color;
use macroquad::input::{set_cursor_grab, show_mouse};
use macroquad::text::draw_text;
use macroquad::time::get_frame_time;
use macroquad::window::{Conf, next_frame};
use maze_app::app_loop::{AppMode, AppState};
use maze_app::launch_args::{generate_runtime_seed, parse_launch_args};
use maze_app::macroquad_surface::MacroquadSurface;
use maze_app::prefs_file::ViewerPrefsFile;
use maze_app::{format_fingerprint, format_seed, hud_text};
use maze_core::{ArrivalEvent, GameSession, MazeConfig};

const HUD_COLOR: Color = Color::new(220.0 / 255.0, 220.0 / 255.0, 100.0 / 255.0, 1.0);
const HUD_FONT_SIZE: f32 = 36.0;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = run().await {
        error!("{err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let launch = parse_launch_args(&args, generate_runtime_seed()).map_err(|err| anyhow!(err))?;
    let config = match &launch.config_path {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("failed to load maze config {}", path.display()))?,
        None => MazeConfig::default(),
    };

    let seed = launch.seed.value();
    let mut session = GameSession::new(config, seed).context("invalid maze config")?;
    info!(
        "seed {} ({:?}), maze {}",
        format_seed(seed),
        launch.seed,
        format_fingerprint(session.grid().fingerprint())
    );

    let prefs_path = ViewerPrefsFile::get_default_path();
    if let Some(path) = &prefs_path {
        match ViewerPrefsFile::load(path) {
            Ok(prefs) => prefs.apply_to(&mut session),
            Err(err) => debug!("no viewer prefs loaded from {}: {err}", path.display()),
        }
    }

    set_cursor_grab(true);
    show_mouse(false);

    let mut app = AppState::new();
    loop {
        let input = frame_input::capture_frame_input();
        app.tick(&mut session, &input, f64::from(get_frame_time()));
        if app.mode == AppMode::Quit {
            break;
        }
        if let Some(ArrivalEvent::ExitReached { .. }) = app.last_arrival {
            info!("new maze {}", format_fingerprint(session.grid().fingerprint()));
        }

        let mut surface = MacroquadSurface::for_window(session.config());
        session.render(&mut surface);
        draw_text(&hud_text(session.level()), 20.0, 20.0 + HUD_FONT_SIZE, HUD_FONT_SIZE, HUD_COLOR);

        if app.take_prefs_dirty()
            && let Some(path) = &prefs_path
            && let Err(err) = ViewerPrefsFile::from_session(&session).write_atomic(path)
        {
            warn!("failed to save viewer prefs to {}: {err}", path.display());
        }

        next_frame().await;
    }

    set_cursor_grab(false);
    show_mouse(true);
    Ok(())
}
