use std::f64::consts::FRAC_PI_2;

use maze_app::app_loop::{AppMode, AppState, FrameInput, ZoomAction};
use maze_core::{ArrivalEvent, GameSession, MazeConfig, Pose, TileKind};

const FRAME: f64 = 1.0 / 60.0;

fn new_session() -> GameSession {
    GameSession::new(MazeConfig::default(), 12345).expect("default config")
}

#[test]
fn test_escape_quits_and_stops_simulation() {
    let mut session = new_session();
    let mut app = AppState::new();
    assert_eq!(app.mode, AppMode::Exploring);

    let input = FrameInput { quit: true, forward: true, ..FrameInput::default() };
    app.tick(&mut session, &input, FRAME);
    assert_eq!(app.mode, AppMode::Quit);
    assert_eq!(session.pose(), Pose::new(4.5, 4.5, FRAC_PI_2));

    let before = session.pose();
    app.tick(&mut session, &FrameInput { forward: true, ..FrameInput::default() }, FRAME);
    assert_eq!(session.pose(), before);
}

#[test]
fn test_tab_toggles_minimap_and_marks_prefs_dirty() {
    let mut session = new_session();
    let mut app = AppState::new();
    assert!(!session.show_minimap());

    app.tick(&mut session, &FrameInput { toggle_minimap: true, ..FrameInput::default() }, FRAME);
    assert!(session.show_minimap());
    assert!(app.take_prefs_dirty());
    assert!(!app.take_prefs_dirty());

    app.tick(&mut session, &FrameInput::default(), FRAME);
    assert!(session.show_minimap(), "holding nothing must not toggle again");

    app.tick(&mut session, &FrameInput { toggle_minimap: true, ..FrameInput::default() }, FRAME);
    assert!(!session.show_minimap());
}

#[test]
fn test_zoom_keys_step_and_clamp() {
    let mut session = new_session();
    let mut app = AppState::new();

    let zoom_out = FrameInput { zoom: Some(ZoomAction::Out), ..FrameInput::default() };
    app.tick(&mut session, &zoom_out, FRAME);
    assert_eq!(session.zoom().value(), 14);

    let zoom_in = FrameInput { zoom: Some(ZoomAction::In), ..FrameInput::default() };
    for _ in 0..20 {
        app.tick(&mut session, &zoom_in, FRAME);
    }
    assert_eq!(session.zoom().value(), 1);
    assert!(app.take_prefs_dirty());
}

#[test]
fn test_holding_forward_walks_down_the_spawn_pocket() {
    let mut session = new_session();
    let mut app = AppState::new();
    let start = session.pose();

    for _ in 0..10 {
        app.tick(&mut session, &FrameInput { forward: true, ..FrameInput::default() }, FRAME);
    }
    let pose = session.pose();
    assert!(pose.y > start.y, "spawn faces +y so forward should increase y");
    assert!((pose.x - start.x).abs() < 1e-9);
    assert_eq!(session.grid().tile_at(pose.cell()), TileKind::Path);
}

#[test]
fn test_stepping_on_exit_reports_arrival_and_new_level() {
    let mut session = new_session();
    let mut app = AppState::new();
    let exit = session.grid().positions_of(TileKind::Exit)[0];
    session.place_player(Pose::new(f64::from(exit.x) + 0.5, f64::from(exit.y) + 0.5, 0.0));

    app.tick(&mut session, &FrameInput::default(), FRAME);
    assert_eq!(app.last_arrival, Some(ArrivalEvent::ExitReached { level: 2 }));
    assert_eq!(session.level(), 2);

    app.tick(&mut session, &FrameInput::default(), FRAME);
    assert_eq!(app.last_arrival, None);
}
