mod frame_input;
mod hud;
mod scene;
mod window_config;

use macroquad::time::get_frame_time;
use macroquad::window::{clear_background, next_frame, screen_height, screen_width};
use maze_app::app_loop::AppState;
use maze_app::record_file::DepthRecordFile;
use maze_app::seed::generate_runtime_seed;
use maze_app::theme::ThemeFile;
use maze_core::{ChaChaSource, MazeSession, Viewport};
use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    let viewport = Viewport { width: screen_width(), height: screen_height() };
    let seed = generate_runtime_seed();
    let mut session = MazeSession::new(viewport, Box::new(ChaChaSource::seeded(seed)));

    let mut app =
        AppState::new(viewport, DepthRecordFile::get_default_path(), ThemeFile::get_default_path());
    app.load_persisted(&mut session);

    loop {
        let input = frame_input::gather();
        let dt_ms = get_frame_time() * 1000.0;
        app.frame(&mut session, &input, dt_ms);

        let snapshot = session.snapshot();
        clear_background(app.theme.background(snapshot.depth));
        scene::draw(&snapshot, app.theme, input.viewport, app.collision_flash);
        hud::draw(&snapshot, app.theme, input.viewport, app.elapsed_ms);

        next_frame().await
    }
}
