use anyhow::Result;
use macroquad::input::{KeyCode, is_key_pressed};
use macroquad::time::get_time;
use macroquad::window::{Conf, next_frame};

mod app;
mod assets;
mod food;
mod game;
mod grid;
mod render;
mod snake;

use app::{App, FrameInput};
use assets::Assets;
use game::Game;
use grid::WINDOW_SIZE;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake++".to_owned(),
        window_width: WINDOW_SIZE,
        window_height: WINDOW_SIZE,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run() -> Result<()> {
    let mut assets = Assets::load().await?;
    assets.start_music();
    let mut app = App::new(Game::new());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let now = get_time();
        let input = FrameInput::poll();
        if let Some(cue) = app.update(&input, now) {
            assets.play(cue);
        }
        assets.set_music_volume(app.music_volume());

        render::draw(&app, &assets, now);
        next_frame().await;
    }

    log::info!("shutting down, high score {}", app.game.high_score);
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting the game...");

    if let Err(err) = run().await {
        log::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}
