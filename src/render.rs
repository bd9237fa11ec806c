use macroquad::prelude::*;

use crate::app::{App, Screen};
use crate::assets::Assets;
use crate::grid::{BOARD_SIZE, CELL_SIZE, OFFSET, WINDOW_SIZE};

const NEON_GREEN: Color = Color::new(0.03, 1.0, 0.03, 1.0);
const NEON_DIM: Color = Color::new(0.03, 0.6, 0.03, 1.0);
const SEGMENT_INSET: f32 = 2.0;

const TITLE: &str = "Snake++";

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (WINDOW_SIZE as f32 - m.width) * 0.5, y, font_size as f32, color);
}

pub fn draw(app: &App, assets: &Assets, now: f64) {
    clear_background(BLACK);
    match app.screen {
        Screen::Menu => draw_menu(),
        Screen::Playing { .. } => draw_playing(app, assets),
        Screen::GameOver { final_score, .. } => draw_game_over(app, final_score, now),
    }
}

fn draw_menu() {
    draw_text(TITLE, 20.0, 80.0, 80.0, NEON_GREEN);
    let mid = (OFFSET + BOARD_SIZE / 2) as f32;
    draw_centered("Press ENTER to Start", mid, 30, NEON_GREEN);
    draw_centered("WASD / Arrows to steer", mid + 40.0, 20, NEON_DIM);
}

fn draw_playing(app: &App, assets: &Assets) {
    let edge = OFFSET as f32 - 5.0;
    let side = BOARD_SIZE as f32 + 10.0;
    draw_rectangle_lines(edge, edge, side, side, 5.0, NEON_GREEN);
    draw_text(TITLE, edge, 52.0, 40.0, NEON_GREEN);

    let below = (OFFSET + BOARD_SIZE) as f32 + 45.0;
    draw_text(&app.game.score.to_string(), edge, below, 40.0, NEON_GREEN);
    let best = format!("Best: {}", app.game.high_score);
    let m = measure_text(&best, None, 30, 1.0);
    draw_text(&best, (OFFSET + BOARD_SIZE) as f32 + 5.0 - m.width, below, 30.0, NEON_DIM);

    let (fx, fy) = app.game.food.position.screen_pos();
    draw_texture(&assets.apple, fx, fy, WHITE);

    let size = CELL_SIZE as f32 - 2.0 * SEGMENT_INSET;
    for (i, cell) in app.game.snake.body().iter().enumerate() {
        let r = cell.to_rect();
        let color = if i == 0 { NEON_GREEN } else { NEON_DIM };
        draw_rectangle(r.x + SEGMENT_INSET, r.y + SEGMENT_INSET, size, size, color);
    }
}

fn draw_game_over(app: &App, final_score: u32, now: f64) {
    if app.banner_visible(now) {
        draw_text("Game Over", OFFSET as f32 - 5.0, 60.0, 60.0, NEON_GREEN);
    }
    let mid = (OFFSET + BOARD_SIZE / 2) as f32;
    draw_centered(&format!("Score: {final_score}"), mid - 40.0, 30, NEON_GREEN);
    draw_centered(&format!("High Score: {}", app.game.high_score), mid, 30, NEON_GREEN);

    let left = app.cooldown_left(now);
    if left > 0.0 {
        draw_centered(&format!("Restart in {:.0}...", left.ceil()), mid + 60.0, 20, NEON_DIM);
    } else {
        draw_centered("Press ENTER to Restart", mid + 60.0, 20, NEON_GREEN);
    }
}
