use macroquad::prelude::Rect;
use serde::{Deserialize, Serialize};
use std::ops::Add;

// Board geometry
pub const CELL_SIZE: i32 = 30;
pub const CELL_COUNT: i32 = 25;
pub const OFFSET: i32 = 75;
pub const BOARD_SIZE: i32 = CELL_SIZE * CELL_COUNT;
pub const WINDOW_SIZE: i32 = 2 * OFFSET + BOARD_SIZE;

// Timing (seconds)
pub const TICK_INTERVAL: f64 = 0.2;
pub const RESTART_COOLDOWN: f64 = 3.0;
pub const BLINK_PERIOD: f64 = 0.5;

pub const SCORE_PER_FOOD: u32 = 10;

pub const MENU_MUSIC_VOLUME: f32 = 0.6;
pub const PLAYING_MUSIC_VOLUME: f32 = 0.25;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn in_bounds(self) -> bool {
        (0..CELL_COUNT).contains(&self.x) && (0..CELL_COUNT).contains(&self.y)
    }

    /// Top-left pixel of the cell inside the bordered board.
    pub fn screen_pos(self) -> (f32, f32) {
        (
            (OFFSET + self.x * CELL_SIZE) as f32,
            (OFFSET + self.y * CELL_SIZE) as f32,
        )
    }

    pub fn to_rect(self) -> Rect {
        let (x, y) = self.screen_pos();
        Rect::new(x, y, CELL_SIZE as f32, CELL_SIZE as f32)
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}
