use serde::{Deserialize, Serialize};

use crate::food::Food;
use crate::grid::{CELL_COUNT, Direction, SCORE_PER_FOOD};
use crate::snake::Snake;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crash {
    Wall,
    Tail,
}

/// What a finished round looked like, logged once per game over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: u32,
    pub high_score: u32,
    pub length: usize,
    pub cause: Crash,
    pub new_high_score: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// `running` was false; nothing moved.
    Idle,
    Moved,
    Ate,
    Crashed(RoundSummary),
}

pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub running: bool,
}

impl Game {
    pub fn new() -> Self {
        let snake = Snake::new();
        let food = Food::new(snake.body());
        Self { snake, food, score: 0, high_score: 0, running: true }
    }

    pub fn steer(&mut self, dir: Direction) -> bool {
        self.running && self.snake.steer(dir)
    }

    /// One logic tick: move, then food, then walls, then tail.
    ///
    /// Food never sits on the snake or outside the grid, so a tick that eats
    /// cannot also crash; the early return keeps the outcomes exclusive.
    pub fn update(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.snake.update();
        if self.check_collision_with_food() {
            return Tick::Ate;
        }
        if self.check_collision_with_edges() {
            return Tick::Crashed(self.game_over(Crash::Wall));
        }
        if self.check_collision_with_tail() {
            return Tick::Crashed(self.game_over(Crash::Tail));
        }
        Tick::Moved
    }

    fn check_collision_with_food(&mut self) -> bool {
        if self.snake.head() != self.food.position {
            return false;
        }
        self.food.respawn(self.snake.body());
        self.snake.grow();
        self.score += SCORE_PER_FOOD;
        true
    }

    fn check_collision_with_edges(&self) -> bool {
        let head = self.snake.head();
        head.x == -1 || head.x == CELL_COUNT || head.y == -1 || head.y == CELL_COUNT
    }

    fn check_collision_with_tail(&self) -> bool {
        self.snake.hits_tail()
    }

    fn game_over(&mut self, cause: Crash) -> RoundSummary {
        let length = self.snake.len();
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        self.snake.reset();
        self.food.respawn(self.snake.body());
        self.running = false;
        RoundSummary {
            score: self.score,
            high_score: self.high_score,
            length,
            cause,
            new_high_score,
        }
    }

    pub fn restart(&mut self) {
        self.snake.reset();
        self.food.respawn(self.snake.body());
        self.score = 0;
        self.running = true;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
