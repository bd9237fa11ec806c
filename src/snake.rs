use std::collections::VecDeque;

use crate::grid::{Cell, Direction};

const START_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    queued: Option<Direction>,
    grow: bool,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(START_BODY),
            direction: Direction::Right,
            queued: None,
            grow: false,
        }
    }

    pub fn reset(&mut self) {
        self.body = VecDeque::from(START_BODY);
        self.direction = Direction::Right;
        self.queued = None;
        self.grow = false;
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Queues a turn for the next tick. Only one turn fits per tick, and it
    /// is checked against the heading the snake will still have when the
    /// tick starts.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.queued.is_some() || dir == self.direction || dir == self.direction.opposite() {
            return false;
        }
        self.queued = Some(dir);
        true
    }

    pub fn grow(&mut self) {
        self.grow = true;
    }

    #[cfg(test)]
    pub fn is_growing(&self) -> bool {
        self.grow
    }

    pub fn update(&mut self) {
        if let Some(dir) = self.queued.take() {
            self.direction = dir;
        }
        let head = self.head() + self.direction;
        self.body.push_front(head);
        if self.grow {
            self.grow = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn hits_tail(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|c| *c == head)
    }

    #[cfg(test)]
    pub fn with_body(cells: &[Cell], direction: Direction) -> Self {
        Self {
            body: cells.iter().copied().collect(),
            direction,
            queued: None,
            grow: false,
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn test_update_moves_without_growing() {
        let mut snake = Snake::new();
        snake.update();
        assert_eq!(cells(&snake), vec![Cell::new(7, 9), Cell::new(6, 9), Cell::new(5, 9)]);
    }

    #[test]
    fn test_head_advances_by_direction() {
        for dir in [Direction::Up, Direction::Down, Direction::Right] {
            let mut snake = Snake::new();
            let before = snake.head();
            snake.steer(dir);
            snake.update();
            assert_eq!(snake.head(), before + dir);
        }
    }

    #[test]
    fn test_growth_is_deferred_one_tick() {
        let mut snake = Snake::new();
        snake.grow();
        assert_eq!(snake.len(), 3);
        snake.update();
        assert_eq!(snake.len(), 4);
        assert!(!snake.is_growing());
        snake.update();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_reverse_is_rejected() {
        let mut snake = Snake::new();
        assert!(!snake.steer(Direction::Left));
        snake.update();
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Cell::new(7, 9));
    }

    #[test]
    fn test_one_turn_per_tick() {
        let mut snake = Snake::new();
        assert!(snake.steer(Direction::Up));
        // Up then Left would fold the snake back onto its neck within one tick.
        assert!(!snake.steer(Direction::Left));
        snake.update();
        assert_eq!(snake.direction(), Direction::Up);
        assert!(snake.steer(Direction::Left));
        snake.update();
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_reverse_checked_against_pre_tick_heading() {
        let mut snake = Snake::new();
        assert!(snake.steer(Direction::Down));
        snake.update();
        assert!(!snake.steer(Direction::Up));
        assert!(snake.steer(Direction::Right));
    }

    #[test]
    fn test_hits_tail() {
        let coiled = Snake::with_body(
            &[Cell::new(5, 5), Cell::new(5, 6), Cell::new(6, 6), Cell::new(6, 5), Cell::new(5, 5)],
            Direction::Up,
        );
        assert!(coiled.hits_tail());
        assert!(!Snake::new().hits_tail());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut snake = Snake::new();
        snake.steer(Direction::Down);
        snake.grow();
        snake.update();
        snake.update();
        snake.reset();
        assert_eq!(cells(&snake), START_BODY.to_vec());
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.is_growing());
    }
}
