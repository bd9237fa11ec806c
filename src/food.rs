use std::collections::VecDeque;

use crate::grid::{CELL_COUNT, Cell};

pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn new(occupied: &VecDeque<Cell>) -> Self {
        Self { position: Self::random_free_cell(occupied) }
    }

    pub fn respawn(&mut self, occupied: &VecDeque<Cell>) {
        self.position = Self::random_free_cell(occupied);
    }

    /// Rejection-samples the grid until it hits a cell the snake does not
    /// cover. Terminates as long as the snake leaves at least one cell free.
    pub fn random_free_cell(occupied: &VecDeque<Cell>) -> Cell {
        debug_assert!(occupied.len() < (CELL_COUNT * CELL_COUNT) as usize);
        loop {
            let x = macroquad::rand::gen_range(0, CELL_COUNT);
            let y = macroquad::rand::gen_range(0, CELL_COUNT);
            let cell = Cell { x, y };
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }
}
