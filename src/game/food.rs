use rand::Rng;
use rand::seq::SliceRandom;

use super::grid::{Cell, Grid};
use super::snake::Snake;

/// The single active food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    /// Place food on a cell the snake does not occupy, chosen uniformly
    /// from the free cells.
    ///
    /// If the snake covers the entire board there is no free cell; the
    /// fallback is an unconstrained uniform draw over the whole grid,
    /// which may land on the snake. That degraded case is deliberate:
    /// at full coverage the game is effectively over anyway.
    pub fn place<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Self {
        let free: Vec<Cell> = grid.cells().filter(|c| !snake.occupies(*c)).collect();

        let cell = match free.choose(rng) {
            Some(cell) => *cell,
            None => Cell::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height)),
        };

        Self { cell }
    }
}
