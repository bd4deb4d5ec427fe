use crate::game::{Cell, Food, Grid, Snake};

/// What occupies a board cell, as far as drawing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    SnakeHead,
    SnakeBody,
    Apple,
}

/// A board-sized buffer of tiles that drawables paint themselves onto.
/// The renderer turns it into styled terminal output afterwards.
pub struct Canvas {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Canvas {
    pub fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            tiles: vec![Tile::Empty; grid.area()],
        }
    }

    pub fn set(&mut self, cell: Cell, tile: Tile) {
        if cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height {
            self.tiles[(cell.y * self.width + cell.x) as usize] = tile;
        }
    }

    pub fn get(&self, cell: Cell) -> Tile {
        if cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height {
            self.tiles[(cell.y * self.width + cell.x) as usize]
        } else {
            Tile::Empty
        }
    }
}

/// Anything that can paint itself onto the board. Snake and food implement
/// this independently; they share no drawing state.
pub trait Drawable {
    fn draw(&self, canvas: &mut Canvas);
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut Canvas) {
        for segment in &self.body[1..] {
            canvas.set(*segment, Tile::SnakeBody);
        }
        // Head last so it wins the cell during the transient overlap of a
        // collision frame.
        canvas.set(self.head(), Tile::SnakeHead);
    }
}

impl Drawable for Food {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.set(self.cell, Tile::Apple);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_snake_paints_head_and_body() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(&grid);
        snake.body = vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)];
        snake.target_len = 3;
        snake.direction = Direction::Right;

        let mut canvas = Canvas::new(&grid);
        snake.draw(&mut canvas);

        assert_eq!(canvas.get(Cell::new(5, 5)), Tile::SnakeHead);
        assert_eq!(canvas.get(Cell::new(4, 5)), Tile::SnakeBody);
        assert_eq!(canvas.get(Cell::new(3, 5)), Tile::SnakeBody);
        assert_eq!(canvas.get(Cell::new(6, 5)), Tile::Empty);
    }

    #[test]
    fn test_food_paints_one_cell() {
        let grid = Grid::new(10, 10);
        let food = Food {
            cell: Cell::new(2, 7),
        };

        let mut canvas = Canvas::new(&grid);
        food.draw(&mut canvas);

        assert_eq!(canvas.get(Cell::new(2, 7)), Tile::Apple);
        assert_eq!(canvas.get(Cell::new(7, 2)), Tile::Empty);
    }
}
