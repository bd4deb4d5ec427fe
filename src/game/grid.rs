use super::direction::Direction;

/// A cell on the game grid, in grid units.
///
/// Cells produced by [`Grid::wrap`] always satisfy `0 <= x < width` and
/// `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The toroidal coordinate space: fixed dimensions plus wraparound
/// arithmetic. Stateless; shared by the snake and food placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    /// Move one step from `cell` in `direction`, wrapping past the edges.
    ///
    /// Crossing a boundary teleports to the opposite edge; the result is
    /// always in bounds, so there is no such thing as a wall collision.
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: (cell.x + dx).rem_euclid(self.width),
            y: (cell.y + dy).rem_euclid(self.height),
        }
    }

    /// Enumerate every cell of the grid, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// The cell the snake starts on and returns to after a reset.
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_wrap_stays_in_bounds_everywhere() {
        let grid = Grid::new(7, 5);
        for cell in grid.cells() {
            for dir in DIRECTIONS {
                let next = grid.wrap(cell, dir);
                assert!(
                    grid.contains(next),
                    "wrap({:?}, {:?}) left the grid: {:?}",
                    cell,
                    dir,
                    next
                );
            }
        }
    }

    #[test]
    fn test_wrap_teleports_across_edges() {
        let grid = Grid::new(32, 24);
        assert_eq!(
            grid.wrap(Cell::new(31, 10), Direction::Right),
            Cell::new(0, 10)
        );
        assert_eq!(
            grid.wrap(Cell::new(0, 10), Direction::Left),
            Cell::new(31, 10)
        );
        assert_eq!(grid.wrap(Cell::new(5, 0), Direction::Up), Cell::new(5, 23));
        assert_eq!(grid.wrap(Cell::new(5, 23), Direction::Down), Cell::new(5, 0));
    }

    #[test]
    fn test_wrap_interior_is_plain_movement() {
        let grid = Grid::new(10, 10);
        assert_eq!(
            grid.wrap(Cell::new(5, 5), Direction::Right),
            Cell::new(6, 5)
        );
        assert_eq!(grid.wrap(Cell::new(5, 5), Direction::Left), Cell::new(4, 5));
        assert_eq!(grid.wrap(Cell::new(5, 5), Direction::Up), Cell::new(5, 4));
        assert_eq!(grid.wrap(Cell::new(5, 5), Direction::Down), Cell::new(5, 6));
    }

    #[test]
    fn test_cells_enumerates_full_board() {
        let grid = Grid::new(4, 3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.area());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[11], Cell::new(3, 2));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(32, 24).center(), Cell::new(16, 12));
        assert_eq!(Grid::new(10, 10).center(), Cell::new(5, 5));
    }
}
