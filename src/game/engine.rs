use super::config::GameConfig;
use super::direction::Direction;
use super::food::Food;
use super::grid::{Cell, Grid};
use super::snake::{Snake, Step};

/// Complete game state: the snake and the current food item.
///
/// Owned exclusively by whoever drives the engine; the engine mutates it
/// one tick at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
}

/// What happened during one tick, for the caller and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Head position after the tick.
    pub head: Cell,
    /// The head landed on the food; the snake grew and food moved.
    pub ate_food: bool,
    /// A self-collision reset the snake this tick.
    pub reset: bool,
    /// Tail cell that left the body this tick, if any — the single cell a
    /// renderer would need to erase.
    pub vacated: Option<Cell>,
}

/// The game engine: sequences one discrete tick of snake movement,
/// collision handling and food placement.
pub struct GameEngine {
    grid: Grid,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            rng: rand::thread_rng(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Build the initial state: a one-segment snake at the center heading
    /// right, with food placed off the snake.
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(&self.grid);
        let food = Food::place(&self.grid, &snake, &mut self.rng);
        GameState { snake, food }
    }

    /// Run exactly one tick, in fixed order: buffered input, movement,
    /// collision handling, food check.
    ///
    /// On a self-collision the snake has already reset; food is relocated
    /// against the reset body (its old cell may now be occupied) and no
    /// growth or food check happens this tick.
    pub fn tick(&mut self, state: &mut GameState, input: Option<Direction>) -> TickOutcome {
        if let Some(direction) = input {
            state.snake.request_direction(direction);
        }

        match state.snake.advance(&self.grid, &mut self.rng) {
            Step::Reset => {
                state.food = Food::place(&self.grid, &state.snake, &mut self.rng);
                TickOutcome {
                    head: state.snake.head(),
                    ate_food: false,
                    reset: true,
                    vacated: None,
                }
            }
            Step::Moved { head, vacated } => {
                let ate_food = head == state.food.cell;
                if ate_food {
                    state.snake.grow();
                    state.food = Food::place(&self.grid, &state.snake, &mut self.rng);
                }

                TickOutcome {
                    head,
                    ate_food,
                    reset: false,
                    vacated,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let mut engine = GameEngine::new(&GameConfig::default());
        let state = engine.new_game();

        assert_eq!(state.snake.body, vec![Cell::new(16, 12)]);
        assert_eq!(state.snake.direction, Direction::Right);
        assert!(!state.snake.occupies(state.food.cell));
    }

    #[test]
    fn test_plain_tick_moves_head() {
        let mut engine = GameEngine::new(&GameConfig::small());
        let mut state = engine.new_game();
        state.food.cell = Cell::new(0, 0); // off the movement path

        let outcome = engine.tick(&mut state, None);

        assert_eq!(outcome.head, Cell::new(6, 5));
        assert!(!outcome.ate_food);
        assert!(!outcome.reset);
        assert_eq!(outcome.vacated, Some(Cell::new(5, 5)));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_input_is_forwarded_to_the_snake() {
        let mut engine = GameEngine::new(&GameConfig::small());
        let mut state = engine.new_game();
        state.food.cell = Cell::new(0, 0);

        let outcome = engine.tick(&mut state, Some(Direction::Down));
        assert_eq!(outcome.head, Cell::new(5, 6));
        assert_eq!(state.snake.direction, Direction::Down);

        // A reversal request is dropped, not an error.
        let outcome = engine.tick(&mut state, Some(Direction::Up));
        assert_eq!(outcome.head, Cell::new(5, 7));
        assert_eq!(state.snake.direction, Direction::Down);
    }

    #[test]
    fn test_scenario_four_ticks_to_the_food() {
        // 32x24 grid, snake at (16,12) heading right, food at (20,12).
        let mut engine = GameEngine::new(&GameConfig::default());
        let mut state = engine.new_game();
        state.food.cell = Cell::new(20, 12);

        for expected_x in [17, 18, 19] {
            let outcome = engine.tick(&mut state, None);
            assert_eq!(outcome.head, Cell::new(expected_x, 12));
            assert!(!outcome.ate_food);
        }

        let outcome = engine.tick(&mut state, None);
        assert_eq!(outcome.head, Cell::new(20, 12));
        assert!(outcome.ate_food);
        assert_eq!(state.snake.target_len, 2);
        assert_ne!(state.food.cell, Cell::new(20, 12));
        assert!(!state.snake.occupies(state.food.cell));
    }

    #[test]
    fn test_reset_tick_relocates_food_and_skips_growth() {
        let mut engine = GameEngine::new(&GameConfig::small());
        let mut state = engine.new_game();

        // Next head lands on body[2].
        state.snake.body = vec![Cell::new(5, 5), Cell::new(5, 6), Cell::new(6, 5)];
        state.snake.target_len = 3;
        state.snake.direction = Direction::Right;
        // Put the food where the colliding head would have landed.
        state.food.cell = Cell::new(6, 5);

        let outcome = engine.tick(&mut state, None);

        assert!(outcome.reset);
        assert!(!outcome.ate_food);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Cell::new(5, 5));
        assert_eq!(state.snake.target_len, 1);
        assert!(!state.snake.occupies(state.food.cell));
    }

    #[test]
    fn test_eating_twice_lengthens_lazily() {
        let mut engine = GameEngine::new(&GameConfig::default());
        let mut state = engine.new_game();

        // Food directly ahead for two consecutive ticks.
        state.food.cell = Cell::new(17, 12);
        let outcome = engine.tick(&mut state, None);
        assert!(outcome.ate_food);
        assert_eq!(state.snake.len(), 1); // growth not yet realized

        state.food.cell = Cell::new(18, 12);
        let outcome = engine.tick(&mut state, None);
        assert!(outcome.ate_food);
        assert_eq!(state.snake.target_len, 3);
        assert_eq!(state.snake.len(), 2);

        state.food.cell = Cell::new(0, 0);
        engine.tick(&mut state, None);
        assert_eq!(state.snake.len(), 3);
        engine.tick(&mut state, None);
        assert_eq!(state.snake.len(), 3); // caught up
    }
}
