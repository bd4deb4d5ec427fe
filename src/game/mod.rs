//! Core game logic for toroidal snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies: the wraparound grid, the snake state machine, food
//! placement, and the per-tick engine that sequences them.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, GameState, TickOutcome};
pub use food::Food;
pub use grid::{Cell, Grid};
pub use snake::{Snake, Step};
