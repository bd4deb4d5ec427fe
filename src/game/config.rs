use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid, in cells
    pub grid_width: i32,
    /// Height of the game grid, in cells
    pub grid_height: i32,
    /// Logic ticks per second
    pub tick_rate: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 640x480 pixels at a 20px cell size.
        Self {
            grid_width: 32,
            grid_height: 24,
            tick_rate: 7.5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Time between logic ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate)
    }
}
