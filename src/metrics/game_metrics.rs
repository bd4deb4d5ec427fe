use std::time::{Duration, Instant};

/// Session counters, external to the core: the engine itself keeps no
/// score.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub apples_eaten: u32,
    pub resets: u32,
    pub longest_snake: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            apples_eaten: 0,
            resets: 0,
            longest_snake: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_apple_eaten(&mut self) {
        self.apples_eaten += 1;
    }

    pub fn on_reset(&mut self) {
        self.resets += 1;
    }

    pub fn on_snake_length(&mut self, len: usize) {
        if len > self.longest_snake {
            self.longest_snake = len;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
