//! Toroidal snake for the terminal
//!
//! Classic arcade snake on a wraparound grid: crossing an edge teleports
//! to the opposite side, and running into yourself resets the snake
//! instead of ending the game.
//!
//! - Core game logic with no I/O dependencies (game module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
