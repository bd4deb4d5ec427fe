use rand::Rng;

use super::direction::Direction;
use super::grid::{Cell, Grid};

/// What one tick of movement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The head moved to `head`. `vacated` is the tail cell that left the
    /// body this tick, if any (None while the body is catching up to its
    /// target length).
    Moved { head: Cell, vacated: Option<Cell> },
    /// The new head ran into the body; the snake was reset in place.
    Reset,
}

/// The player-controlled snake.
///
/// The body is head-first and never empty. Growth is lazy: eating only
/// raises `target_len`, and the body catches up one segment per tick by
/// keeping its tail, so `body.len() <= target_len` holds after every
/// advance. A self-collision is not fatal — the snake resets to a single
/// segment at the grid center with a freshly randomized heading, and play
/// continues.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Current heading, applied every tick
    pub direction: Direction,
    /// Buffered next heading, consumed at the start of the next advance
    pub pending: Option<Direction>,
    /// Length the body is growing toward
    pub target_len: usize,
}

impl Snake {
    /// Create a new snake: one segment at the grid center, heading right.
    pub fn new(grid: &Grid) -> Self {
        Self {
            body: vec![grid.center()],
            direction: Direction::Right,
            pending: None,
            target_len: 1,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        *self.body.last().unwrap()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Buffer `direction` for the next tick, unless it is the exact
    /// opposite of the current heading. Reversal requests are silently
    /// dropped; they would drive the head straight into the second segment.
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending = Some(direction);
        }
    }

    /// Advance one tick: apply the buffered heading, move the head one
    /// wrapped step, and either collide-and-reset or shift the body.
    pub fn advance<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> Step {
        if let Some(next) = self.pending.take() {
            self.direction = next;
        }

        let new_head = grid.wrap(self.head(), self.direction);

        // Any segment except the current head counts, including the tail:
        // the check runs before the tail has a chance to vacate.
        if self.body[1..].contains(&new_head) {
            self.reset(grid, rng);
            return Step::Reset;
        }

        self.body.insert(0, new_head);
        let vacated = if self.body.len() > self.target_len {
            self.body.pop()
        } else {
            // Keep the tail: one segment of lazy growth realized.
            None
        };

        Step::Moved {
            head: new_head,
            vacated,
        }
    }

    /// Raise the target length by one. The body itself is untouched; it
    /// lengthens over the following ticks as `advance` retains the tail.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Back to the initial configuration: single segment at the grid
    /// center, target length 1, random heading, no buffered input.
    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.body = vec![grid.center()];
        self.target_len = 1;
        self.direction = Direction::random(rng);
        self.pending = None;
    }

    /// Check whether a cell is covered by any body segment.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}
