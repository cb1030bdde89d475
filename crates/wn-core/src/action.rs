//! Player commands and movement directions.

use strum::{Display, EnumIter};

/// A direction the player can step in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Row/column delta for one step
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// A game command, as produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step one tile in a direction
    Move(Direction),
    /// Repaint the screen
    Redraw,
    /// Quit the game
    Quit,
}
