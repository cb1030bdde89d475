//! The player entity.

use crate::action::Direction;
use crate::dungeon::World;

/// The player's position on the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub row: i32,
    pub col: i32,
}

impl Player {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Spawn at the world's center tile, inside the guaranteed seed room
    pub fn at_world_center(world: &World) -> Self {
        Self::new(world.height() as i32 / 2, world.width() as i32 / 2)
    }

    /// Step one tile in `dir` if the destination is traversable.
    /// Off-grid destinations count as non-traversable. Returns whether the
    /// player moved.
    pub fn try_move(&mut self, dir: Direction, world: &World) -> bool {
        let (dr, dc) = dir.delta();
        let (row, col) = (self.row + dr, self.col + dc);
        if world.is_traversable(row, col) {
            self.row = row;
            self.col = col;
            true
        } else {
            false
        }
    }
}
