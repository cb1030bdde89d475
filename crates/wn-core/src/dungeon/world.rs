//! The tile grid.
//!
//! `World` owns the rectangular map the materializer carves into. It has no
//! generation logic of its own; the two carve operations are the only way
//! terrain changes after construction.

use super::tile::Tile;

/// The materialized map: `height` rows by `width` columns of tiles,
/// row-major, every cell always populated.
#[derive(Debug, Clone)]
pub struct World {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl World {
    /// Create a new world filled with solid wall
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![Tile::wall(); width]; height],
        }
    }

    /// Width in tiles
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the tile at a position.
    ///
    /// Returns `None` for negative or out-of-range coordinates, never
    /// panics. Collaborators use this to probe past the map edge cheaply.
    pub fn point(&self, row: i32, col: i32) -> Option<&Tile> {
        if row < 0 || col < 0 {
            return None;
        }
        self.tiles.get(row as usize)?.get(col as usize)
    }

    /// Check if the player can stand at a position. Off-grid counts as
    /// non-traversable.
    pub fn is_traversable(&self, row: i32, col: i32) -> bool {
        self.point(row, col).is_some_and(Tile::is_traversable)
    }

    /// Unchecked write. Callers guarantee bounds; only the carve operations
    /// use this.
    pub(crate) fn set(&mut self, row: usize, col: usize, tile: Tile) {
        self.tiles[row][col] = tile;
    }

    /// Floor-fill a `width x height` rectangle with `(top, left)` as its
    /// top-left corner.
    pub fn carve_room(&mut self, top: usize, left: usize, width: usize, height: usize) {
        for row in top..top + height {
            for col in left..left + width {
                self.set(row, col, Tile::floor());
            }
        }
    }

    /// Carve an L-shaped corridor: column `c1` over rows `r1..=r2`, then
    /// row `r2` over columns `c1..=c2`, both segments inclusive and in
    /// either order. With a matching row or column pair the L degenerates
    /// to a straight line, which is how the materializer always calls it.
    pub fn carve_passage(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) {
        for row in r1.min(r2)..=r1.max(r2) {
            self.set(row, c1, Tile::floor());
        }
        for col in c1.min(c2)..=c1.max(c2) {
            self.set(r2, col, Tile::floor());
        }
    }
}
