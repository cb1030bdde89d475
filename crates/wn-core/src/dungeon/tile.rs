//! Tile types

use strum::{Display, EnumIter};

use crate::consts::{S_FLOOR, S_WALL};

/// Terrain type of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Wall = 0,
    Floor = 1,
}

impl TileType {
    /// Check if this terrain can be walked on
    pub const fn is_traversable(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Get the display character for this terrain
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Wall => S_WALL,
            TileType::Floor => S_FLOOR,
        }
    }
}

/// A single map tile
///
/// Tiles are value-like: terrain changes replace the whole tile rather than
/// mutating it in place. Traversability is fixed at creation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tile {
    /// Terrain type
    pub typ: TileType,

    /// Has been seen by the player (reserved for fog of war, not yet
    /// consulted by gameplay)
    pub explored: bool,
}

impl Tile {
    /// Create a solid wall tile
    pub const fn wall() -> Self {
        Self {
            typ: TileType::Wall,
            explored: false,
        }
    }

    /// Create a floor tile
    pub const fn floor() -> Self {
        Self {
            typ: TileType::Floor,
            explored: false,
        }
    }

    /// Check if the player can stand here
    pub const fn is_traversable(&self) -> bool {
        self.typ.is_traversable()
    }

    /// Get the display character
    pub const fn symbol(&self) -> char {
        self.typ.symbol()
    }
}
