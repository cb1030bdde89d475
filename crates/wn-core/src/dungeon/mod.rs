//! Dungeon map: tiles, the tile grid, and the two-phase map generator.
//!
//! Generation runs once at startup: [`generate_area_graph`] grows a coarse
//! graph of connected areas, then [`materialize`] carves it into a concrete
//! [`World`] of tiles. [`generate_world`] does both in one call.

mod area;
mod generation;
mod tile;
mod world;

pub use area::{Area, AreaGraph, AreaKind, Connection, Dir};
pub use generation::{WorldgenError, generate_area_graph, generate_world, materialize};
pub use tile::{Tile, TileType};
pub use world::World;
