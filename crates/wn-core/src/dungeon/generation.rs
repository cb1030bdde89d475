//! Map generation.
//!
//! Two phases, each a single function: [`generate_area_graph`] grows a
//! coarse connectivity graph by breadth-first expansion from the grid
//! center, then [`materialize`] carves the finished graph into a tile
//! [`World`]. All randomness is drawn from the injected [`GameRng`], so a
//! seed reproduces the map byte for byte.

use strum::IntoEnumIterator;
use thiserror::Error;

use super::area::{Area, AreaGraph, AreaKind, Connection, Dir};
use super::world::World;
use crate::rng::GameRng;

/// Configuration errors caught at map construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldgenError {
    #[error("coarse grid dimensions must be positive, got {width}x{height}")]
    EmptyCoarseGrid { width: usize, height: usize },

    #[error("room dimensions must be positive, got {width}x{height}")]
    EmptyRoom { width: usize, height: usize },
}

/// Grow the coarse area graph by breadth-first frontier expansion.
///
/// The seed area sits at the grid center `(height/2, width/2)` and is
/// always a room, so the spawn region is guaranteed walkable. Every area
/// created after it gets a coin-flipped kind, and each connection between
/// two adjacent areas is written exactly once, by whichever endpoint is
/// created second. Sides facing off the grid are always `Wall`.
pub fn generate_area_graph(
    width: usize,
    height: usize,
    rng: &mut GameRng,
) -> Result<AreaGraph, WorldgenError> {
    if width == 0 || height == 0 {
        return Err(WorldgenError::EmptyCoarseGrid { width, height });
    }

    let mut graph = AreaGraph::new(width, height);
    let (seed_row, seed_col) = graph.center();

    let mut seed = Area::new(AreaKind::Room, seed_row, seed_col);
    resolve_connections(&mut graph, &mut seed, rng);
    graph.insert(seed);

    let mut frontier = vec![(seed_row, seed_col)];
    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for &(row, col) in &frontier {
            for dir in Dir::iter() {
                let (dr, dc) = dir.delta();
                let next_row = row as i32 + dr;
                let next_col = col as i32 + dc;
                if !graph.in_bounds(next_row, next_col)
                    || graph.area(next_row, next_col).is_some()
                {
                    continue;
                }

                let kind = if rng.coin() {
                    AreaKind::Room
                } else {
                    AreaKind::Passage
                };
                let mut area = Area::new(kind, next_row as usize, next_col as usize);
                resolve_connections(&mut graph, &mut area, rng);
                graph.insert(area);
                next_frontier.push((next_row as usize, next_col as usize));
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Resolve all four sides of a not-yet-inserted area against the grid.
///
/// Off-grid sides become `Wall`. Sides toward a cell with no area yet stay
/// `Unset`; that neighbor's own resolution pass writes both sides later, so
/// no edge is ever written twice. Sides toward an existing neighbor get a
/// coin-flipped `Wall`/`Open`, mirrored onto the neighbor's opposite slot.
fn resolve_connections(graph: &mut AreaGraph, area: &mut Area, rng: &mut GameRng) {
    for dir in Dir::iter() {
        let (dr, dc) = dir.delta();
        let next_row = area.row() as i32 + dr;
        let next_col = area.col() as i32 + dc;

        if !graph.in_bounds(next_row, next_col) {
            area.set_connection(dir, Connection::Wall);
            continue;
        }
        if graph.area(next_row, next_col).is_none() {
            continue;
        }

        let connection = if rng.coin() {
            Connection::Wall
        } else {
            Connection::Open
        };
        area.set_connection(dir, connection);
        if let Some(neighbor) = graph.area_mut(next_row, next_col) {
            neighbor.set_connection(dir.opposite(), connection);
        }
    }
}

/// Carve a finished area graph into a tile world.
///
/// Each coarse cell reserves a `room_width x room_height` block plus a
/// shared one-tile border, with one extra border tile at the far edge.
/// Room areas carve their block; passage areas carve nothing of their own.
/// Only `Right` and `Down` open connections carve corridors, since the
/// opposite directions are covered when the neighbor processes its own
/// slots. Corridor endpoints are the two cell centers, matched on row or
/// column so the L-carve comes out straight.
pub fn materialize(
    graph: &AreaGraph,
    room_width: usize,
    room_height: usize,
) -> Result<World, WorldgenError> {
    if room_width == 0 || room_height == 0 {
        return Err(WorldgenError::EmptyRoom {
            width: room_width,
            height: room_height,
        });
    }

    let mut world = World::new(
        graph.width() * room_width + graph.width() + 1,
        graph.height() * room_height + graph.height() + 1,
    );

    for area in graph.iter() {
        // +1 skips the shared border row/column.
        let top = 1 + area.row() * (room_height + 1);
        let left = 1 + area.col() * (room_width + 1);
        let center_row = top + room_height / 2;
        let center_col = left + room_width / 2;

        if area.kind() == AreaKind::Room {
            world.carve_room(top, left, room_width, room_height);
        }

        if area.connection(Dir::Right) == Connection::Open {
            let dest_col = 1 + (area.col() + 1) * (room_width + 1) + room_width / 2;
            world.carve_passage(center_row, center_col, center_row, dest_col);
        }
        if area.connection(Dir::Down) == Connection::Open {
            let dest_row = 1 + (area.row() + 1) * (room_height + 1) + room_height / 2;
            world.carve_passage(center_row, center_col, dest_row, center_col);
        }
    }

    Ok(world)
}

/// One-shot map construction: grow the graph, then carve it.
pub fn generate_world(
    coarse_width: usize,
    coarse_height: usize,
    room_width: usize,
    room_height: usize,
    rng: &mut GameRng,
) -> Result<World, WorldgenError> {
    let graph = generate_area_graph(coarse_width, coarse_height, rng)?;
    materialize(&graph, room_width, room_height)
}
