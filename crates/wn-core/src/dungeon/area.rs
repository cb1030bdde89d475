//! The coarse generation graph.
//!
//! An [`AreaGraph`] is a dense grid of optional [`Area`] nodes, one per
//! coarse cell. It is purely topological: area units, not tile units.
//! Neighbor lookups go through coordinate arithmetic on the grid, so there
//! are no cross-references between nodes.

use strum::{Display, EnumIter};

/// Compass direction over the coarse grid.
///
/// The discriminant doubles as the connection slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(usize)]
pub enum Dir {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Dir {
    /// Connection slot index for this direction
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row/column offset to the neighboring coarse cell
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// The direction a neighbor uses to face back at us
    pub const fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }
}

/// What an area materializes as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AreaKind {
    /// Carves a full room block of floor
    Room,
    /// No footprint of its own; only hosts through-corridors
    Passage,
}

/// State of one side of an area.
///
/// `Unset` means "not yet resolved" and is distinct from `Wall` so the
/// generator can tell an undecided edge from one resolved closed. A
/// finished graph holds `Unset` only on sides whose neighbor cell was never
/// populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Connection {
    #[default]
    Unset,
    Wall,
    Open,
}

/// One node of the coarse generation graph
#[derive(Debug, Clone)]
pub struct Area {
    kind: AreaKind,
    row: usize,
    col: usize,
    connections: [Connection; 4],
}

impl Area {
    /// Create a fresh area with all four sides unresolved
    pub fn new(kind: AreaKind, row: usize, col: usize) -> Self {
        Self {
            kind,
            row,
            col,
            connections: [Connection::Unset; 4],
        }
    }

    pub const fn kind(&self) -> AreaKind {
        self.kind
    }

    /// Row in the coarse grid
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column in the coarse grid
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Connection state on one side
    pub const fn connection(&self, dir: Dir) -> Connection {
        self.connections[dir.index()]
    }

    pub(crate) fn set_connection(&mut self, dir: Dir, connection: Connection) {
        self.connections[dir.index()] = connection;
    }
}

/// The coarse grid of optional areas, `height` rows by `width` columns.
///
/// Produced in full by the generator and read-only afterward. Cells the
/// expansion never reached hold `None` and materialize as solid wall.
#[derive(Debug, Clone)]
pub struct AreaGraph {
    width: usize,
    height: usize,
    areas: Vec<Vec<Option<Area>>>,
}

impl AreaGraph {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            areas: vec![vec![None; width]; height],
        }
    }

    /// Width in areas
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in areas
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The seed cell of the expansion, `(row, col)`
    pub const fn center(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Check whether a coarse coordinate lies on the grid
    pub const fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Get the area at a coarse cell, if one was created there.
    /// Off-grid coordinates yield `None`.
    pub fn area(&self, row: i32, col: i32) -> Option<&Area> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.areas[row as usize][col as usize].as_ref()
    }

    pub(crate) fn area_mut(&mut self, row: i32, col: i32) -> Option<&mut Area> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.areas[row as usize][col as usize].as_mut()
    }

    /// Place an area at its own coordinates. Caller guarantees the cell is
    /// in bounds and empty.
    pub(crate) fn insert(&mut self, area: Area) {
        let (row, col) = (area.row, area.col);
        debug_assert!(self.areas[row][col].is_none());
        self.areas[row][col] = Some(area);
    }

    /// Iterate over all populated areas in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter().flatten().filter_map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Dir::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_negates_delta() {
        for dir in Dir::iter() {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_slot_indices_match_layout() {
        assert_eq!(Dir::Up.index(), 0);
        assert_eq!(Dir::Right.index(), 1);
        assert_eq!(Dir::Down.index(), 2);
        assert_eq!(Dir::Left.index(), 3);
    }

    #[test]
    fn test_new_area_is_unresolved() {
        let area = Area::new(AreaKind::Room, 2, 3);
        for dir in Dir::iter() {
            assert_eq!(area.connection(dir), Connection::Unset);
        }
        assert_eq!(area.row(), 2);
        assert_eq!(area.col(), 3);
    }

    #[test]
    fn test_graph_bounds_and_center() {
        let graph = AreaGraph::new(5, 4);
        assert!(graph.in_bounds(0, 0));
        assert!(graph.in_bounds(3, 4));
        assert!(!graph.in_bounds(4, 0));
        assert!(!graph.in_bounds(0, 5));
        assert!(!graph.in_bounds(-1, 0));
        assert_eq!(graph.center(), (2, 2));
    }

    #[test]
    fn test_empty_cell_yields_none() {
        let mut graph = AreaGraph::new(3, 3);
        assert!(graph.area(1, 1).is_none());
        graph.insert(Area::new(AreaKind::Passage, 1, 1));
        assert_eq!(graph.area(1, 1).map(Area::kind), Some(AreaKind::Passage));
        assert!(graph.area(0, 0).is_none());
        assert!(graph.area(-1, 1).is_none());
    }
}
