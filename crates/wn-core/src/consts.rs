//! Default map dimensions and display symbols.

/// Coarse generation grid (in areas). Odd on both axes so the centered
/// player spawn lands inside the seed room rather than on a block border.
pub const COARSE_WIDTH: usize = 9;
pub const COARSE_HEIGHT: usize = 7;

/// Per-area cell size (in tiles)
pub const ROOM_WIDTH: usize = 7;
pub const ROOM_HEIGHT: usize = 3;

/// Map symbols
pub const S_WALL: char = '#';
pub const S_FLOOR: char = '.';
pub const S_PLAYER: char = '@';
pub const S_OFFGRID: char = ' ';
