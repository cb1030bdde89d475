//! ratatui widgets for the game screen.

mod map;

pub use map::MapWidget;
