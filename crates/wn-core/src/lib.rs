//! wn-core: Core game logic for the warren dungeon crawler
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: the map generator takes an
//! injectable [`GameRng`], so a fixed seed reproduces a run exactly.

pub mod action;
pub mod dungeon;
pub mod player;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{GameConfig, GameLoopResult, GameState};
pub use rng::GameRng;
