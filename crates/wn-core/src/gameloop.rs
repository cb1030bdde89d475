//! Game session state and command execution.

use crate::action::Command;
use crate::consts::{COARSE_HEIGHT, COARSE_WIDTH, ROOM_HEIGHT, ROOM_WIDTH};
use crate::dungeon::{World, WorldgenError, generate_world};
use crate::player::Player;
use crate::rng::GameRng;

/// Map generation parameters for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Coarse grid width, in areas
    pub coarse_width: usize,
    /// Coarse grid height, in areas
    pub coarse_height: usize,
    /// Room block width, in tiles
    pub room_width: usize,
    /// Room block height, in tiles
    pub room_height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            coarse_width: COARSE_WIDTH,
            coarse_height: COARSE_HEIGHT,
            room_width: ROOM_WIDTH,
            room_height: ROOM_HEIGHT,
        }
    }
}

/// Result of executing one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Keep playing
    Continue,
    /// Player quit
    Quit,
}

/// Complete state of a running game session.
///
/// The world is generated once at construction and owned exclusively by the
/// session for its lifetime.
#[derive(Debug, Clone)]
pub struct GameState {
    world: World,
    player: Player,
    seed: u64,
}

impl GameState {
    /// Generate a world from `config` and spawn the player at its center,
    /// which lands in the guaranteed seed room.
    pub fn new(config: GameConfig, mut rng: GameRng) -> Result<Self, WorldgenError> {
        let world = generate_world(
            config.coarse_width,
            config.coarse_height,
            config.room_width,
            config.room_height,
            &mut rng,
        )?;
        let player = Player::at_world_center(&world);
        Ok(Self {
            world,
            player,
            seed: rng.seed(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Seed the world was generated from, for reproducing a session
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Execute one command against the session
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        match command {
            Command::Move(dir) => {
                self.player.try_move(dir, &self.world);
                GameLoopResult::Continue
            }
            Command::Redraw => GameLoopResult::Continue,
            Command::Quit => GameLoopResult::Quit,
        }
    }
}
