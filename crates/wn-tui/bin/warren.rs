//! warren - a procedurally generated dungeon crawler
//!
//! Main entry point for the game.

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use wn_core::{GameConfig, GameRng, GameState};
use wn_tui::{App, GraphicsMode};

/// warren - explore a freshly dug dungeon
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about = "warren - explore a freshly dug dungeon", long_about = None)]
struct Args {
    /// Map seed; omit for a random map (print it from the status line to
    /// replay a run)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Coarse map width, in areas
    #[arg(long, default_value_t = wn_core::COARSE_WIDTH)]
    width: usize,

    /// Coarse map height, in areas
    #[arg(long, default_value_t = wn_core::COARSE_HEIGHT)]
    height: usize,

    /// Room width, in tiles
    #[arg(long = "room-width", default_value_t = wn_core::ROOM_WIDTH)]
    room_width: usize,

    /// Room height, in tiles
    #[arg(long = "room-height", default_value_t = wn_core::ROOM_HEIGHT)]
    room_height: usize,

    /// Graphics mode (classic, fancy, auto)
    #[arg(short, long, default_value = "auto")]
    graphics: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let mode: GraphicsMode = args
        .graphics
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "graphics mode must be one of: classic, fancy, auto"))?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let config = GameConfig {
        coarse_width: args.width,
        coarse_height: args.height,
        room_width: args.room_width,
        room_height: args.room_height,
    };

    // Generate before touching the terminal so a bad configuration fails
    // with a readable message.
    let state = GameState::new(config, rng)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(state, mode).run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
