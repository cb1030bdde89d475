//! Input handling - convert key events to commands
//!
//! Movement follows the usual roguelike bindings: vi keys and arrows.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wn_core::action::{Command, Direction};

/// Convert a key event to a game command.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    // Ctrl key combos
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') => Some(Command::Redraw), // Ctrl+R: redraw screen
            KeyCode::Char('c') => Some(Command::Quit),   // Ctrl+C: quit
            _ => None,
        };
    }

    match key.code {
        // Vi keys
        KeyCode::Char('h') => Some(Command::Move(Direction::West)),
        KeyCode::Char('j') => Some(Command::Move(Direction::South)),
        KeyCode::Char('k') => Some(Command::Move(Direction::North)),
        KeyCode::Char('l') => Some(Command::Move(Direction::East)),

        // Arrow keys
        KeyCode::Up => Some(Command::Move(Direction::North)),
        KeyCode::Down => Some(Command::Move(Direction::South)),
        KeyCode::Left => Some(Command::Move(Direction::West)),
        KeyCode::Right => Some(Command::Move(Direction::East)),

        // Meta
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}
