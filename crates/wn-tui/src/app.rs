//! Application state and main UI controller

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use wn_core::{GameLoopResult, GameState};

use crate::display::{GlyphSet, GraphicsMode, detect_glyph_set};
use crate::input::key_to_command;
use crate::widgets::MapWidget;

/// Application state
pub struct App {
    /// Running game session
    state: GameState,

    /// Glyphs used to draw the map
    glyphs: Box<dyn GlyphSet>,

    /// Should quit
    should_quit: bool,
}

impl App {
    pub fn new(state: GameState, mode: GraphicsMode) -> Self {
        Self {
            state,
            glyphs: detect_glyph_set(mode),
            should_quit: false,
        }
    }

    /// Main loop: draw, block on input, dispatch. Generation happened at
    /// construction; nothing here mutates the map.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        let Some(command) = key_to_command(key) else {
            return;
        };
        if self.state.execute(command) == GameLoopResult::Quit {
            self.should_quit = true;
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        let map_block = Block::default().borders(Borders::ALL).title("warren");
        let map_area = map_block.inner(chunks[0]);
        frame.render_widget(map_block, chunks[0]);
        frame.render_widget(
            MapWidget::new(self.state.world(), self.state.player(), self.glyphs.as_ref()),
            map_area,
        );

        let player = self.state.player();
        let status = Line::from(format!(
            " ({}, {})  seed {}  hjkl/arrows move, q quits",
            player.row,
            player.col,
            self.state.seed()
        ));
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use wn_core::{GameConfig, GameRng};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        })
    }

    fn new_app() -> App {
        let state = GameState::new(GameConfig::default(), GameRng::new(42)).unwrap();
        App::new(state, GraphicsMode::Classic)
    }

    #[test]
    fn test_quit_key_stops_the_app() {
        let mut app = new_app();
        assert!(!app.should_quit);
        app.handle_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = new_app();
        let before = *app.state.player();
        app.handle_event(press(KeyCode::Char('z')));
        assert!(!app.should_quit);
        assert_eq!(*app.state.player(), before);
    }

    #[test]
    fn test_draw_renders_player_glyph() {
        let app = new_app();
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let rendered = terminal.backend().buffer().content().iter().fold(
            String::new(),
            |mut acc, cell| {
                acc.push_str(cell.symbol());
                acc
            },
        );
        assert!(rendered.contains('@'));
    }
}
