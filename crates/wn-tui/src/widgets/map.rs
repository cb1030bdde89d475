//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use wn_core::dungeon::{TileType, World};
use wn_core::player::Player;

use crate::display::GlyphSet;

/// Widget for rendering a viewport of the map, centered on the player.
///
/// Each visible cell is a `point` query against the world; coordinates past
/// the map edge come back `None` and render as the off-grid glyph.
pub struct MapWidget<'a> {
    world: &'a World,
    player: &'a Player,
    glyphs: &'a dyn GlyphSet,
}

impl<'a> MapWidget<'a> {
    pub fn new(world: &'a World, player: &'a Player, glyphs: &'a dyn GlyphSet) -> Self {
        Self {
            world,
            player,
            glyphs,
        }
    }

    fn cell_display(&self, row: i32, col: i32) -> (char, Style) {
        if row == self.player.row && col == self.player.col {
            return (
                self.glyphs.player_char(),
                Style::default().fg(Color::White).bold(),
            );
        }

        match self.world.point(row, col) {
            Some(tile) => {
                let color = match tile.typ {
                    TileType::Wall => Color::Gray,
                    TileType::Floor => Color::DarkGray,
                };
                (self.glyphs.tile_char(tile), Style::default().fg(color))
            }
            None => (self.glyphs.offgrid_char(), Style::default()),
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Top-left world coordinate of the viewport window.
        let top = self.player.row - i32::from(area.height) / 2;
        let left = self.player.col - i32::from(area.width) / 2;

        for y in 0..area.height {
            for x in 0..area.width {
                let (ch, style) = self.cell_display(top + i32::from(y), left + i32::from(x));
                if let Some(cell) = buf.cell_mut(Position::new(area.x + x, area.y + y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}
