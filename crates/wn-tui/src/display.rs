//! Glyph system for TUI rendering
//!
//! Provides support for both classic ASCII and Unicode block characters.

use strum::{Display, EnumString, VariantNames};
use wn_core::dungeon::{Tile, TileType};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Unicode block and shade characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering map features.
pub trait GlyphSet: Send + Sync {
    /// Get the character for a map tile.
    fn tile_char(&self, tile: &Tile) -> char;

    /// Get the character for the player.
    fn player_char(&self) -> char;

    /// Get the character for coordinates past the map edge.
    fn offgrid_char(&self) -> char;
}

/// Classic ASCII glyph set: the tile's own symbol.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn tile_char(&self, tile: &Tile) -> char {
        tile.symbol()
    }

    fn player_char(&self) -> char {
        wn_core::S_PLAYER
    }

    fn offgrid_char(&self) -> char {
        wn_core::S_OFFGRID
    }
}

/// Unicode glyph set with solid walls and centered floor dots.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn tile_char(&self, tile: &Tile) -> char {
        match tile.typ {
            TileType::Wall => '█',
            TileType::Floor => '·',
        }
    }

    fn player_char(&self) -> char {
        wn_core::S_PLAYER
    }

    fn offgrid_char(&self) -> char {
        wn_core::S_OFFGRID
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    // Check LANG, LC_ALL, or LC_CTYPE for "UTF-8"
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            if val.to_uppercase().contains("UTF-8") || val.to_uppercase().contains("UTF8") {
                return true;
            }
        }
    }

    // Most modern terminals support UTF-8 by default; check TERM as a hint.
    if let Ok(term) = std::env::var("TERM") {
        if term == "xterm-256color" || term == "alacritty" || term == "kitty" || term == "iterm" {
            return true;
        }
    }

    false
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}
