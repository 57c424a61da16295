//! UI chrome colors - monochrome so generated swatches stand out

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_secondary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub error_bg: Color,
}

impl Palette {
    pub const MONO: Self = Self {
        bg_secondary: Color::Rgb(18, 18, 18),    // #121212 near black
        fg_primary: Color::Rgb(229, 231, 235),   // #e5e7eb
        fg_secondary: Color::Rgb(156, 163, 175), // #9ca3af
        accent: Color::Rgb(255, 255, 255),       // #ffffff
        border: Color::Rgb(64, 64, 64),          // #404040
        error: Color::Rgb(252, 165, 165),        // #fca5a5
        error_bg: Color::Rgb(69, 10, 10),        // #450a0a
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}
