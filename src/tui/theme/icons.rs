//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub search: &'static str,
    pub help: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub copy: &'static str,
    pub example: &'static str,
    pub selected: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f53f}",  // nf-fa-palette
            search: "\u{f002}",   // nf-fa-search
            help: "\u{f059}",     // nf-fa-question_circle
            error: "\u{f00d}",    // nf-fa-times
            success: "\u{f00c}",  // nf-fa-check
            copy: "\u{f0c5}",     // nf-fa-copy
            example: "\u{f0eb}",  // nf-fa-lightbulb_o
            selected: "\u{f054}", // nf-fa-chevron_right
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = tick as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
